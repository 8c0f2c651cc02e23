use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emission {
    Alpha,
    Beta,
    Positron,
    Gamma,
}

impl Emission {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Alpha => "α",
            Self::Beta => "β⁻",
            Self::Positron => "β⁺",
            Self::Gamma => "γ",
        }
    }

    /// Alpha and beta emitters are used for therapy, the rest for imaging.
    pub const fn is_therapeutic(self) -> bool {
        matches!(self, Self::Alpha | Self::Beta)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IsotopeCard {
    pub symbol: &'static str,
    pub name: &'static str,
    pub half_life_hours: f64,
    pub emission: Emission,
    pub production: &'static str,
    pub uses: &'static str,
}

impl IsotopeCard {
    /// Half-life rendered in the most readable unit.
    pub fn half_life_label(&self) -> String {
        let hours = self.half_life_hours;
        if hours < 2.0 {
            format!("{:.0} min", hours * 60.0)
        } else if hours < 48.0 {
            format!("{hours:.1} h")
        } else if hours < 24.0 * 365.0 {
            format!("{:.1} d", hours / 24.0)
        } else {
            format!("{:.0} y", hours / (24.0 * 365.25))
        }
    }
}

pub const ISOTOPE_CARDS: &[IsotopeCard] = &[
    IsotopeCard {
        symbol: "Lu-177",
        name: "Lutetium-177",
        half_life_hours: 159.5,
        emission: Emission::Beta,
        production: "Reactor (Lu-176 or Yb-176 irradiation)",
        uses: "PSMA and SSTR radioligand therapy",
    },
    IsotopeCard {
        symbol: "Ac-225",
        name: "Actinium-225",
        half_life_hours: 238.1,
        emission: Emission::Alpha,
        production: "Th-229 generator, accelerator spallation",
        uses: "Targeted alpha therapy",
    },
    IsotopeCard {
        symbol: "Ga-68",
        name: "Gallium-68",
        half_life_hours: 1.13,
        emission: Emission::Positron,
        production: "Ge-68/Ga-68 generator, cyclotron",
        uses: "PSMA and SSTR PET imaging",
    },
    IsotopeCard {
        symbol: "F-18",
        name: "Fluorine-18",
        half_life_hours: 1.83,
        emission: Emission::Positron,
        production: "Cyclotron",
        uses: "FDG and PSMA PET imaging",
    },
    IsotopeCard {
        symbol: "Tc-99m",
        name: "Technetium-99m",
        half_life_hours: 6.01,
        emission: Emission::Gamma,
        production: "Mo-99/Tc-99m generator",
        uses: "SPECT imaging",
    },
    IsotopeCard {
        symbol: "I-131",
        name: "Iodine-131",
        half_life_hours: 192.5,
        emission: Emission::Beta,
        production: "Reactor",
        uses: "Thyroid therapy, MIBG therapy",
    },
    IsotopeCard {
        symbol: "Y-90",
        name: "Yttrium-90",
        half_life_hours: 64.1,
        emission: Emission::Beta,
        production: "Sr-90/Y-90 generator",
        uses: "Radioembolisation, radioimmunotherapy",
    },
    IsotopeCard {
        symbol: "Ra-223",
        name: "Radium-223",
        half_life_hours: 274.3,
        emission: Emission::Alpha,
        production: "Ac-227 generator",
        uses: "Bone metastases",
    },
    IsotopeCard {
        symbol: "Pb-212",
        name: "Lead-212",
        half_life_hours: 10.64,
        emission: Emission::Beta,
        production: "Ra-224/Pb-212 generator",
        uses: "In-vivo alpha generator therapy",
    },
    IsotopeCard {
        symbol: "Cu-64",
        name: "Copper-64",
        half_life_hours: 12.7,
        emission: Emission::Positron,
        production: "Cyclotron (Ni-64)",
        uses: "PET imaging, theranostic pairing",
    },
    IsotopeCard {
        symbol: "Zr-89",
        name: "Zirconium-89",
        half_life_hours: 78.4,
        emission: Emission::Positron,
        production: "Cyclotron (Y-89)",
        uses: "Immuno-PET",
    },
    IsotopeCard {
        symbol: "Tb-161",
        name: "Terbium-161",
        half_life_hours: 165.6,
        emission: Emission::Beta,
        production: "Reactor (Gd-160)",
        uses: "Beta and Auger therapy",
    },
    IsotopeCard {
        symbol: "At-211",
        name: "Astatine-211",
        half_life_hours: 7.2,
        emission: Emission::Alpha,
        production: "Cyclotron (Bi-209 alpha beam)",
        uses: "Targeted alpha therapy",
    },
];

#[cfg(test)]
mod tests {
    use super::{Emission, ISOTOPE_CARDS};

    #[test]
    fn half_life_picks_a_readable_unit() {
        let by_symbol = |symbol: &str| ISOTOPE_CARDS.iter().find(|card| card.symbol == symbol);

        assert_eq!(by_symbol("Ga-68").map(|c| c.half_life_label()), Some("68 min".to_string()));
        assert_eq!(by_symbol("F-18").map(|c| c.half_life_label()), Some("110 min".to_string()));
        assert_eq!(by_symbol("Tc-99m").map(|c| c.half_life_label()), Some("6.0 h".to_string()));
        assert_eq!(by_symbol("Lu-177").map(|c| c.half_life_label()), Some("6.6 d".to_string()));
    }

    #[test]
    fn therapeutic_emissions() {
        assert!(Emission::Alpha.is_therapeutic());
        assert!(!Emission::Positron.is_therapeutic());
    }
}
