use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ManufacturingCard {
    pub method: &'static str,
    pub summary: &'static str,
    pub isotopes: &'static [&'static str],
    pub strengths: &'static str,
    pub constraints: &'static str,
}

pub const MANUFACTURING_CARDS: &[ManufacturingCard] = &[
    ManufacturingCard {
        method: "Nuclear reactor",
        summary: "Neutron irradiation of enriched targets in research reactors.",
        isotopes: &["Lu-177", "I-131", "Mo-99", "Tb-161"],
        strengths: "High yields of neutron-rich therapeutic isotopes",
        constraints: "Few ageing reactors; scheduled outages disrupt supply",
    },
    ManufacturingCard {
        method: "Cyclotron",
        summary: "Charged-particle bombardment of solid, liquid or gas targets.",
        isotopes: &["F-18", "Cu-64", "Zr-89", "At-211", "Ga-68"],
        strengths: "Distributed hospital and regional production",
        constraints: "Short half-lives limit distribution radius",
    },
    ManufacturingCard {
        method: "Generator",
        summary: "Long-lived parent decays to a short-lived daughter eluted on site.",
        isotopes: &["Ga-68", "Tc-99m", "Pb-212", "Y-90"],
        strengths: "On-demand doses without an on-site accelerator",
        constraints: "Parent isotope supply and elution yield decay over time",
    },
    ManufacturingCard {
        method: "Linear accelerator",
        summary: "Electron or proton beams drive photonuclear or spallation reactions.",
        isotopes: &["Ac-225", "Cu-67", "Mo-99"],
        strengths: "Reactor-free routes to scarce isotopes",
        constraints: "Radionuclidic impurities and high capital cost",
    },
    ManufacturingCard {
        method: "Radiochemical separation",
        summary: "Extraction of daughters from legacy stockpiles and waste streams.",
        isotopes: &["Ac-225", "Ra-223", "Th-227"],
        strengths: "Very high purity alpha emitters",
        constraints: "Finite legacy material (Th-229, U-233)",
    },
];
