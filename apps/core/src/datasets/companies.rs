use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompanyCard {
    pub name: &'static str,
    pub headquarters: &'static str,
    pub focus: &'static str,
    pub lead_asset: &'static str,
    pub isotopes: &'static [&'static str],
}

pub const COMPANY_CARDS: &[CompanyCard] = &[
    CompanyCard {
        name: "Novartis",
        headquarters: "Basel, Switzerland",
        focus: "Radioligand therapy at commercial scale",
        lead_asset: "Pluvicto, Lutathera",
        isotopes: &["Lu-177", "Ga-68", "Ac-225"],
    },
    CompanyCard {
        name: "Bayer",
        headquarters: "Leverkusen, Germany",
        focus: "Alpha therapy and targeted conjugates",
        lead_asset: "Xofigo",
        isotopes: &["Ra-223", "Ac-225", "Th-227"],
    },
    CompanyCard {
        name: "Lantheus",
        headquarters: "Bedford, USA",
        focus: "PSMA diagnostics and therapeutic pipeline",
        lead_asset: "Pylarify",
        isotopes: &["F-18", "Lu-177", "Tc-99m"],
    },
    CompanyCard {
        name: "Curium",
        headquarters: "Paris, France",
        focus: "Isotope supply and nuclear medicine products",
        lead_asset: "Detectnet",
        isotopes: &["Cu-64", "Lu-177", "I-131"],
    },
    CompanyCard {
        name: "Telix Pharmaceuticals",
        headquarters: "Melbourne, Australia",
        focus: "Theranostic pairs across urology and oncology",
        lead_asset: "Illuccix",
        isotopes: &["Ga-68", "Lu-177", "Zr-89"],
    },
    CompanyCard {
        name: "ITM Isotope Technologies Munich",
        headquarters: "Munich, Germany",
        focus: "No-carrier-added Lu-177 and targeted therapy",
        lead_asset: "ITM-11",
        isotopes: &["Lu-177"],
    },
    CompanyCard {
        name: "RayzeBio",
        headquarters: "San Diego, USA",
        focus: "Actinium-based radiopharmaceuticals",
        lead_asset: "RYZ101",
        isotopes: &["Ac-225"],
    },
    CompanyCard {
        name: "Fusion Pharmaceuticals",
        headquarters: "Hamilton, Canada",
        focus: "Targeted alpha therapies",
        lead_asset: "FPI-2265",
        isotopes: &["Ac-225"],
    },
    CompanyCard {
        name: "POINT Biopharma",
        headquarters: "Indianapolis, USA",
        focus: "Radioligand development and manufacturing",
        lead_asset: "PNT2002",
        isotopes: &["Lu-177", "Ac-225"],
    },
    CompanyCard {
        name: "Clarity Pharmaceuticals",
        headquarters: "Sydney, Australia",
        focus: "Copper-64/67 theranostic platform",
        lead_asset: "SAR-bisPSMA",
        isotopes: &["Cu-64", "Cu-67"],
    },
    CompanyCard {
        name: "Perspective Therapeutics",
        headquarters: "Seattle, USA",
        focus: "Lead-212 alpha therapy",
        lead_asset: "VMT-α-NET",
        isotopes: &["Pb-212"],
    },
    CompanyCard {
        name: "Orano Med",
        headquarters: "Paris, France",
        focus: "Lead-212 production and alpha therapy",
        lead_asset: "AlphaMedix",
        isotopes: &["Pb-212"],
    },
];
