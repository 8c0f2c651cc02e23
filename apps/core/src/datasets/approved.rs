use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Diagnostic,
    Therapy,
}

impl Modality {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Diagnostic => "Diagnostic",
            Self::Therapy => "Therapy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApprovedDrug {
    pub brand: &'static str,
    pub isotope: &'static str,
    pub target: &'static str,
    pub indication: &'static str,
    pub company: &'static str,
    pub year: u16,
    pub modality: Modality,
}

pub const APPROVED_DRUGS: &[ApprovedDrug] = &[
    ApprovedDrug { brand: "Zevalin", isotope: "Y-90", target: "CD20", indication: "Non-Hodgkin lymphoma", company: "Acrotech", year: 2002, modality: Modality::Therapy },
    ApprovedDrug { brand: "Xofigo", isotope: "Ra-223", target: "Bone", indication: "Prostate cancer bone metastases", company: "Bayer", year: 2013, modality: Modality::Therapy },
    ApprovedDrug { brand: "Netspot", isotope: "Ga-68", target: "SSTR", indication: "Neuroendocrine tumours", company: "Novartis", year: 2016, modality: Modality::Diagnostic },
    ApprovedDrug { brand: "Axumin", isotope: "F-18", target: "Amino acid transport", indication: "Recurrent prostate cancer", company: "Blue Earth Diagnostics", year: 2016, modality: Modality::Diagnostic },
    ApprovedDrug { brand: "Lutathera", isotope: "Lu-177", target: "SSTR2", indication: "GEP neuroendocrine tumours", company: "Novartis", year: 2018, modality: Modality::Therapy },
    ApprovedDrug { brand: "Azedra", isotope: "I-131", target: "NET", indication: "Pheochromocytoma, paraganglioma", company: "Lantheus", year: 2018, modality: Modality::Therapy },
    ApprovedDrug { brand: "Detectnet", isotope: "Cu-64", target: "SSTR", indication: "Neuroendocrine tumours", company: "Curium", year: 2020, modality: Modality::Diagnostic },
    ApprovedDrug { brand: "Cerianna", isotope: "F-18", target: "ER", indication: "ER-positive breast cancer", company: "GE HealthCare", year: 2020, modality: Modality::Diagnostic },
    ApprovedDrug { brand: "Pylarify", isotope: "F-18", target: "PSMA", indication: "Prostate cancer", company: "Lantheus", year: 2021, modality: Modality::Diagnostic },
    ApprovedDrug { brand: "Illuccix", isotope: "Ga-68", target: "PSMA", indication: "Prostate cancer", company: "Telix Pharmaceuticals", year: 2021, modality: Modality::Diagnostic },
    ApprovedDrug { brand: "Locametz", isotope: "Ga-68", target: "PSMA", indication: "Prostate cancer", company: "Novartis", year: 2022, modality: Modality::Diagnostic },
    ApprovedDrug { brand: "Pluvicto", isotope: "Lu-177", target: "PSMA", indication: "Metastatic castration-resistant prostate cancer", company: "Novartis", year: 2022, modality: Modality::Therapy },
    ApprovedDrug { brand: "Posluma", isotope: "F-18", target: "PSMA", indication: "Prostate cancer", company: "Blue Earth Diagnostics", year: 2023, modality: Modality::Diagnostic },
];

/// Approved drugs sorted newest first; ties keep list order.
pub fn newest_first() -> Vec<&'static ApprovedDrug> {
    let mut drugs: Vec<_> = APPROVED_DRUGS.iter().collect();
    drugs.sort_by(|a, b| b.year.cmp(&a.year));
    drugs
}

#[cfg(test)]
mod tests {
    use super::{newest_first, Modality, APPROVED_DRUGS};

    #[test]
    fn newest_first_is_non_increasing() {
        let drugs = newest_first();
        assert_eq!(drugs.len(), APPROVED_DRUGS.len());
        assert!(drugs.windows(2).all(|pair| pair[0].year >= pair[1].year));
        assert_eq!(drugs[0].brand, "Posluma");
    }

    #[test]
    fn list_has_both_modalities() {
        assert!(APPROVED_DRUGS.iter().any(|d| d.modality == Modality::Therapy));
        assert!(APPROVED_DRUGS.iter().any(|d| d.modality == Modality::Diagnostic));
    }
}
