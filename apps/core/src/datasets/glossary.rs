use crate::domain::Section;

/// Long name and one-line description for a target or isotope key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlossaryEntry {
    pub key: &'static str,
    pub full_name: &'static str,
    pub description: &'static str,
}

const fn entry(key: &'static str, full_name: &'static str, description: &'static str) -> GlossaryEntry {
    GlossaryEntry {
        key,
        full_name,
        description,
    }
}

pub const TARGETS: &[GlossaryEntry] = &[
    entry("PSMA", "Prostate-Specific Membrane Antigen", "Cell-surface enzyme overexpressed in prostate cancer; the most active radioligand target."),
    entry("SSTR2", "Somatostatin Receptor 2", "G-protein coupled receptor expressed on neuroendocrine tumours."),
    entry("SSTR", "Somatostatin Receptors", "Receptor family targeted by dotatate and dotatoc ligands in neuroendocrine tumours."),
    entry("FAP", "Fibroblast Activation Protein", "Protease on cancer-associated fibroblasts found in the stroma of many solid tumours."),
    entry("GRPR", "Gastrin-Releasing Peptide Receptor", "Bombesin receptor overexpressed in prostate and breast cancers."),
    entry("CXCR4", "C-X-C Chemokine Receptor 4", "Chemokine receptor expressed in haematological malignancies and several solid tumours."),
    entry("HER2", "Human Epidermal Growth Factor Receptor 2", "Receptor tyrosine kinase amplified in subsets of breast and gastric cancer."),
    entry("CAIX", "Carbonic Anhydrase IX", "Hypoxia-induced enzyme highly expressed in clear cell renal carcinoma."),
    entry("Nectin-4", "Nectin Cell Adhesion Molecule 4", "Adhesion protein overexpressed in urothelial and other carcinomas."),
    entry("DLL3", "Delta-Like Ligand 3", "Notch ligand expressed on small cell lung cancer and neuroendocrine carcinomas."),
    entry("GPC3", "Glypican-3", "Heparan sulfate proteoglycan expressed in hepatocellular carcinoma."),
    entry("CD20", "B-Lymphocyte Antigen CD20", "B-cell surface antigen targeted in non-Hodgkin lymphoma."),
    entry("CD38", "Cyclic ADP Ribose Hydrolase", "Surface glycoprotein highly expressed in multiple myeloma."),
    entry("CD45", "Protein Tyrosine Phosphatase Receptor Type C", "Pan-leukocyte antigen used for conditioning before stem cell transplant."),
    entry("MC1R", "Melanocortin 1 Receptor", "Receptor expressed on melanoma cells."),
    entry("NTSR1", "Neurotensin Receptor 1", "Receptor overexpressed in pancreatic, colorectal and prostate cancers."),
    entry("Integrin αvβ6", "Integrin Alpha-V Beta-6", "Epithelial integrin upregulated in pancreatic and head and neck cancers."),
    entry("Integrin αvβ3", "Integrin Alpha-V Beta-3", "Angiogenesis marker on activated endothelium and tumour cells."),
    entry("CCK2R", "Cholecystokinin 2 Receptor", "Receptor expressed in medullary thyroid carcinoma and small cell lung cancer."),
    entry("Bone", "Bone Mineral Matrix", "Hydroxyapatite in regions of high bone turnover, targeted by bone-seeking agents."),
    entry("NET", "Norepinephrine Transporter", "Transporter taken up by MIBG in pheochromocytoma and neuroblastoma."),
    entry("ER", "Estrogen Receptor", "Nuclear hormone receptor imaged in ER-positive breast cancer."),
    entry("TROP2", "Trophoblast Cell-Surface Antigen 2", "Transmembrane glycoprotein overexpressed in many epithelial cancers."),
    entry("CEACAM5", "Carcinoembryonic Antigen-Related Cell Adhesion Molecule 5", "Glycoprotein expressed in colorectal and other adenocarcinomas."),
];

pub const ISOTOPES: &[GlossaryEntry] = &[
    entry("Lu-177", "Lutetium-177", "Beta emitter with a 6.6 day half-life; the workhorse of approved radioligand therapy."),
    entry("Ac-225", "Actinium-225", "Alpha emitter with a 9.9 day half-life delivering high-energy, short-range damage."),
    entry("Ga-68", "Gallium-68", "Generator-produced positron emitter for same-day PET imaging."),
    entry("F-18", "Fluorine-18", "Cyclotron-produced positron emitter; the most widely used PET isotope."),
    entry("Tc-99m", "Technetium-99m", "Gamma emitter from Mo-99 generators used in most SPECT scans worldwide."),
    entry("I-131", "Iodine-131", "Beta and gamma emitter used for thyroid therapy for decades."),
    entry("Y-90", "Yttrium-90", "Pure beta emitter used in radioembolisation and antibody conjugates."),
    entry("Ra-223", "Radium-223", "Bone-seeking alpha emitter for metastatic prostate cancer."),
    entry("Pb-212", "Lead-212", "In-vivo alpha generator with a 10.6 hour half-life."),
    entry("Cu-64", "Copper-64", "Positron and beta emitter pairing with Cu-67 for theranostics."),
    entry("Cu-67", "Copper-67", "Beta emitter forming a matched theranostic pair with Cu-64."),
    entry("Zr-89", "Zirconium-89", "Long-lived positron emitter suited to antibody PET imaging."),
    entry("Tb-161", "Terbium-161", "Beta and Auger emitter aimed at micrometastatic disease."),
    entry("At-211", "Astatine-211", "Cyclotron-produced alpha emitter with a 7.2 hour half-life."),
    entry("In-111", "Indium-111", "Gamma emitter used for SPECT imaging of peptides and antibodies."),
    entry("I-124", "Iodine-124", "Long-lived positron emitter used for antibody and thyroid PET."),
    entry("Th-227", "Thorium-227", "Alpha emitter used in targeted thorium conjugates."),
    entry("Bi-213", "Bismuth-213", "Short-lived alpha emitter eluted from Ac-225 generators."),
];

/// Glossary entry for `name` within `section`, matched case-insensitively.
pub fn lookup(section: Section, name: &str) -> Option<&'static GlossaryEntry> {
    let table = match section {
        Section::Target => TARGETS,
        Section::Isotope => ISOTOPES,
        Section::Company => return None,
    };
    let needle = name.trim();
    table
        .iter()
        .find(|entry| entry.key.eq_ignore_ascii_case(needle))
}

#[cfg(test)]
mod tests {
    use super::lookup;
    use crate::domain::Section;

    #[test]
    fn lookup_is_case_insensitive() {
        let entry = lookup(Section::Target, " psma ");
        assert_eq!(entry.map(|e| e.full_name), Some("Prostate-Specific Membrane Antigen"));
    }

    #[test]
    fn companies_have_no_glossary() {
        assert!(lookup(Section::Company, "PSMA").is_none());
        assert!(lookup(Section::Isotope, "Unobtanium-1").is_none());
    }
}
