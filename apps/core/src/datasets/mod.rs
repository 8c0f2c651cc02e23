//! Hardcoded literal datasets rendered by the static sections.

pub mod access;
pub mod approved;
pub mod companies;
pub mod glossary;
pub mod isotopes;
pub mod manufacturing;
pub mod sample;
pub mod series;

pub use access::{opacity_for, AccessEntry, ACCESS_TABLE, MIN_OPACITY};
pub use approved::{ApprovedDrug, Modality, APPROVED_DRUGS};
pub use companies::{CompanyCard, COMPANY_CARDS};
pub use glossary::{lookup, GlossaryEntry};
pub use isotopes::{Emission, IsotopeCard, ISOTOPE_CARDS};
pub use manufacturing::{ManufacturingCard, MANUFACTURING_CARDS};
pub use sample::sample_document;
pub use series::{SeriesPoint, TRIAL_SHARE_BY_ISOTOPE, TRIAL_STARTS_BY_YEAR};
