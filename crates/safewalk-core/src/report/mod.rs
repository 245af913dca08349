//! First Information Report drafting.
//!
//! - `incident`: caller-supplied fields and JSON loading
//! - `schema`: JSON Schema validation of incident input
//! - `synthesizer`: builds the structured record
//! - `render`: prints the record and reads key fields back

mod incident;
mod render;
mod schema;
mod synthesizer;

pub use incident::IncidentData;
pub use render::{extract_report_fields, render_report, ReportFields};
pub use schema::validate_incident_schema;
pub use synthesizer::{
    appearance_from_description, Complainant, EvidenceItem, IncidentDetails, IncidentLocation,
    IncidentRecord, LegalSection, ReportStatus, ReportSynthesizer, SuspectProfile,
    FALLBACK_CATEGORY,
};
