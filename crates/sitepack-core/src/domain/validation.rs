use crate::domain::{
    entities::{document::AggregatedDocument, layout::SourceLayout},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_layout(layout: &SourceLayout) -> Result<(), DomainError> {
        layout.validate()
    }

    pub fn validate_document(document: &AggregatedDocument) -> Result<(), DomainError> {
        document.validate()
    }
}
