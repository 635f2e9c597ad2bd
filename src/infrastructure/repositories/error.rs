use crate::domain::errors::DomainError;
use mongodb::bson::oid::ObjectId;
use mongodb::error::{Error, ErrorKind, WriteFailure};

const DUPLICATE_KEY: i32 = 11000;

/// Maps driver errors to domain errors at the repository boundary. A
/// duplicate-key rejection is the one write failure with a distinct
/// meaning; everything else is an opaque persistence fault carrying the
/// store's message.
pub fn map_mongo(err: Error) -> DomainError {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            if write_error.code == DUPLICATE_KEY {
                DomainError::Conflict("duplicate key".into())
            } else {
                DomainError::Persistence(write_error.message.clone())
            }
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Identifiers cross the application boundary as hex strings; a string
/// that does not parse as an object id can never match a document, so it
/// is rejected before the store is asked.
pub(super) fn parse_object_id(id: &str, field: &str) -> Result<ObjectId, DomainError> {
    ObjectId::parse_str(id)
        .map_err(|_| DomainError::Validation(format!("{field} is not a valid object id: {id}")))
}
