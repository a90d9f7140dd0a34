//! Mapping MongoDB driver errors onto domain errors

use mongodb::error::{Error as MongoError, ErrorKind};

use crate::domain::DomainError;

/// Classify a driver error by what the operator can do about it.
/// Messages carry only the kind's text, not the driver's labels and source chain.
pub fn map_mongo_error(err: MongoError) -> DomainError {
    match err.kind.as_ref() {
        ErrorKind::ServerSelection { message, .. } => {
            DomainError::connection_timeout(message.clone())
        }
        ErrorKind::Authentication { message, .. } => DomainError::operation(message.clone()),
        ErrorKind::Command(command) => DomainError::operation(command.message.clone()),
        ErrorKind::Write(_) => DomainError::operation(err.kind.to_string()),
        ErrorKind::InvalidArgument { message, .. } => DomainError::validation(format!(
            "Invalid MongoDB connection settings: {}",
            message
        )),
        _ => DomainError::internal(err.kind.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;
    use mongodb::error::CommandError;

    #[tokio::test]
    async fn test_bad_uri_scheme_is_validation() {
        let err = mongodb::options::ClientOptions::parse("postgres://localhost:5432")
            .await
            .unwrap_err();

        match map_mongo_error(err) {
            DomainError::Validation { message } => {
                assert!(message.starts_with("Invalid MongoDB connection settings: "));
                assert!(!message.contains("labels"));
                assert!(!message.contains("server response"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_command_error_is_operation_failure() {
        let command: CommandError = bson::from_document(doc! {
            "code": 13,
            "codeName": "Unauthorized",
            "errmsg": "not authorized on effiser to execute command",
        })
        .unwrap();
        let err = MongoError::from(ErrorKind::Command(command));

        let mapped = map_mongo_error(err);
        assert_eq!(mapped.kind(), "operation_failure");
        assert_eq!(
            mapped.to_string(),
            "Operation failure: not authorized on effiser to execute command"
        );
    }
}
