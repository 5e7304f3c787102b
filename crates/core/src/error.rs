use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_names_entity_and_id() {
        let err = CoreError::NotFound {
            entity: "ProjectContent",
            id: 42,
        };
        assert_eq!(
            err.to_string(),
            "Entity not found: ProjectContent with id 42"
        );
    }

    #[test]
    fn validation_display_carries_message() {
        let err = CoreError::Validation("version is required".into());
        assert_eq!(err.to_string(), "Validation failed: version is required");
    }
}
