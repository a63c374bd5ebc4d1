use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
}

impl RepositoryError {
    /// Builds a not-found error for an item id.
    pub fn item_not_found(id: i64) -> Self {
        Self::NotFound {
            entity_type: "Item",
            id: id.to_string(),
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_not_found_display() {
        let error = RepositoryError::NotFound {
            entity_type: "Item",
            id: "9999".to_string(),
        };
        assert_eq!(error.to_string(), "Item not found: 9999");
    }

    #[test]
    fn test_item_not_found() {
        assert_eq!(
            RepositoryError::item_not_found(3),
            RepositoryError::NotFound {
                entity_type: "Item",
                id: "3".to_string(),
            }
        );
    }
}
