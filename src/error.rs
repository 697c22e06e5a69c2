//! Error types for factorization models.
//!
//! This module defines the error type surfaced by model construction,
//! training, and prediction, along with a crate-wide `Result` alias.

use thiserror::Error;

/// Errors that can occur when building or using a factorization model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactorizationError {
    /// Invalid model configuration.
    ///
    /// This error occurs when the model is configured with invalid
    /// hyperparameters (e.g., zero users, a non-positive learning rate).
    #[error("Invalid model configuration: {reason}")]
    InvalidConfiguration {
        /// Description of the configuration error
        reason: String,
    },

    /// A user index falls outside the configured number of users.
    ///
    /// This error occurs when a rating or prediction references a user
    /// the model was not sized for.
    #[error("User index {user} is out of bounds for a model with {num_users} users")]
    UserOutOfBounds {
        /// The offending user index
        user: usize,
        /// Number of users the model was configured with
        num_users: usize,
    },

    /// An item index falls outside the configured number of items.
    ///
    /// This error occurs when a rating or prediction references an item
    /// the model was not sized for.
    #[error("Item index {item} is out of bounds for a model with {num_items} items")]
    ItemOutOfBounds {
        /// The offending item index
        item: usize,
        /// Number of items the model was configured with
        num_items: usize,
    },
}

impl FactorizationError {
    /// Create an InvalidConfiguration error with a custom reason.
    pub fn invalid_configuration<S: Into<String>>(reason: S) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Create a UserOutOfBounds error.
    pub fn user_out_of_bounds(user: usize, num_users: usize) -> Self {
        Self::UserOutOfBounds { user, num_users }
    }

    /// Create an ItemOutOfBounds error.
    pub fn item_out_of_bounds(item: usize, num_items: usize) -> Self {
        Self::ItemOutOfBounds { item, num_items }
    }
}

/// Result type alias for factorization operations.
pub type Result<T> = std::result::Result<T, FactorizationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FactorizationError::invalid_configuration("num_users must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid model configuration: num_users must be positive"
        );

        let err = FactorizationError::user_out_of_bounds(3, 3);
        assert_eq!(
            err.to_string(),
            "User index 3 is out of bounds for a model with 3 users"
        );

        let err = FactorizationError::item_out_of_bounds(7, 2);
        assert_eq!(
            err.to_string(),
            "Item index 7 is out of bounds for a model with 2 items"
        );
    }
}
