//! Matrix-factorization collaborative filtering.
//!
//! This crate learns low-dimensional latent vectors per user and per item
//! from sparse `(user, item, rating)` observations, such that their dot
//! product approximates the observed rating, and predicts unseen ratings
//! from the trained embeddings.
//!
//! # Key Concepts
//!
//! - **Latent factors**: Unobserved dimensions that jointly explain user
//!   preferences and item characteristics
//! - **Matrix factorization**: Approximating a sparse rating matrix as the
//!   product of two low-rank matrices
//! - **SGD**: Sequential parameter updates after each individual rating,
//!   with L2 regularization shrinking the embeddings toward zero
//!
//! # Modules
//!
//! - [`config`]: Hyperparameter configuration with builder methods
//! - [`error`]: Error types and the crate `Result` alias
//! - [`model`]: The factorization model (initialization, training, prediction)
//! - [`rating`]: Rating observation type
//!
//! # Example
//!
//! ```rust
//! use factorec::prelude::*;
//!
//! let ratings = [
//!     Rating::new(0, 0, 5.0),
//!     Rating::new(0, 1, 4.0),
//!     Rating::new(1, 0, 3.0),
//!     Rating::new(1, 1, 2.0),
//!     Rating::new(2, 0, 4.0),
//!     Rating::new(2, 1, 1.0),
//! ];
//!
//! let config = FactorizationConfig::new(3, 2)
//!     .with_learning_rate(0.01)
//!     .with_epochs(100);
//! let mut model = MatrixFactorization::new(config)?;
//! model.fit(&ratings)?;
//!
//! let predicted = model.predict(0, 1)?;
//! assert!(predicted.is_finite());
//! # Ok::<(), FactorizationError>(())
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod rating;

// Re-export commonly used items at the crate root
pub use config::FactorizationConfig;
pub use error::{FactorizationError, Result};
pub use model::MatrixFactorization;
pub use rating::Rating;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use factorec::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::FactorizationConfig;
    pub use crate::error::{FactorizationError, Result};
    pub use crate::model::MatrixFactorization;
    pub use crate::rating::Rating;
}
