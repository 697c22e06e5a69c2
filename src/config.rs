//! Hyperparameter configuration for factorization models.
//!
//! A [`FactorizationConfig`] fixes the model dimensions and training
//! hyperparameters for the lifetime of a model instance. Construction
//! follows the builder style: start from [`FactorizationConfig::new`]
//! and chain `with_*` methods.

use crate::error::{FactorizationError, Result};

/// Configuration for a matrix factorization model.
///
/// # Example
///
/// ```rust
/// use factorec::FactorizationConfig;
///
/// let config = FactorizationConfig::new(100, 50)
///     .with_latent_factors(16)
///     .with_learning_rate(0.005)
///     .with_epochs(20);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FactorizationConfig {
    /// Number of users the model is sized for.
    pub num_users: usize,

    /// Number of items the model is sized for.
    pub num_items: usize,

    /// Dimensionality of the latent embeddings.
    pub latent_factors: usize,

    /// SGD step size.
    pub learning_rate: f64,

    /// L2 regularization strength.
    pub reg_param: f64,

    /// Number of full passes over the rating sequence per `fit` call.
    pub epochs: usize,

    /// Seed for latent matrix initialization.
    ///
    /// `None` seeds from process entropy, so two models initialize (and
    /// therefore train) differently. Set a seed for reproducible runs
    /// and tests.
    pub seed: Option<u64>,
}

impl FactorizationConfig {
    /// Creates a configuration with default hyperparameters.
    ///
    /// Defaults: 10 latent factors, learning rate 0.001, regularization
    /// 0.02, 10 epochs, entropy-seeded initialization.
    pub fn new(num_users: usize, num_items: usize) -> Self {
        Self {
            num_users,
            num_items,
            latent_factors: 10,
            learning_rate: 0.001,
            reg_param: 0.02,
            epochs: 10,
            seed: None,
        }
    }

    /// Sets the embedding dimensionality.
    pub fn with_latent_factors(mut self, latent_factors: usize) -> Self {
        self.latent_factors = latent_factors;
        self
    }

    /// Sets the SGD step size.
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Sets the L2 regularization strength.
    pub fn with_reg_param(mut self, reg_param: f64) -> Self {
        self.reg_param = reg_param;
        self
    }

    /// Sets the number of training epochs.
    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    /// Sets a fixed initialization seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Dimensions must be positive, the learning rate must be a positive
    /// finite number, and the regularization strength must be a
    /// non-negative finite number. Zero epochs is legal and makes `fit`
    /// a no-op.
    pub fn validate(&self) -> Result<()> {
        if self.num_users == 0 {
            return Err(FactorizationError::invalid_configuration(
                "num_users must be positive",
            ));
        }
        if self.num_items == 0 {
            return Err(FactorizationError::invalid_configuration(
                "num_items must be positive",
            ));
        }
        if self.latent_factors == 0 {
            return Err(FactorizationError::invalid_configuration(
                "latent_factors must be positive",
            ));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(FactorizationError::invalid_configuration(format!(
                "learning_rate must be a positive finite number, got {}",
                self.learning_rate
            )));
        }
        if !self.reg_param.is_finite() || self.reg_param < 0.0 {
            return Err(FactorizationError::invalid_configuration(format!(
                "reg_param must be a non-negative finite number, got {}",
                self.reg_param
            )));
        }
        Ok(())
    }
}
