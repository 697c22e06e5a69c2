//! Matrix factorization model trained with stochastic gradient descent.
//!
//! The model approximates a sparse rating matrix as the product of two
//! low-rank latent matrices, one row per user and one row per item. A
//! predicted rating is the dot product of the corresponding rows.
//!
//! # Algorithm Overview
//!
//! Training performs the following steps for every rating `(u, i, r)`,
//! repeated for a fixed number of epochs:
//! 1. Predict `r̂ = p_u · q_i` from the current latent rows
//! 2. Compute the residual `e = r - r̂`
//! 3. Update both rows with the regularized SGD rule, each factor
//!    reading the other matrix's pre-update value:
//!    `p_u += lr * (e * q_i - reg * p_u)` and
//!    `q_i += lr * (e * p_u - reg * q_i)`
//!
//! Updates are sequential: later ratings in an epoch see rows already
//! modified by earlier ratings. There is no convergence check, early
//! stopping, or loss reporting; `fit` runs exactly
//! `epochs * ratings.len()` update steps.

use crate::config::FactorizationConfig;
use crate::error::{FactorizationError, Result};
use crate::rating::Rating;
use nalgebra::DMatrix;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Upper bound (exclusive) of the uniform initialization range.
const INIT_SCALE: f64 = 0.1;

/// A matrix factorization model for collaborative filtering.
///
/// Owns a `num_users x latent_factors` user matrix and a
/// `num_items x latent_factors` item matrix. Both are randomly
/// initialized at construction, mutated in place by [`fit`](Self::fit),
/// and read by [`predict`](Self::predict).
///
/// # Example
///
/// ```rust
/// use factorec::{FactorizationConfig, MatrixFactorization, Rating};
///
/// let ratings = [
///     Rating::new(0, 0, 5.0),
///     Rating::new(0, 1, 4.0),
///     Rating::new(1, 0, 3.0),
///     Rating::new(1, 1, 2.0),
///     Rating::new(2, 0, 4.0),
///     Rating::new(2, 1, 1.0),
/// ];
///
/// let mut model = MatrixFactorization::new(FactorizationConfig::new(3, 2))?;
/// model.fit(&ratings)?;
/// let predicted = model.predict(0, 1)?;
/// assert!(predicted.is_finite());
/// # Ok::<(), factorec::FactorizationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MatrixFactorization {
    config: FactorizationConfig,
    user_factors: DMatrix<f64>,
    item_factors: DMatrix<f64>,
}

impl MatrixFactorization {
    /// Creates a model with randomly initialized latent matrices.
    ///
    /// Every entry of both matrices is drawn independently and uniformly
    /// from `[0, 0.1)`, user matrix first in row-major order. The draws
    /// come from a process-local generator seeded from entropy, or from
    /// `config.seed` when one is set.
    ///
    /// # Errors
    ///
    /// Returns [`FactorizationError::InvalidConfiguration`] if the
    /// configuration fails [`FactorizationConfig::validate`].
    pub fn new(config: FactorizationConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let init = Uniform::new(0.0, INIT_SCALE);

        let user_factors =
            Self::random_matrix(config.num_users, config.latent_factors, &mut rng, &init);
        let item_factors =
            Self::random_matrix(config.num_items, config.latent_factors, &mut rng, &init);

        Ok(Self {
            config,
            user_factors,
            item_factors,
        })
    }

    fn random_matrix(
        rows: usize,
        cols: usize,
        rng: &mut SmallRng,
        init: &Uniform<f64>,
    ) -> DMatrix<f64> {
        let mut matrix = DMatrix::zeros(rows, cols);
        for r in 0..rows {
            for c in 0..cols {
                matrix[(r, c)] = init.sample(rng);
            }
        }
        matrix
    }

    /// Trains the model on an ordered sequence of ratings.
    ///
    /// Runs `epochs` sequential passes over `ratings` in the given order,
    /// applying the regularized SGD update described in the module docs.
    /// Rating order matters: different permutations of the same ratings
    /// generally produce different trained matrices.
    ///
    /// All rating indices are validated before any update is applied, so
    /// a failed call leaves the latent matrices untouched.
    ///
    /// # Errors
    ///
    /// Returns [`FactorizationError::UserOutOfBounds`] or
    /// [`FactorizationError::ItemOutOfBounds`] if any rating references
    /// an index outside the configured dimensions.
    pub fn fit(&mut self, ratings: &[Rating]) -> Result<()> {
        for rating in ratings {
            self.check_user(rating.user)?;
            self.check_item(rating.item)?;
        }

        let lr = self.config.learning_rate;
        let reg = self.config.reg_param;

        for _ in 0..self.config.epochs {
            for rating in ratings {
                let (u, i) = (rating.user, rating.item);

                let predicted = self
                    .user_factors
                    .row(u)
                    .dot(&self.item_factors.row(i));
                let error = rating.value - predicted;

                // Both factor updates must read the pre-update value of
                // the other matrix, so cache the old entries first.
                for k in 0..self.config.latent_factors {
                    let user_k = self.user_factors[(u, k)];
                    let item_k = self.item_factors[(i, k)];
                    self.user_factors[(u, k)] += lr * (error * item_k - reg * user_k);
                    self.item_factors[(i, k)] += lr * (error * user_k - reg * item_k);
                }
            }
        }

        Ok(())
    }

    /// Predicts the rating of `item` by `user`.
    ///
    /// Returns the dot product of the two latent rows, unclamped; callers
    /// needing a bounded rating scale should clamp the result (see
    /// [`predict_clamped`](Self::predict_clamped)). Calling `predict`
    /// before `fit` is legal and returns a prediction from the random
    /// initial embeddings.
    ///
    /// # Errors
    ///
    /// Returns [`FactorizationError::UserOutOfBounds`] or
    /// [`FactorizationError::ItemOutOfBounds`] for indices outside the
    /// configured dimensions.
    pub fn predict(&self, user: usize, item: usize) -> Result<f64> {
        self.check_user(user)?;
        self.check_item(item)?;
        Ok(self.user_factors.row(user).dot(&self.item_factors.row(item)))
    }

    /// Predicts a rating and clamps it to `[lo, hi]`.
    ///
    /// Convenience for callers with a domain-bounded rating scale; the
    /// underlying model output is unclamped.
    pub fn predict_clamped(&self, user: usize, item: usize, lo: f64, hi: f64) -> Result<f64> {
        Ok(self.predict(user, item)?.clamp(lo, hi))
    }

    /// Sum of squared residuals of the model over a rating slice.
    ///
    /// Pure read; useful as a before/after training signal.
    ///
    /// # Errors
    ///
    /// Same bounds errors as [`predict`](Self::predict).
    pub fn squared_error(&self, ratings: &[Rating]) -> Result<f64> {
        let mut sum = 0.0;
        for rating in ratings {
            let residual = rating.value - self.predict(rating.user, rating.item)?;
            sum += residual * residual;
        }
        Ok(sum)
    }

    /// The configuration this model was built with.
    pub fn config(&self) -> &FactorizationConfig {
        &self.config
    }

    /// The user latent matrix (`num_users x latent_factors`).
    pub fn user_factors(&self) -> &DMatrix<f64> {
        &self.user_factors
    }

    /// The item latent matrix (`num_items x latent_factors`).
    pub fn item_factors(&self) -> &DMatrix<f64> {
        &self.item_factors
    }

    fn check_user(&self, user: usize) -> Result<()> {
        if user >= self.config.num_users {
            return Err(FactorizationError::user_out_of_bounds(
                user,
                self.config.num_users,
            ));
        }
        Ok(())
    }

    fn check_item(&self, item: usize) -> Result<()> {
        if item >= self.config.num_items {
            return Err(FactorizationError::item_out_of_bounds(
                item,
                self.config.num_items,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_matrix_dimensions() {
        let config = FactorizationConfig::new(7, 4).with_latent_factors(3);
        let model = MatrixFactorization::new(config).unwrap();

        assert_eq!(model.user_factors().nrows(), 7);
        assert_eq!(model.user_factors().ncols(), 3);
        assert_eq!(model.item_factors().nrows(), 4);
        assert_eq!(model.item_factors().ncols(), 3);
    }

    #[test]
    fn test_rejects_invalid_configuration() {
        let err = MatrixFactorization::new(FactorizationConfig::new(0, 2)).unwrap_err();
        assert!(matches!(
            err,
            FactorizationError::InvalidConfiguration { .. }
        ));
    }

    #[test]
    fn test_prediction_is_dot_product() {
        let config = FactorizationConfig::new(2, 2).with_latent_factors(4).with_seed(7);
        let model = MatrixFactorization::new(config).unwrap();

        let expected: f64 = (0..4)
            .map(|k| model.user_factors()[(1, k)] * model.item_factors()[(0, k)])
            .sum();
        let predicted = model.predict(1, 0).unwrap();

        assert_relative_eq!(predicted, expected, epsilon = 1e-12);
        // Predict is a pure read, repeated calls agree exactly.
        assert_eq!(predicted.to_bits(), model.predict(1, 0).unwrap().to_bits());
    }

    #[test]
    fn test_predict_before_fit_is_legal() {
        let model = MatrixFactorization::new(FactorizationConfig::new(3, 2)).unwrap();
        // Meaningless but legal: random embeddings give a small positive value.
        let predicted = model.predict(2, 1).unwrap();
        assert!(predicted.is_finite());
        assert!((0.0..1.0).contains(&predicted));
    }

    #[test]
    fn test_predict_bounds() {
        let model = MatrixFactorization::new(FactorizationConfig::new(3, 2)).unwrap();

        assert_eq!(
            model.predict(3, 0).unwrap_err(),
            FactorizationError::user_out_of_bounds(3, 3)
        );
        assert_eq!(
            model.predict(0, 2).unwrap_err(),
            FactorizationError::item_out_of_bounds(2, 2)
        );
    }

    #[test]
    fn test_predict_clamped() {
        let config = FactorizationConfig::new(1, 1).with_seed(3);
        let model = MatrixFactorization::new(config).unwrap();

        // Raw prediction of fresh embeddings is far below 1.0.
        let clamped = model.predict_clamped(0, 0, 1.0, 5.0).unwrap();
        assert_eq!(clamped, 1.0);
    }

    proptest! {
        #[test]
        fn prop_initialization_in_range(
            num_users in 1usize..8,
            num_items in 1usize..8,
            latent_factors in 1usize..8,
            seed in any::<u64>(),
        ) {
            let config = FactorizationConfig::new(num_users, num_items)
                .with_latent_factors(latent_factors)
                .with_seed(seed);
            let model = MatrixFactorization::new(config).unwrap();

            prop_assert_eq!(model.user_factors().shape(), (num_users, latent_factors));
            prop_assert_eq!(model.item_factors().shape(), (num_items, latent_factors));

            for &entry in model.user_factors().iter().chain(model.item_factors().iter()) {
                prop_assert!((0.0..INIT_SCALE).contains(&entry));
            }
        }
    }
}
