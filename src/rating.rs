//! Rating observations.

/// A single observed rating: one user's score for one item.
///
/// Ratings are supplied to [`MatrixFactorization::fit`](crate::MatrixFactorization::fit)
/// as an ordered slice; the model reads them and never mutates or stores them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rating {
    /// User index in `[0, num_users)`.
    pub user: usize,
    /// Item index in `[0, num_items)`.
    pub item: usize,
    /// Observed rating value.
    pub value: f64,
}

impl Rating {
    /// Creates a rating observation.
    pub fn new(user: usize, item: usize, value: f64) -> Self {
        Self { user, item, value }
    }
}

impl From<(usize, usize, f64)> for Rating {
    fn from((user, item, value): (usize, usize, f64)) -> Self {
        Self { user, item, value }
    }
}
