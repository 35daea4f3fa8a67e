//! Cost domain for assignment matrices.

use std::fmt::{Debug, Display};

use num_traits::Float;

/// Numeric domain of matrix cells.
///
/// Costs are floating-point so that `unreachable()` can forbid a pairing;
/// the solve only adds, subtracts and compares, so integral inputs stay
/// exact.
///
/// # Examples
///
/// ```
/// use matchforge_core::Cost;
///
/// assert!(f64::unreachable().is_unreachable());
/// assert!(!1.5f64.is_unreachable());
/// ```
pub trait Cost: Float + Debug + Display + 'static {
    /// The sentinel cost marking a forbidden row/column pairing.
    fn unreachable() -> Self {
        Self::infinity()
    }

    /// Returns true if this cell must never appear in a real assignment.
    fn is_unreachable(&self) -> bool {
        !self.is_finite()
    }
}

impl<T> Cost for T where T: Float + Debug + Display + 'static {}
