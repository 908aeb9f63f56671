//! Unit types for exposure values.

/// An asset or GDP value in US dollars.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    PartialOrd,
    serde::Deserialize,
    serde::Serialize,
    derive_more::Add,
    derive_more::Sub,
    derive_more::Display,
)]
pub struct Money(pub f64);

impl Money {
    /// Zero dollars.
    pub const ZERO: Money = Money(0.0);

    /// Returns the value as an f64.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether the value is neither infinite nor NaN.
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl From<f64> for Money {
    fn from(val: f64) -> Self {
        Self(val)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        Money(iter.map(|money| money.0).sum())
    }
}
