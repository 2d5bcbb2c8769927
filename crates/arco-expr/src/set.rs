//! Sets that constraint functions are restricted to.

use std::fmt;

/// A feasible region for a constraint function.
pub trait Set: Clone + fmt::Debug + PartialEq + 'static {
    /// Whether [`Set::update_dimension`] can shrink the set after a variable
    /// is removed from its function.
    const SUPPORTS_DIMENSION_UPDATE: bool = false;

    fn dimension(&self) -> usize {
        1
    }

    /// Copy of the set resized to `dimension`; sets without dimension
    /// updates return themselves unchanged.
    fn update_dimension(&self, dimension: usize) -> Self {
        let _ = dimension;
        self.clone()
    }
}

/// `f(x) == value`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EqualTo {
    pub value: f64,
}

impl EqualTo {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

/// `f(x) <= upper`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LessThan {
    pub upper: f64,
}

impl LessThan {
    pub fn new(upper: f64) -> Self {
        Self { upper }
    }
}

/// `f(x) >= lower`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreaterThan {
    pub lower: f64,
}

impl GreaterThan {
    pub fn new(lower: f64) -> Self {
        Self { lower }
    }
}

/// `lower <= f(x) <= upper`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub lower: f64,
    pub upper: f64,
}

impl Interval {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }
}

/// `f(x) ∈ {0, 1}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZeroOne;

/// `f(x) ∈ ℤ`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Integer;

impl Set for EqualTo {}
impl Set for LessThan {}
impl Set for GreaterThan {}
impl Set for Interval {}
impl Set for ZeroOne {}
impl Set for Integer {}

macro_rules! define_orthant_set {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            dimension: usize,
        }

        impl $name {
            pub fn new(dimension: usize) -> Self {
                Self { dimension }
            }
        }

        impl Set for $name {
            const SUPPORTS_DIMENSION_UPDATE: bool = true;

            fn dimension(&self) -> usize {
                self.dimension
            }

            fn update_dimension(&self, dimension: usize) -> Self {
                Self { dimension }
            }
        }
    };
}

define_orthant_set!(
    /// Every component equals zero.
    Zeros
);
define_orthant_set!(
    /// Every component is non-negative.
    Nonnegatives
);
define_orthant_set!(
    /// Every component is non-positive.
    Nonpositives
);

/// `t >= ||x||₂` for `(t, x)` of the given dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecondOrderCone {
    dimension: usize,
}

impl SecondOrderCone {
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }
}

impl Set for SecondOrderCone {
    fn dimension(&self) -> usize {
        self.dimension
    }
}

/// `{(x, y, z) : y e^(x/y) <= z, y > 0}`; always dimension 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExponentialCone;

impl Set for ExponentialCone {
    fn dimension(&self) -> usize {
        3
    }
}
