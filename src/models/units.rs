//! Unit-tagged scalar quantities.
//!
//! Each quantity wraps a bare `f64` in the unit it is measured in. Only the
//! conversions a formula actually needs are implemented, so combining two
//! quantities in mismatched units is a type error instead of a silently wrong
//! magnitude.

use crate::constants::{METERS_PER_KILOMETER, MPS_TO_KMH, SECONDS_PER_HOUR};
use std::fmt;
use std::ops::{Add, Mul, Sub};

macro_rules! quantity {
    ($(#[$meta:meta])* $name:ident, $symbol:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
        pub struct $name(pub f64);

        impl $name {
            pub const SYMBOL: &'static str = $symbol;

            pub const fn value(self) -> f64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match f.precision() {
                    Some(precision) => write!(f, "{:.*} {}", precision, self.0, Self::SYMBOL),
                    None => write!(f, "{} {}", self.0, Self::SYMBOL),
                }
            }
        }

        impl Add for $name {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $name {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $name {
            type Output = Self;

            fn mul(self, rhs: f64) -> Self {
                Self(self.0 * rhs)
            }
        }
    };
}

quantity!(
    /// Speed in km/h.
    KilometersPerHour,
    "km/h"
);
quantity!(
    /// Speed in m/s.
    MetersPerSecond,
    "m/s"
);
quantity!(
    /// Acceleration in m/s². Negative values decelerate.
    MetersPerSecondSquared,
    "m/s²"
);
quantity!(Seconds, "s");
quantity!(Hours, "h");
quantity!(Kilometers, "km");
quantity!(Meters, "m");
quantity!(Kilograms, "kg");
quantity!(
    /// Fuel mass consumed per second.
    KilogramsPerSecond,
    "kg/s"
);

impl MetersPerSecond {
    pub fn to_kilometers_per_hour(self) -> KilometersPerHour {
        KilometersPerHour(self.0 * MPS_TO_KMH)
    }
}

impl Seconds {
    pub fn to_hours(self) -> Hours {
        Hours(self.0 / SECONDS_PER_HOUR)
    }
}

impl Meters {
    pub fn to_kilometers(self) -> Kilometers {
        Kilometers(self.0 / METERS_PER_KILOMETER)
    }
}

// Δv = a · t
impl Mul<Seconds> for MetersPerSecondSquared {
    type Output = MetersPerSecond;

    fn mul(self, rhs: Seconds) -> MetersPerSecond {
        MetersPerSecond(self.0 * rhs.0)
    }
}

// d = v · t
impl Mul<Hours> for KilometersPerHour {
    type Output = Kilometers;

    fn mul(self, rhs: Hours) -> Kilometers {
        Kilometers(self.0 * rhs.0)
    }
}

// Δd = v · t, for v already in m/s
impl Mul<Seconds> for MetersPerSecond {
    type Output = Meters;

    fn mul(self, rhs: Seconds) -> Meters {
        Meters(self.0 * rhs.0)
    }
}

// m = ṁ · t
impl Mul<Seconds> for KilogramsPerSecond {
    type Output = Kilograms;

    fn mul(self, rhs: Seconds) -> Kilograms {
        Kilograms(self.0 * rhs.0)
    }
}
