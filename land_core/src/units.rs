//! # Unit Types
//!
//! Unit tags and the fixed conversion table used by the engine.
//!
//! ## Units
//!
//! - **Linear input units**: feet, meter (length and breadth only)
//! - **International area units**: square feet, square meter
//! - **Ropani system** (hills): ropani, aana, paisa, daam
//! - **Bigha system** (Terai): bigha, katha, dhur
//!
//! Square feet is the canonical base unit. Every area unit has one entry in
//! the conversion table giving its size in square feet:
//!
//! | Unit        | sq ft   |
//! |-------------|---------|
//! | squareFeet  | 1       |
//! | squareMeter | 10.764  |
//! | ropani      | 5476    |
//! | aana        | 342.25  |
//! | paisa       | 85.56   |
//! | daam        | 21.39   |
//! | bigha       | 72900   |
//! | katha       | 3645    |
//! | dhur        | 182.25  |
//!
//! ## Example
//!
//! ```rust
//! use land_core::units::{AreaUnit, SqFt, SqM};
//!
//! assert_eq!(AreaUnit::Ropani.square_feet(), 5476.0);
//!
//! let plot: SqFt = SqM(100.0).into();
//! assert!((plot.0 - 1076.4).abs() < 1e-9);
//! ```

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::LandError;

/// Square feet in one square meter, as used for every meter-to-feet step.
pub const SQ_FT_PER_SQ_M: f64 = 10.764;

/// Square meters in one square foot, used only when the calculator turns a
/// feet × feet product into square meters.
///
/// This is deliberately not `1.0 / SQ_FT_PER_SQ_M` (0.09290304...).
pub const SQ_M_PER_SQ_FT: f64 = 0.0929;

// ============================================================================
// Linear Units
// ============================================================================

/// Unit of the length and breadth measurements fed to the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LinearUnit {
    #[default]
    Feet,
    Meter,
}

impl LinearUnit {
    pub const ALL: [LinearUnit; 2] = [LinearUnit::Feet, LinearUnit::Meter];

    /// Stable tag, also the label key in the i18n table
    pub fn key(self) -> &'static str {
        match self {
            LinearUnit::Feet => "feet",
            LinearUnit::Meter => "meter",
        }
    }
}

impl fmt::Display for LinearUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for LinearUnit {
    type Err = LandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "feet" | "foot" | "ft" => Ok(LinearUnit::Feet),
            "meter" | "meters" | "metre" | "m" => Ok(LinearUnit::Meter),
            _ => Err(LandError::unknown_unit(s.trim())),
        }
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Composite traditional measurement systems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnitSystem {
    /// Ropani-Aana-Paisa-Daam, used in the hill regions
    Ropani,
    /// Bigha-Katha-Dhur, used in the Terai
    Bigha,
}

impl UnitSystem {
    /// Label key for the system heading
    pub fn key(self) -> &'static str {
        match self {
            UnitSystem::Ropani => "ropaniSystem",
            UnitSystem::Bigha => "bighaSystem",
        }
    }

    /// Units of this system, largest first
    pub fn units(self) -> &'static [AreaUnit] {
        match self {
            UnitSystem::Ropani => &[AreaUnit::Ropani, AreaUnit::Aana, AreaUnit::Paisa, AreaUnit::Daam],
            UnitSystem::Bigha => &[AreaUnit::Bigha, AreaUnit::Katha, AreaUnit::Dhur],
        }
    }
}

impl FromStr for UnitSystem {
    type Err = LandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "ropani" | "hill" | "hills" => Ok(UnitSystem::Ropani),
            "bigha" | "terai" => Ok(UnitSystem::Bigha),
            _ => Err(LandError::unknown_unit(s.trim())),
        }
    }
}

/// Area unit accepted by the converter and produced by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AreaUnit {
    #[default]
    SquareFeet,
    SquareMeter,
    Ropani,
    Aana,
    Paisa,
    Daam,
    Bigha,
    Katha,
    Dhur,
}

impl AreaUnit {
    /// All units in the order the converter lists them
    pub const ALL: [AreaUnit; 9] = [
        AreaUnit::SquareFeet,
        AreaUnit::SquareMeter,
        AreaUnit::Ropani,
        AreaUnit::Aana,
        AreaUnit::Paisa,
        AreaUnit::Daam,
        AreaUnit::Bigha,
        AreaUnit::Katha,
        AreaUnit::Dhur,
    ];

    /// Output choices offered by the length × breadth calculator
    pub const CALCULATOR_OUTPUTS: [AreaUnit; 4] = [
        AreaUnit::SquareFeet,
        AreaUnit::SquareMeter,
        AreaUnit::Ropani,
        AreaUnit::Bigha,
    ];

    /// Size of one unit in square feet (the conversion table).
    pub const fn square_feet(self) -> f64 {
        match self {
            AreaUnit::SquareFeet => 1.0,
            AreaUnit::SquareMeter => SQ_FT_PER_SQ_M,
            AreaUnit::Ropani => 5476.0,
            AreaUnit::Aana => 342.25,
            AreaUnit::Paisa => 85.56,
            AreaUnit::Daam => 21.39,
            AreaUnit::Bigha => 72900.0,
            AreaUnit::Katha => 3645.0,
            AreaUnit::Dhur => 182.25,
        }
    }

    /// Express `value` of this unit in square feet
    pub fn to_square_feet(self, value: f64) -> SqFt {
        SqFt(value * self.square_feet())
    }

    /// Express an area in square feet as a count of this unit
    pub fn from_square_feet(self, area: SqFt) -> f64 {
        area.0 / self.square_feet()
    }

    /// The traditional system this unit belongs to, if any
    pub fn system(self) -> Option<UnitSystem> {
        match self {
            AreaUnit::Ropani | AreaUnit::Aana | AreaUnit::Paisa | AreaUnit::Daam => Some(UnitSystem::Ropani),
            AreaUnit::Bigha | AreaUnit::Katha | AreaUnit::Dhur => Some(UnitSystem::Bigha),
            AreaUnit::SquareFeet | AreaUnit::SquareMeter => None,
        }
    }

    /// True for the Nepali units
    pub fn is_traditional(self) -> bool {
        self.system().is_some()
    }

    /// Stable camelCase tag, also the label key in the i18n table
    pub fn key(self) -> &'static str {
        match self {
            AreaUnit::SquareFeet => "squareFeet",
            AreaUnit::SquareMeter => "squareMeter",
            AreaUnit::Ropani => "ropani",
            AreaUnit::Aana => "aana",
            AreaUnit::Paisa => "paisa",
            AreaUnit::Daam => "daam",
            AreaUnit::Bigha => "bigha",
            AreaUnit::Katha => "katha",
            AreaUnit::Dhur => "dhur",
        }
    }
}

impl fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AreaUnit {
    type Err = LandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match normalize(s).as_str() {
            "squarefeet" | "sqft" | "ft2" => AreaUnit::SquareFeet,
            "squaremeter" | "squaremetre" | "sqm" | "m2" => AreaUnit::SquareMeter,
            "ropani" => AreaUnit::Ropani,
            "aana" | "ana" => AreaUnit::Aana,
            "paisa" => AreaUnit::Paisa,
            "daam" | "dam" => AreaUnit::Daam,
            "bigha" => AreaUnit::Bigha,
            "katha" | "kattha" => AreaUnit::Katha,
            "dhur" => AreaUnit::Dhur,
            _ => return Err(LandError::unknown_unit(s.trim())),
        };
        Ok(unit)
    }
}

/// Lowercase and drop separators so "square-feet", "Square Feet" and
/// "squareFeet" all compare equal.
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_' | '.'))
        .flat_map(char::to_lowercase)
        .collect()
}

// ============================================================================
// Area Magnitudes
// ============================================================================

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqM(pub f64);

impl From<SqM> for SqFt {
    fn from(sqm: SqM) -> Self {
        SqFt(sqm.0 * SQ_FT_PER_SQ_M)
    }
}

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(SqFt);
impl_arithmetic!(SqM);
