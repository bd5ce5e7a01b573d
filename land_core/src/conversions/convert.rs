//! # Unit Conversion
//!
//! Direct scalar conversion between any two area units, routed through
//! square feet: `value × table[from] / table[to]`.
//!
//! Traditional units are valid sources as well as targets, so `aana → katha`
//! converts directly without going through a breakdown. The returned value
//! is full precision; rounding to four decimals is a display concern (see
//! [`crate::format`]).
//!
//! ## Example
//!
//! ```rust
//! use land_core::conversions::convert::convert_unit;
//! use land_core::units::AreaUnit;
//!
//! assert_eq!(convert_unit(1.0, AreaUnit::Ropani, AreaUnit::Aana), 16.0);
//! assert_eq!(convert_unit(1.0, AreaUnit::Bigha, AreaUnit::Katha), 20.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::conversions::breakdown::{decompose_to_bigha_system, decompose_to_ropani_system, BighaBreakdown, RopaniBreakdown};
use crate::errors::LandResult;
use crate::units::{AreaUnit, SqFt};
use crate::validation::{ensure_positive, parse_positive};

/// Input parameters for a unit conversion.
///
/// ## JSON Example
///
/// ```json
/// { "value": 2.5, "from": "ropani", "to": "squareMeter" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionInput {
    pub value: f64,
    pub from: AreaUnit,
    pub to: AreaUnit,
}

impl ConversionInput {
    /// Build an input from a raw text field
    pub fn parse(value: &str, from: AreaUnit, to: AreaUnit) -> LandResult<Self> {
        Ok(ConversionInput {
            value: parse_positive("value", value)?,
            from,
            to,
        })
    }

    /// Validate input parameters.
    pub fn validate(&self) -> LandResult<()> {
        ensure_positive("value", self.value)
    }

    /// The same value with source and target units exchanged
    pub fn swapped(&self) -> Self {
        ConversionInput {
            value: self.value,
            from: self.to,
            to: self.from,
        }
    }
}

/// Results from a unit conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Converted value, full precision
    pub value: f64,

    /// Unit of `value`
    pub unit: AreaUnit,

    /// The converted area in square feet
    pub square_feet: SqFt,

    /// Equivalent area in the Ropani system
    pub ropani_equivalent: RopaniBreakdown,

    /// Equivalent area in the Bigha system
    pub bigha_equivalent: BighaBreakdown,
}

/// Convert `value` from one area unit to another.
///
/// Assumes `value` is positive and finite; use [`convert`] for a validated
/// entry point.
pub fn convert_unit(value: f64, from: AreaUnit, to: AreaUnit) -> f64 {
    to.from_square_feet(from.to_square_feet(value))
}

/// Validate the input and convert it.
///
/// Alongside the converted value the result carries the area's Ropani and
/// Bigha equivalents.
pub fn convert(input: &ConversionInput) -> LandResult<ConversionResult> {
    input.validate()?;

    let square_feet = input.from.to_square_feet(input.value);

    Ok(ConversionResult {
        value: convert_unit(input.value, input.from, input.to),
        unit: input.to,
        square_feet,
        ropani_equivalent: decompose_to_ropani_system(square_feet),
        bigha_equivalent: decompose_to_bigha_system(square_feet),
    })
}
