//! # Land Area Calculation
//!
//! Computes a plot's area from its length and breadth and expresses it in
//! the requested area unit.
//!
//! ## Unit handling
//!
//! The raw area is `length × breadth` in the input's own squared unit. It is
//! then adjusted for the output:
//!
//! | input | output      | factor                 |
//! |-------|-------------|------------------------|
//! | feet  | squareFeet  | 1                      |
//! | meter | squareMeter | 1                      |
//! | meter | squareFeet  | 10.764                 |
//! | feet  | squareMeter | 0.0929                 |
//! | any   | ropani      | to sq ft, then breakdown |
//! | any   | bigha       | to sq ft, then breakdown |
//!
//! The 0.0929 factor is not the reciprocal of 10.764; both are kept exactly.
//!
//! ## Example
//!
//! ```rust
//! use land_core::conversions::area::{calculate, AreaInput, AreaOutput};
//! use land_core::units::{AreaUnit, LinearUnit};
//!
//! let input = AreaInput {
//!     length: 100.0,
//!     breadth: 50.0,
//!     unit: LinearUnit::Feet,
//!     output_unit: AreaUnit::SquareFeet,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.output, AreaOutput::Flat { value: 5000.0, unit: AreaUnit::SquareFeet });
//! ```

use serde::{Deserialize, Serialize};

use crate::conversions::breakdown::{decompose_to_bigha_system, decompose_to_ropani_system, Breakdown};
use crate::errors::LandResult;
use crate::units::{AreaUnit, LinearUnit, SqFt, SQ_FT_PER_SQ_M, SQ_M_PER_SQ_FT};
use crate::validation::{ensure_positive, parse_positive};

/// Input parameters for a length × breadth calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length": 60.0,
///   "breadth": 40.0,
///   "unit": "feet",
///   "output_unit": "ropani"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaInput {
    /// Plot length, in `unit`
    pub length: f64,

    /// Plot breadth, in `unit`
    pub breadth: f64,

    /// Unit both measurements are given in
    pub unit: LinearUnit,

    /// Unit to express the area in
    pub output_unit: AreaUnit,
}

impl AreaInput {
    /// Build an input from raw text fields, rejecting empty, non-numeric,
    /// zero and negative values before any arithmetic runs.
    pub fn parse(length: &str, breadth: &str, unit: LinearUnit, output_unit: AreaUnit) -> LandResult<Self> {
        Ok(AreaInput {
            length: parse_positive("length", length)?,
            breadth: parse_positive("breadth", breadth)?,
            unit,
            output_unit,
        })
    }

    /// Validate input parameters.
    pub fn validate(&self) -> LandResult<()> {
        ensure_positive("length", self.length)?;
        ensure_positive("breadth", self.breadth)?;
        Ok(())
    }

    /// Product of length and breadth in the input's squared unit
    pub fn raw_area(&self) -> f64 {
        self.length * self.breadth
    }
}

/// Area expressed in the requested unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "camelCase")]
pub enum AreaOutput {
    /// A single magnitude, e.g. 5000.0 square feet
    Flat { value: f64, unit: AreaUnit },
    /// A Ropani or Bigha breakdown
    Composite(Breakdown),
}

impl AreaOutput {
    /// The flat magnitude, if this is not a breakdown
    pub fn flat_value(&self) -> Option<f64> {
        match self {
            AreaOutput::Flat { value, .. } => Some(*value),
            AreaOutput::Composite(_) => None,
        }
    }

    /// The breakdown, if one was requested
    pub fn breakdown(&self) -> Option<&Breakdown> {
        match self {
            AreaOutput::Flat { .. } => None,
            AreaOutput::Composite(b) => Some(b),
        }
    }
}

/// Results from an area calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaResult {
    /// `length × breadth` in the input's squared unit
    pub raw_area: f64,

    /// The same area normalized to square feet
    pub square_feet: SqFt,

    /// Area in the requested unit
    pub output: AreaOutput,
}

/// Normalize a raw `length × breadth` product to square feet.
pub fn to_square_feet(raw_area: f64, unit: LinearUnit) -> SqFt {
    match unit {
        LinearUnit::Feet => SqFt(raw_area),
        LinearUnit::Meter => SqFt(raw_area * SQ_FT_PER_SQ_M),
    }
}

/// Compute the area of a `length × breadth` plot in `output_unit`.
///
/// Assumes `length` and `breadth` are positive and finite; use
/// [`calculate`] for a validated entry point. Ropani and Bigha outputs come
/// back as a [`Breakdown`]. The smaller traditional units (aana, daam,
/// katha, ...) come back as a flat count of that unit.
pub fn compute_area(length: f64, breadth: f64, unit: LinearUnit, output_unit: AreaUnit) -> AreaOutput {
    let raw = length * breadth;

    match output_unit {
        AreaUnit::SquareFeet => {
            let value = match unit {
                LinearUnit::Feet => raw,
                LinearUnit::Meter => raw * SQ_FT_PER_SQ_M,
            };
            AreaOutput::Flat { value, unit: output_unit }
        }
        AreaUnit::SquareMeter => {
            let value = match unit {
                LinearUnit::Feet => raw * SQ_M_PER_SQ_FT,
                LinearUnit::Meter => raw,
            };
            AreaOutput::Flat { value, unit: output_unit }
        }
        AreaUnit::Ropani => {
            let breakdown = decompose_to_ropani_system(to_square_feet(raw, unit));
            AreaOutput::Composite(Breakdown::Ropani(breakdown))
        }
        AreaUnit::Bigha => {
            let breakdown = decompose_to_bigha_system(to_square_feet(raw, unit));
            AreaOutput::Composite(Breakdown::Bigha(breakdown))
        }
        other => AreaOutput::Flat {
            value: other.from_square_feet(to_square_feet(raw, unit)),
            unit: other,
        },
    }
}

/// Validate the input and compute its area.
///
/// # Returns
///
/// * `Ok(AreaResult)` - Calculation results
/// * `Err(LandError::InvalidInput)` - If length or breadth is not positive and finite
pub fn calculate(input: &AreaInput) -> LandResult<AreaResult> {
    input.validate()?;

    let raw_area = input.raw_area();

    Ok(AreaResult {
        raw_area,
        square_feet: to_square_feet(raw_area, input.unit),
        output: compute_area(input.length, input.breadth, input.unit, input.output_unit),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversions::breakdown::{BighaBreakdown, RopaniBreakdown};
    use crate::errors::LandError;

    fn plot(length: f64, breadth: f64, unit: LinearUnit, output_unit: AreaUnit) -> AreaInput {
        AreaInput { length, breadth, unit, output_unit }
    }

    #[test]
    fn test_feet_to_square_feet() {
        let output = compute_area(100.0, 50.0, LinearUnit::Feet, AreaUnit::SquareFeet);
        assert_eq!(output, AreaOutput::Flat { value: 5000.0, unit: AreaUnit::SquareFeet });
    }

    #[test]
    fn test_meter_to_square_meter_is_unscaled() {
        let output = compute_area(20.0, 15.0, LinearUnit::Meter, AreaUnit::SquareMeter);
        assert_eq!(output.flat_value(), Some(300.0));
    }

    #[test]
    fn test_meter_to_square_feet() {
        let value = compute_area(10.0, 10.0, LinearUnit::Meter, AreaUnit::SquareFeet)
            .flat_value()
            .unwrap();
        assert!((value - 1076.4).abs() < 1e-6);
    }

    #[test]
    fn test_feet_to_square_meter_uses_0_0929() {
        let value = compute_area(100.0, 100.0, LinearUnit::Feet, AreaUnit::SquareMeter)
            .flat_value()
            .unwrap();
        assert!((value - 929.0).abs() < 1e-6);
        // not 10000 / 10.764 = 929.0301...
        assert!((value - 10000.0 / SQ_FT_PER_SQ_M).abs() > 0.01);
    }

    #[test]
    fn test_feet_to_ropani() {
        // 74 x 74 ft = 5476 sq ft = 1 ropani
        let output = compute_area(74.0, 74.0, LinearUnit::Feet, AreaUnit::Ropani);
        assert_eq!(
            output,
            AreaOutput::Composite(Breakdown::Ropani(RopaniBreakdown { ropani: 1, aana: 0, paisa: 0, daam: 0 }))
        );
    }

    #[test]
    fn test_meter_to_bigha_normalizes_first() {
        // 100 x 67.725 m = 6772.5 sq m = 72899.19 sq ft
        // -> 0 bigha, 19 katha, 20 dhur (3644.19 / 182.25 rounds to 20)
        let output = compute_area(100.0, 67.725, LinearUnit::Meter, AreaUnit::Bigha);
        assert_eq!(
            output.breakdown(),
            Some(&Breakdown::Bigha(BighaBreakdown { bigha: 0, katha: 19, dhur: 20 }))
        );
    }

    #[test]
    fn test_flat_traditional_output() {
        let value = compute_area(342.25, 1.0, LinearUnit::Feet, AreaUnit::Aana)
            .flat_value()
            .unwrap();
        assert!((value - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_calculate_reports_square_feet() {
        let result = calculate(&plot(10.0, 10.0, LinearUnit::Meter, AreaUnit::SquareMeter)).unwrap();
        assert_eq!(result.raw_area, 100.0);
        assert!((result.square_feet.value() - 1076.4).abs() < 1e-6);
        assert_eq!(result.output.flat_value(), Some(100.0));
    }

    #[test]
    fn test_monotonic_in_length_and_breadth() {
        let mut previous = 0.0;
        for step in 1..200 {
            let length = step as f64 * 0.75;
            let value = compute_area(length, 12.0, LinearUnit::Meter, AreaUnit::SquareFeet)
                .flat_value()
                .unwrap();
            assert!(value > previous);
            previous = value;
        }

        let mut previous = 0.0;
        for step in 1..200 {
            let breadth = step as f64 * 1.5;
            let value = compute_area(30.0, breadth, LinearUnit::Feet, AreaUnit::SquareMeter)
                .flat_value()
                .unwrap();
            assert!(value > previous);
            previous = value;
        }
    }

    #[test]
    fn test_invalid_dimensions_rejected() {
        assert!(matches!(
            calculate(&plot(0.0, 50.0, LinearUnit::Feet, AreaUnit::SquareFeet)),
            Err(LandError::InvalidInput { .. })
        ));
        assert!(matches!(
            calculate(&plot(100.0, -5.0, LinearUnit::Feet, AreaUnit::SquareFeet)),
            Err(LandError::InvalidInput { .. })
        ));
        assert!(calculate(&plot(f64::NAN, 5.0, LinearUnit::Feet, AreaUnit::Ropani)).is_err());
        assert!(calculate(&plot(f64::INFINITY, 5.0, LinearUnit::Feet, AreaUnit::Ropani)).is_err());
    }

    #[test]
    fn test_parse_from_text() {
        let input = AreaInput::parse(" 100 ", "50", LinearUnit::Feet, AreaUnit::SquareFeet).unwrap();
        assert_eq!(input.length, 100.0);

        assert_eq!(
            AreaInput::parse("", "50", LinearUnit::Feet, AreaUnit::SquareFeet),
            Err(LandError::missing_field("length"))
        );
        assert!(matches!(
            AreaInput::parse("100", "abc", LinearUnit::Feet, AreaUnit::SquareFeet),
            Err(LandError::InvalidInput { ref field, .. }) if field == "breadth"
        ));
    }

    #[test]
    fn test_serialization() {
        let input = plot(60.0, 40.0, LinearUnit::Feet, AreaUnit::Ropani);
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"output_unit\":\"ropani\""));

        let result = calculate(&input).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let roundtrip: AreaResult = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, result);
    }
}
