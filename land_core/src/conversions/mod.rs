//! # Conversion Engine
//!
//! The arithmetic core: stateless, synchronous, side-effect free. Each
//! operation follows the pattern:
//!
//! - a bare function over primitive inputs (`compute_area`, `convert_unit`,
//!   `decompose_to_*_system`) that assumes positive finite values
//! - `*Input` / `*Result` types (JSON-serializable)
//! - a checked `calculate` / `convert` that validates the input first
//!
//! ## Available Operations
//!
//! - [`area`] - Area from length × breadth, in any output unit
//! - [`breakdown`] - Ropani and Bigha mixed-radix breakdowns
//! - [`convert`] - Direct unit-to-unit conversion

pub mod area;
pub mod breakdown;
pub mod convert;

// Re-export commonly used types
pub use area::{calculate, compute_area, AreaInput, AreaOutput, AreaResult};
pub use breakdown::{
    decompose, decompose_to_bigha_system, decompose_to_ropani_system, BighaBreakdown, Breakdown,
    RopaniBreakdown,
};
pub use convert::{convert, convert_unit, ConversionInput, ConversionResult};
