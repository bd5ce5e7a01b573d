//! # land_core - Nepali Land Area Calculation Engine
//!
//! `land_core` calculates land area from length and breadth and converts
//! between the Nepali traditional land units (Ropani, Aana, Paisa, Daam,
//! Bigha, Katha, Dhur) and square feet / square meters. All inputs and
//! outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: The engine is pure functions over a fixed `const` table
//! - **Validated at the edge**: Raw text is checked before any arithmetic
//! - **Rich Errors**: Structured error types, not just strings
//! - **Display is separate**: Unit tags are label keys; localized text comes
//!   from [`i18n`] and [`format`]
//!
//! ## Quick Start
//!
//! ```rust
//! use land_core::conversions::{calculate, convert_unit, AreaInput};
//! use land_core::format::format_area_output;
//! use land_core::i18n::Language;
//! use land_core::units::{AreaUnit, LinearUnit};
//!
//! // 60 x 40 ft plot in the Ropani system
//! let input = AreaInput::parse("60", "40", LinearUnit::Feet, AreaUnit::Ropani).unwrap();
//! let result = calculate(&input).unwrap();
//! println!("{}", format_area_output(&result.output, Language::English));
//!
//! // Direct conversion
//! assert_eq!(convert_unit(1.0, AreaUnit::Ropani, AreaUnit::Aana), 16.0);
//! ```
//!
//! ## Modules
//!
//! - [`units`] - Unit tags, the conversion table, area newtypes
//! - [`conversions`] - Area calculation, breakdowns, unit conversion
//! - [`validation`] - Boundary checks on raw input
//! - [`history`] - Bounded recent-results lists
//! - [`settings`] - Persisted user preferences
//! - [`file_io`] - Atomic, locked, versioned persistence
//! - [`i18n`] - English / Nepali label tables
//! - [`format`] - Display strings for results and errors
//! - [`errors`] - Structured error types

pub mod conversions;
pub mod errors;
pub mod file_io;
pub mod format;
pub mod history;
pub mod i18n;
pub mod settings;
pub mod units;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use errors::{LandError, LandResult};
pub use file_io::Store;
pub use history::{CalculationRecord, ConversionRecord, History, HistoryEntry};
pub use i18n::Language;
pub use settings::Settings;
pub use units::{AreaUnit, LinearUnit, UnitSystem};
