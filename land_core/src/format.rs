//! # Result Formatting
//!
//! Turns engine results into the display strings shown to users and stored
//! in history entries:
//!
//! - calculator flat areas: two decimals (`"5000.00 Square Feet"`)
//! - converter values: four decimals (`"16.0000 Aana"`)
//! - breakdowns: every component, largest first
//!   (`"2 Ropani, 3 Aana, 1 Paisa, 2 Daam"`)

use crate::conversions::{AreaOutput, Breakdown, ConversionResult};
use crate::errors::LandError;
use crate::i18n::{translate, Language};
use crate::units::AreaUnit;

/// Decimals shown for calculator areas
pub const AREA_DECIMALS: usize = 2;

/// Decimals shown for converter results
pub const CONVERSION_DECIMALS: usize = 4;

/// Format a breakdown as "n Unit, n Unit, ...".
pub fn format_breakdown(breakdown: &Breakdown, language: Language) -> String {
    breakdown
        .components()
        .iter()
        .map(|(unit, count)| format!("{} {}", count, translate(language, unit.key())))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format a calculator result.
pub fn format_area_output(output: &AreaOutput, language: Language) -> String {
    match output {
        AreaOutput::Flat { value, unit } => format_value(*value, *unit, AREA_DECIMALS, language),
        AreaOutput::Composite(breakdown) => format_breakdown(breakdown, language),
    }
}

/// Format a converted value with four decimals.
pub fn format_conversion(value: f64, unit: AreaUnit, language: Language) -> String {
    format_value(value, unit, CONVERSION_DECIMALS, language)
}

/// Multi-line detail block for a conversion: the value plus its Ropani and
/// Bigha equivalents.
pub fn format_conversion_details(result: &ConversionResult, language: Language) -> String {
    let t = |key: &'static str| translate(language, key);
    let ropani = Breakdown::Ropani(result.ropani_equivalent);
    let bigha = Breakdown::Bigha(result.bigha_equivalent);

    format!(
        "{}: {}\n{} ({}): {}\n{} ({}): {}",
        t("result"),
        format_conversion(result.value, result.unit, language),
        t("equivalentTo"),
        t("ropaniSystem"),
        format_breakdown(&ropani, language),
        t("equivalentTo"),
        t("bighaSystem"),
        format_breakdown(&bigha, language),
    )
}

/// User-facing message for an error.
///
/// Input errors map to the localized "required" / "invalid" messages; the
/// rest fall back to the English error text.
pub fn format_error(error: &LandError, language: Language) -> String {
    match error {
        LandError::MissingField { field } => {
            format!("{}: {}", translate(language, field), translate(language, "errorRequired"))
        }
        LandError::InvalidInput { field, .. } => {
            format!("{}: {}", translate(language, field), translate(language, "errorInvalidInput"))
        }
        LandError::UnknownUnit { name } => {
            format!("{}: {}", translate(language, "errorUnknownUnit"), name)
        }
        other => other.to_string(),
    }
}

fn format_value(value: f64, unit: AreaUnit, decimals: usize, language: Language) -> String {
    format!("{:.*} {}", decimals, value, translate(language, unit.key()))
}
