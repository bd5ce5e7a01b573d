//! End-to-end scenarios through the public API: calculate, convert, format,
//! and persist.

use land_core::conversions::{
    calculate, compute_area, convert, convert_unit, decompose, AreaInput, AreaOutput, Breakdown, ConversionInput,
    RopaniBreakdown,
};
use land_core::format::{format_area_output, format_conversion};
use land_core::units::SqFt;
use land_core::{AreaUnit, CalculationRecord, ConversionRecord, LandError, Language, LinearUnit, Store, UnitSystem};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn plot_in_feet_to_square_feet() {
    let input = AreaInput::parse("100", "50", LinearUnit::Feet, AreaUnit::SquareFeet).unwrap();
    let result = calculate(&input).unwrap();

    assert_eq!(result.raw_area, 5000.0);
    assert_eq!(format_area_output(&result.output, Language::English), "5000.00 Square Feet");
}

#[test]
fn one_ropani_square_plot() {
    let output = compute_area(74.0, 74.0, LinearUnit::Feet, AreaUnit::Ropani);
    assert_eq!(
        output,
        AreaOutput::Composite(Breakdown::Ropani(RopaniBreakdown { ropani: 1, aana: 0, paisa: 0, daam: 0 }))
    );
}

#[test]
fn one_bigha_from_square_feet() {
    let breakdown = decompose(SqFt(72900.0), UnitSystem::Bigha);
    assert_eq!(
        breakdown.components(),
        vec![(AreaUnit::Bigha, 1), (AreaUnit::Katha, 0), (AreaUnit::Dhur, 0)]
    );
}

#[test]
fn headline_conversions() {
    assert_eq!(convert_unit(1.0, AreaUnit::Ropani, AreaUnit::Aana), 16.0);
    assert_eq!(convert_unit(1.0, AreaUnit::Bigha, AreaUnit::Katha), 20.0);

    let sqft = convert_unit(10.764, AreaUnit::SquareMeter, AreaUnit::SquareFeet);
    assert_eq!(format_conversion(sqft, AreaUnit::SquareFeet, Language::English), "115.8637 Square Feet");
}

#[test]
fn round_trip_every_pair() {
    for from in AreaUnit::ALL {
        for to in AreaUnit::ALL {
            for value in [0.25, 1.0, 7.5, 1234.5] {
                let back = convert_unit(convert_unit(value, from, to), to, from);
                assert!(
                    (back - value).abs() <= value * 1e-9,
                    "{value} {from} -> {to} -> {back}"
                );
            }
        }
    }
}

#[test]
fn breakdown_reconstructs_within_smallest_unit() {
    let mut area = 1.0;
    while area < 500_000.0 {
        let ropani = decompose(SqFt(area), UnitSystem::Ropani);
        let bigha = decompose(SqFt(area), UnitSystem::Bigha);

        assert!((ropani.to_square_feet().value() - area).abs() <= AreaUnit::Daam.square_feet() / 2.0 + 1e-6);
        assert!((bigha.to_square_feet().value() - area).abs() <= AreaUnit::Dhur.square_feet() / 2.0 + 1e-6);
        area = area * 1.37 + 3.0;
    }
}

#[test]
fn invalid_values_rejected_by_both_entry_points() {
    for raw in ["0", "-5", "abc", "12abc", "NaN", "inf"] {
        let area = AreaInput::parse(raw, "10", LinearUnit::Feet, AreaUnit::SquareFeet);
        assert!(
            matches!(area, Err(LandError::InvalidInput { .. })),
            "area accepted {raw:?}"
        );

        let conversion = ConversionInput::parse(raw, AreaUnit::Ropani, AreaUnit::Aana);
        assert!(
            matches!(conversion, Err(LandError::InvalidInput { .. })),
            "conversion accepted {raw:?}"
        );
    }

    assert!(matches!(
        AreaInput::parse("10", "  ", LinearUnit::Feet, AreaUnit::Ropani),
        Err(LandError::MissingField { .. })
    ));
    assert!(matches!(
        ConversionInput::parse("", AreaUnit::Ropani, AreaUnit::Aana),
        Err(LandError::MissingField { .. })
    ));
}

#[test]
fn checked_wrappers_reject_bad_structs() {
    let input = AreaInput {
        length: -1.0,
        breadth: 10.0,
        unit: LinearUnit::Meter,
        output_unit: AreaUnit::Bigha,
    };
    assert!(calculate(&input).is_err());

    let input = ConversionInput {
        value: 0.0,
        from: AreaUnit::Katha,
        to: AreaUnit::Dhur,
    };
    assert!(convert(&input).is_err());
}

#[test]
fn results_survive_a_restart() {
    let dir = TempDir::new().unwrap();
    let store = Store::open(dir.path()).unwrap();

    let area = AreaInput::parse("60", "40", LinearUnit::Feet, AreaUnit::Ropani).unwrap();
    let area_text = format_area_output(&calculate(&area).unwrap().output, Language::English);

    let conversion = ConversionInput::parse("2", AreaUnit::Bigha, AreaUnit::Katha).unwrap();
    let converted = convert(&conversion).unwrap();
    let conversion_text = format_conversion(converted.value, converted.unit, Language::English);

    store
        .update_history(|history| {
            history.push(CalculationRecord::new(&area, area_text.clone()));
            history.push(ConversionRecord::new(&conversion, conversion_text.clone()));
        })
        .unwrap();

    let reopened = Store::open(dir.path()).unwrap();
    let history = reopened.load_history().unwrap();
    assert_eq!(history.calculations().latest().unwrap().result, area_text);
    assert_eq!(history.conversions().latest().unwrap().result, "40.0000 Katha");
    assert_eq!(history.calculations().latest().unwrap().input(), area);
}
