//! # Mixed-Radix Breakdown
//!
//! Splits a flat area in square feet into the traditional composite units.
//!
//! ## Ropani system
//!
//! ```text
//! 1 Ropani = 16 Aana = 5476 sq ft
//! 1 Aana   = 4 Paisa = 342.25 sq ft
//! 1 Paisa  = 4 Daam  = 85.56 sq ft
//! 1 Daam             = 21.39 sq ft
//! ```
//!
//! ## Bigha system
//!
//! ```text
//! 1 Bigha = 20 Katha = 72900 sq ft
//! 1 Katha = 20 Dhur  = 3645 sq ft
//! 1 Dhur             = 182.25 sq ft
//! ```
//!
//! ## Rounding
//!
//! Every component but the smallest is a floor division of the running
//! remainder. The smallest (daam, dhur) is *rounded* to the nearest whole
//! unit. The rounded value is not carried, so a breakdown can show 4 daam or
//! 20 dhur when the remainder sits just under the next paisa or katha.
//! Reconstruction is therefore exact to within half a daam (or half a dhur).
//!
//! ## Example
//!
//! ```rust
//! use land_core::conversions::breakdown::decompose_to_ropani_system;
//! use land_core::units::SqFt;
//!
//! let plot = decompose_to_ropani_system(SqFt(5476.0 + 342.25 * 3.0));
//! assert_eq!((plot.ropani, plot.aana, plot.paisa, plot.daam), (1, 3, 0, 0));
//! ```

use serde::{Deserialize, Serialize};

use crate::units::{AreaUnit, SqFt, UnitSystem};

/// Ropani-Aana-Paisa-Daam breakdown of an area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RopaniBreakdown {
    pub ropani: u64,
    pub aana: u64,
    pub paisa: u64,
    pub daam: u64,
}

impl RopaniBreakdown {
    /// Area represented by the breakdown
    pub fn to_square_feet(&self) -> SqFt {
        AreaUnit::Ropani.to_square_feet(self.ropani as f64)
            + AreaUnit::Aana.to_square_feet(self.aana as f64)
            + AreaUnit::Paisa.to_square_feet(self.paisa as f64)
            + AreaUnit::Daam.to_square_feet(self.daam as f64)
    }

    /// Components paired with their unit, largest first
    pub fn components(&self) -> [(AreaUnit, u64); 4] {
        [
            (AreaUnit::Ropani, self.ropani),
            (AreaUnit::Aana, self.aana),
            (AreaUnit::Paisa, self.paisa),
            (AreaUnit::Daam, self.daam),
        ]
    }
}

/// Bigha-Katha-Dhur breakdown of an area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BighaBreakdown {
    pub bigha: u64,
    pub katha: u64,
    pub dhur: u64,
}

impl BighaBreakdown {
    /// Area represented by the breakdown
    pub fn to_square_feet(&self) -> SqFt {
        AreaUnit::Bigha.to_square_feet(self.bigha as f64)
            + AreaUnit::Katha.to_square_feet(self.katha as f64)
            + AreaUnit::Dhur.to_square_feet(self.dhur as f64)
    }

    /// Components paired with their unit, largest first
    pub fn components(&self) -> [(AreaUnit, u64); 3] {
        [
            (AreaUnit::Bigha, self.bigha),
            (AreaUnit::Katha, self.katha),
            (AreaUnit::Dhur, self.dhur),
        ]
    }
}

/// A breakdown in either traditional system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "system", rename_all = "camelCase")]
pub enum Breakdown {
    Ropani(RopaniBreakdown),
    Bigha(BighaBreakdown),
}

impl Breakdown {
    pub fn system(&self) -> UnitSystem {
        match self {
            Breakdown::Ropani(_) => UnitSystem::Ropani,
            Breakdown::Bigha(_) => UnitSystem::Bigha,
        }
    }

    pub fn to_square_feet(&self) -> SqFt {
        match self {
            Breakdown::Ropani(b) => b.to_square_feet(),
            Breakdown::Bigha(b) => b.to_square_feet(),
        }
    }

    /// Components paired with their unit, largest first
    pub fn components(&self) -> Vec<(AreaUnit, u64)> {
        match self {
            Breakdown::Ropani(b) => b.components().to_vec(),
            Breakdown::Bigha(b) => b.components().to_vec(),
        }
    }
}

/// Decompose an area into the given system.
pub fn decompose(area: SqFt, system: UnitSystem) -> Breakdown {
    match system {
        UnitSystem::Ropani => Breakdown::Ropani(decompose_to_ropani_system(area)),
        UnitSystem::Bigha => Breakdown::Bigha(decompose_to_bigha_system(area)),
    }
}

/// Decompose an area into Ropani, Aana, Paisa and Daam.
///
/// `area` must be non-negative and finite.
pub fn decompose_to_ropani_system(area: SqFt) -> RopaniBreakdown {
    let area = area.value();

    let ropani_sqft = AreaUnit::Ropani.square_feet();
    let aana_sqft = AreaUnit::Aana.square_feet();
    let paisa_sqft = AreaUnit::Paisa.square_feet();
    let daam_sqft = AreaUnit::Daam.square_feet();

    let ropani = (area / ropani_sqft).floor();
    let after_ropani = area % ropani_sqft;

    let aana = (after_ropani / aana_sqft).floor();
    let after_aana = after_ropani % aana_sqft;

    let paisa = (after_aana / paisa_sqft).floor();
    let daam = ((after_aana % paisa_sqft) / daam_sqft).round();

    RopaniBreakdown {
        ropani: ropani as u64,
        aana: aana as u64,
        paisa: paisa as u64,
        daam: daam as u64,
    }
}

/// Decompose an area into Bigha, Katha and Dhur.
///
/// `area` must be non-negative and finite.
pub fn decompose_to_bigha_system(area: SqFt) -> BighaBreakdown {
    let area = area.value();

    let bigha_sqft = AreaUnit::Bigha.square_feet();
    let katha_sqft = AreaUnit::Katha.square_feet();
    let dhur_sqft = AreaUnit::Dhur.square_feet();

    let bigha = (area / bigha_sqft).floor();
    let after_bigha = area % bigha_sqft;

    let katha = (after_bigha / katha_sqft).floor();
    let dhur = ((after_bigha % katha_sqft) / dhur_sqft).round();

    BighaBreakdown {
        bigha: bigha as u64,
        katha: katha as u64,
        dhur: dhur as u64,
    }
}
