//! # Calculation History
//!
//! Recent calculator and converter results, kept per kind in bounded lists.
//!
//! ## Structure
//!
//! ```text
//! History
//! ├── calculations: RecentList<CalculationRecord> (max 10, newest first)
//! └── conversions:  RecentList<ConversionRecord>  (max 10, newest first)
//! ```
//!
//! Pushing onto a full list evicts its oldest record. Records are stamped
//! with a UUID and a UTC creation time, and store the formatted result
//! string exactly as it was shown.
//!
//! ## Example
//!
//! ```rust
//! use land_core::conversions::AreaInput;
//! use land_core::history::{CalculationRecord, History};
//! use land_core::units::{AreaUnit, LinearUnit};
//!
//! let input = AreaInput {
//!     length: 74.0,
//!     breadth: 74.0,
//!     unit: LinearUnit::Feet,
//!     output_unit: AreaUnit::Ropani,
//! };
//!
//! let mut history = History::default();
//! history.push(CalculationRecord::new(&input, "1 Ropani, 0 Aana, 0 Paisa, 0 Daam"));
//! assert_eq!(history.calculations().len(), 1);
//! ```

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::conversions::{AreaInput, ConversionInput};
use crate::units::{AreaUnit, LinearUnit};

/// Maximum records kept per list
pub const HISTORY_LIMIT: usize = 10;

/// A capped list ordered newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentList<T> {
    items: VecDeque<T>,
}

impl<T> Default for RecentList<T> {
    fn default() -> Self {
        RecentList {
            items: VecDeque::with_capacity(HISTORY_LIMIT),
        }
    }
}

impl<T> RecentList<T> {
    /// Insert at the front, evicting the oldest entries beyond the limit.
    pub fn push(&mut self, item: T) {
        self.items.push_front(item);
        self.items.truncate(HISTORY_LIMIT);
    }

    /// Most recent item
    pub fn latest(&self) -> Option<&T> {
        self.items.front()
    }

    /// Items, newest first
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Re-apply the limit, e.g. after loading a hand-edited file.
    pub(crate) fn enforce_limit(&mut self) {
        self.items.truncate(HISTORY_LIMIT);
    }
}

/// A saved length × breadth calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub id: Uuid,
    pub length: f64,
    pub breadth: f64,
    pub unit: LinearUnit,
    pub output_unit: AreaUnit,
    /// Result text as displayed
    pub result: String,
    pub created: DateTime<Utc>,
}

impl CalculationRecord {
    pub fn new(input: &AreaInput, result: impl Into<String>) -> Self {
        CalculationRecord {
            id: Uuid::new_v4(),
            length: input.length,
            breadth: input.breadth,
            unit: input.unit,
            output_unit: input.output_unit,
            result: result.into(),
            created: Utc::now(),
        }
    }

    /// The input that produced this record, for re-running it
    pub fn input(&self) -> AreaInput {
        AreaInput {
            length: self.length,
            breadth: self.breadth,
            unit: self.unit,
            output_unit: self.output_unit,
        }
    }
}

/// A saved unit conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub id: Uuid,
    pub value: f64,
    pub from: AreaUnit,
    pub to: AreaUnit,
    /// Result text as displayed
    pub result: String,
    pub created: DateTime<Utc>,
}

impl ConversionRecord {
    pub fn new(input: &ConversionInput, result: impl Into<String>) -> Self {
        ConversionRecord {
            id: Uuid::new_v4(),
            value: input.value,
            from: input.from,
            to: input.to,
            result: result.into(),
            created: Utc::now(),
        }
    }

    /// The input that produced this record, for re-running it
    pub fn input(&self) -> ConversionInput {
        ConversionInput {
            value: self.value,
            from: self.from,
            to: self.to,
        }
    }
}

/// Either kind of history record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HistoryEntry {
    Calculation(CalculationRecord),
    Conversion(ConversionRecord),
}

impl HistoryEntry {
    pub fn id(&self) -> Uuid {
        match self {
            HistoryEntry::Calculation(r) => r.id,
            HistoryEntry::Conversion(r) => r.id,
        }
    }

    pub fn result(&self) -> &str {
        match self {
            HistoryEntry::Calculation(r) => &r.result,
            HistoryEntry::Conversion(r) => &r.result,
        }
    }

    pub fn created(&self) -> DateTime<Utc> {
        match self {
            HistoryEntry::Calculation(r) => r.created,
            HistoryEntry::Conversion(r) => r.created,
        }
    }
}

impl From<CalculationRecord> for HistoryEntry {
    fn from(record: CalculationRecord) -> Self {
        HistoryEntry::Calculation(record)
    }
}

impl From<ConversionRecord> for HistoryEntry {
    fn from(record: ConversionRecord) -> Self {
        HistoryEntry::Conversion(record)
    }
}

/// Saved calculations and conversions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    #[serde(default)]
    calculations: RecentList<CalculationRecord>,
    #[serde(default)]
    conversions: RecentList<ConversionRecord>,
}

impl History {
    /// Record a calculation or conversion.
    pub fn push(&mut self, entry: impl Into<HistoryEntry>) {
        match entry.into() {
            HistoryEntry::Calculation(record) => self.calculations.push(record),
            HistoryEntry::Conversion(record) => self.conversions.push(record),
        }
    }

    pub fn calculations(&self) -> &RecentList<CalculationRecord> {
        &self.calculations
    }

    pub fn conversions(&self) -> &RecentList<ConversionRecord> {
        &self.conversions
    }

    /// Every record, newest first.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        let mut entries: Vec<HistoryEntry> = self
            .calculations
            .iter()
            .cloned()
            .map(HistoryEntry::from)
            .chain(self.conversions.iter().cloned().map(HistoryEntry::from))
            .collect();
        entries.sort_by(|a, b| b.created().cmp(&a.created()));
        entries
    }

    /// Find a record by id
    pub fn find(&self, id: Uuid) -> Option<HistoryEntry> {
        self.calculations
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .map(HistoryEntry::from)
            .or_else(|| self.conversions.iter().find(|r| r.id == id).cloned().map(HistoryEntry::from))
    }

    pub fn len(&self) -> usize {
        self.calculations.len() + self.conversions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calculations.is_empty() && self.conversions.is_empty()
    }

    pub fn clear_calculations(&mut self) {
        self.calculations.clear();
    }

    pub fn clear_conversions(&mut self) {
        self.conversions.clear();
    }

    pub fn clear(&mut self) {
        self.clear_calculations();
        self.clear_conversions();
    }

    pub(crate) fn enforce_limit(&mut self) {
        self.calculations.enforce_limit();
        self.conversions.enforce_limit();
    }
}
