//! The two lists shown on the board.
//!
//! Hidden and template records are dropped first. The remaining records are
//! split by their `failed` flag: everything not failed is "current" (active
//! and completed challenges), failed records are "past". The current list
//! never shows failure reasons; the past list shows them unless turned off.

use super::presenter::{PresentOptions, PresentedRecord, Presenter};
use super::record::{Record, RecordsDocument};
use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardOptions {
    /// Show failure reasons in the past list.
    pub show_failure_reason: bool,
}

impl Default for BoardOptions {
    fn default() -> Self {
        Self { show_failure_reason: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Board {
    pub current: Vec<PresentedRecord>,
    pub past: Vec<PresentedRecord>,
}

/// Splits visible records into `(current, past)`, keeping document order.
pub fn partition(records: &[Record]) -> (Vec<&Record>, Vec<&Record>) {
    records.iter().filter(|record| record.is_visible()).partition(|record| !record.is_failed())
}

impl Board {
    /// Builds the board from a loaded document.
    ///
    /// `clock` is sampled once per presented record.
    pub fn build<Tz, C>(document: &RecordsDocument, tz: Tz, options: BoardOptions, mut clock: C) -> Self
    where
        Tz: TimeZone,
        C: FnMut() -> DateTime<Utc>,
    {
        let (current, past) = partition(&document.records);

        let current_presenter = Presenter::new(tz.clone(), PresentOptions { show_failure_reason: false });
        let past_presenter = Presenter::new(
            tz,
            PresentOptions {
                show_failure_reason: options.show_failure_reason,
            },
        );

        Self {
            current: current_presenter.present_all(&current, &mut clock),
            past: past_presenter.present_all(&past, &mut clock),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty() && self.past.is_empty()
    }
}
