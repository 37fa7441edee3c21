//! Per-record derivation of display values.
//!
//! The presenter is the boundary between raw records and the view: it
//! classifies a record, parses its timestamps, computes the total or elapsed
//! duration and decides which optional texts are shown. Invalid input never
//! produces an error here; the affected value is simply left out.
//!
//! ## Duration Rules
//!
//! - Ended record with valid `start` and `end`: total duration `end - start`.
//!   A negative span is left out.
//! - Active record with valid `start`: elapsed duration `now - start`,
//!   shown as `진행 {duration}`.
//! - Everything else: no duration.
//!
//! `now` is an argument, so callers decide when the clock is sampled.

use super::formatter::{format_datetime, format_span, parse_instant};
use super::messages::Message;
use super::record::{Record, Status};
use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;
use std::fmt;

/// Whether a duration covers a finished record or is still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationKind {
    Total,
    Elapsed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DurationText {
    pub kind: DurationKind,
    pub text: String,
}

impl DurationText {
    pub fn total(text: String) -> Self {
        Self { kind: DurationKind::Total, text }
    }

    pub fn elapsed(text: String) -> Self {
        Self { kind: DurationKind::Elapsed, text }
    }
}

impl fmt::Display for DurationText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DurationKind::Total => write!(f, "{}", self.text),
            DurationKind::Elapsed => write!(f, "{}", Message::ElapsedDuration(self.text.clone())),
        }
    }
}

/// Display-ready values for one record. Optional fields are `None` when the
/// underlying data is missing or invalid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentedRecord {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<DurationText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentOptions {
    /// Show the trimmed failure reason of failed records.
    pub show_failure_reason: bool,
}

impl Default for PresentOptions {
    fn default() -> Self {
        Self { show_failure_reason: true }
    }
}

/// Derives [`PresentedRecord`]s in a fixed display time zone.
#[derive(Debug, Clone)]
pub struct Presenter<Tz: TimeZone> {
    tz: Tz,
    options: PresentOptions,
}

impl<Tz: TimeZone> Presenter<Tz> {
    pub fn new(tz: Tz, options: PresentOptions) -> Self {
        Self { tz, options }
    }

    /// Presents a single record against the given `now`.
    pub fn present(&self, record: &Record, now: DateTime<Utc>) -> PresentedRecord {
        let classification = record.classify();
        let start = record.start.as_ref().and_then(|value| parse_instant(value, &self.tz));
        let end = if classification.has_ended {
            record.end.as_ref().and_then(|value| parse_instant(value, &self.tz))
        } else {
            None
        };

        let duration = match (start, end) {
            (Some(start), Some(end)) => format_span(&start, &end).map(DurationText::total),
            (Some(start), None) if classification.status == Status::Active => format_span(&start, &now).map(DurationText::elapsed),
            _ => None,
        };

        let failure_reason = if classification.status == Status::Failed && self.options.show_failure_reason {
            record
                .failure_reason
                .as_deref()
                .map(str::trim)
                .filter(|reason| !reason.is_empty())
                .map(str::to_string)
        } else {
            None
        };

        PresentedRecord {
            title: record.title.clone().unwrap_or_else(|| Message::UntitledChallenge.to_string()),
            description: record.description.clone().filter(|text| !text.is_empty()),
            status: classification.status,
            start_text: start.map(|instant| format_datetime(&instant, &self.tz)),
            end_text: end.map(|instant| format_datetime(&instant, &self.tz)),
            duration,
            failure_reason,
        }
    }

    /// Presents records in order, sampling `clock` once per record.
    pub fn present_all<C>(&self, records: &[&Record], clock: &mut C) -> Vec<PresentedRecord>
    where
        C: FnMut() -> DateTime<Utc>,
    {
        records.iter().map(|record| self.present(record, clock())).collect()
    }
}
