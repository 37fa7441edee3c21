use super::board::Board;
use super::loader::LoadError;
use super::messages::Message;
use super::presenter::PresentedRecord;
use super::record::Status;
use crate::{msg_error, msg_print};
use anyhow::Result;
use prettytable::{Cell, Row, Table};

pub struct View {}

impl View {
    /// Prints both lists, each with its own header and empty-state message.
    pub fn board(board: &Board) -> Result<()> {
        msg_print!(Message::CurrentRecordsHeader, true);
        Self::records(&board.current, Message::CurrentRecordsEmpty);

        msg_print!(Message::PastRecordsHeader, true);
        Self::records(&board.past, Message::PastRecordsEmpty);

        Ok(())
    }

    pub fn records(records: &[PresentedRecord], empty: Message) {
        if records.is_empty() {
            msg_print!(empty);
            return;
        }
        Self::records_table(records).printstd();
    }

    pub fn records_table(records: &[PresentedRecord]) -> Table {
        let mut table = Table::new();

        table.set_titles(Row::new(vec![
            Cell::new(&Message::ColumnTitle.to_string()),
            Cell::new(&Message::ColumnStatus.to_string()),
            Cell::new(&Message::ColumnSchedule.to_string()),
            Cell::new(&Message::ColumnDuration.to_string()),
            Cell::new(&Message::ColumnNotes.to_string()),
        ]));

        for record in records {
            table.add_row(Row::new(vec![
                Cell::new(&record.title),
                Cell::new(&record.status.to_string()).style_spec(status_style(record.status)),
                Cell::new(&schedule(record)),
                Cell::new(&record.duration.as_ref().map(ToString::to_string).unwrap_or_default()),
                Cell::new(&notes(record)),
            ]));
        }

        table
    }

    /// Error state: the same message replaces both lists.
    pub fn load_error(error: &LoadError) {
        let message = Message::RecordsLoadFailed(error.to_string());

        msg_print!(Message::CurrentRecordsHeader, true);
        msg_error!(message);
        msg_print!(Message::PastRecordsHeader, true);
        msg_error!(message);
    }

    pub fn board_json(board: &Board) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(board)?);
        Ok(())
    }

    pub fn load_error_json(error: &LoadError) -> Result<()> {
        let payload = serde_json::json!({
            "error": Message::RecordsLoadFailed(error.to_string()).to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        Ok(())
    }
}

fn status_style(status: Status) -> &'static str {
    match status {
        Status::Active => "Fy",
        Status::Completed => "Fg",
        Status::Failed => "Fr",
    }
}

/// Start and end lines of the schedule column.
pub fn schedule(record: &PresentedRecord) -> String {
    let mut lines = Vec::new();
    if let Some(start) = &record.start_text {
        lines.push(Message::StartedAt(start.clone()).to_string());
    }
    if let Some(end) = &record.end_text {
        lines.push(Message::EndedAt(end.clone()).to_string());
    }
    lines.join("\n")
}

/// Failure reason and description lines of the notes column.
pub fn notes(record: &PresentedRecord) -> String {
    let mut lines = Vec::new();
    if let Some(reason) = &record.failure_reason {
        lines.push(Message::FailureReason(reason.clone()).to_string());
    }
    if let Some(description) = &record.description {
        lines.push(description.clone());
    }
    lines.join("\n")
}
