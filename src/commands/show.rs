//! Board display command.
//!
//! Loads the records document once, builds the current and past lists and
//! prints them as tables or JSON. A load failure replaces both lists with a
//! single error message; nothing is retried.

use crate::{
    libs::{
        board::{Board, BoardOptions},
        config::Config,
        loader::{load, LoadError, RecordsSource},
        messages::Message,
        record::RecordsDocument,
        view::View,
    },
    msg_bail_anyhow, msg_debug, msg_warning,
};
use anyhow::Result;
use chrono::{Local, TimeZone, Utc};
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Records document path or HTTP(S) URL
    #[arg(short, long)]
    source: Option<String>,

    /// Print the board as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Do not show failure reasons in the past list
    #[arg(long)]
    hide_failure_reason: bool,
}

pub async fn cmd(show_args: ShowArgs) -> Result<()> {
    let config = match Config::read() {
        Ok(config) => config,
        Err(e) => {
            msg_warning!(Message::ConfigReadFailed(e.to_string()));
            Config::default()
        }
    };

    let source = config.resolve_source(show_args.source.as_deref());
    if source.trim().is_empty() {
        msg_bail_anyhow!(Message::RecordsSourceEmpty);
    }
    let source = RecordsSource::parse(&source);

    let options = BoardOptions {
        show_failure_reason: config.show_failure_reason && !show_args.hide_failure_reason,
    };

    msg_debug!(Message::LoadingRecords(source.to_string()));
    let document = load(&source).await;

    match config.display_offset() {
        Some(offset) => render(document, offset, options, show_args.json),
        None => render(document, Local, options, show_args.json),
    }
}

fn render<Tz: TimeZone>(document: Result<RecordsDocument, LoadError>, tz: Tz, options: BoardOptions, json: bool) -> Result<()> {
    match document {
        Ok(document) => {
            msg_debug!(Message::RecordsLoaded(document.records.len()));
            let board = Board::build(&document, tz, options, Utc::now);
            if json {
                View::board_json(&board)
            } else {
                View::board(&board)
            }
        }
        Err(error) => {
            if json {
                View::load_error_json(&error)
            } else {
                View::load_error(&error);
                Ok(())
            }
        }
    }
}
