//! Core library modules for the challenge board.
//!
//! ## Features
//!
//! - **Records**: Lenient record model and lifecycle classification
//! - **Formatting**: Korean-locale dates and day/hour/minute/second durations
//! - **Presentation**: Per-record display values and the current/past board
//! - **Loading**: Records document from a file or an HTTP(S) URL
//! - **Infrastructure**: Configuration, data storage, messaging, console view
//!
//! ## Usage
//!
//! ```rust
//! use challenge_board::libs::board::{Board, BoardOptions};
//! use challenge_board::libs::record::RecordsDocument;
//! use chrono::{FixedOffset, Utc};
//!
//! let document = RecordsDocument::from_json(r#"{"records": [{"title": "금주", "start": "2024-01-01"}]}"#)?;
//! let seoul = FixedOffset::east_opt(9 * 3600).unwrap();
//! let board = Board::build(&document, seoul, BoardOptions::default(), Utc::now);
//! assert_eq!(board.current.len(), 1);
//! # Ok::<(), serde_json::Error>(())
//! ```

pub mod board;
pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod http;
pub mod loader;
pub mod messages;
pub mod presenter;
pub mod record;
pub mod view;
