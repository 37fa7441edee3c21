//! # Challenge Board
//!
//! A command-line board for personal challenges: it loads a static records
//! document, classifies every challenge as active, completed or failed, and
//! prints Korean-locale dates with elapsed or total durations.
//!
//! ## Features
//!
//! - **Classification**: Active, completed and failed challenges from raw records
//! - **Durations**: Total span for ended challenges, live elapsed time for active ones
//! - **Lenient Input**: Malformed fields are left out instead of failing the board
//! - **Sources**: Local files and HTTP(S) URLs
//! - **Output**: Terminal tables or JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use challenge_board::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
