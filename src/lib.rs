// ABOUTME: Main library entry point for the onthisday Wikipedia event query crate.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, Options, Event, MonthDay, QueryError, ErrorCode.

//! onthisday - Query historical events for a day of the year from Wikipedia.
//!
//! This crate fetches the English Wikipedia page for a calendar day (month
//! and day-of-month), locates its "Events" section, and extracts one
//! [`Event`] record per list entry. Malformed entries are skipped with a
//! warning rather than failing the whole query.
//!
//! # Example
//!
//! ```no_run
//! use onthisday::{Client, QueryError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QueryError> {
//!     let client = Client::builder().build();
//!     for event in client.query(7, 20).await? {
//!         println!("{}", event);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod event;
pub mod extract;
pub mod options;
pub mod resource;
pub mod year;

pub use crate::client::Client;
pub use crate::error::{ErrorCode, QueryError};
pub use crate::event::{Event, MonthDay};
pub use crate::extract::{extract_events, Skipped};
pub use crate::options::{ClientBuilder, Options};
pub use crate::year::{normalize_year, MalformedYearError};
