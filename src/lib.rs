//! Maybe – an optional-value container with JSON and database adapters.
//!
//! The crate centers on the [`Maybe`] enum: a value is either
//! [`Maybe::Present`] and holds exactly one `T`, or [`Maybe::Absent`] and
//! holds nothing. On top of the usual queries, extraction and mapping
//! operations, two adapter layers make the container usable at system
//! boundaries:
//!
//! * JSON (serde / serde_json): absence is the literal `null`, presence is
//!   the payload's own encoding, so a `Maybe` field round-trips cleanly
//!   through any serde-derived struct.
//! * SQLite (rusqlite): absence binds and scans as SQL `NULL`, presence
//!   delegates to the payload's [`rusqlite::types::ToSql`] /
//!   [`rusqlite::types::FromSql`] implementation, so a `Maybe` works
//!   directly as a nullable column.
//!
//! ## Modules
//! * [`maybe`] – The container itself: construction, queries, extraction,
//!   [`Maybe::take`], [`Maybe::map`] and friends.
//! * [`error`] – [`error::MaybeError`] for decode and conversion failures.
//!
//! ## Quick Start
//! ```
//! use maybe::Maybe;
//!
//! let mut nickname = Maybe::Present(String::from("Ada"));
//! assert!(nickname.is_present());
//!
//! // Ownership moves out exactly once.
//! let moved = nickname.take();
//! assert!(nickname.is_absent());
//! assert_eq!(moved.unwrap(), "Ada");
//!
//! // Absence encodes as the JSON literal `null`.
//! assert_eq!(Maybe::<i64>::Absent.to_json().unwrap(), b"null");
//! assert_eq!(Maybe::<i64>::from_json(b"3").unwrap(), Maybe::Present(3));
//! ```
//!
//! ## Error Handling
//! [`Maybe::unwrap`] and [`Maybe::expect`] panic on an absent value, the
//! same contract-violation behavior as the standard `Option`. Recoverable
//! failures (malformed JSON, an unconvertible column value) surface as
//! [`error::MaybeError`] or as the driver's own error, never as a third
//! container state.

pub mod error;
pub mod maybe;

mod json;
mod sql;

pub use error::{MaybeError, Result};
pub use maybe::Maybe;
