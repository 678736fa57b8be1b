//! Error types for mention parsing.
//!
//! Extraction itself never fails: text without a matching mention simply yields no
//! identifiers. Errors only arise when a caller asks for something stricter, such as
//! converting captured identifiers to typed snowflakes or requiring that an input be
//! exactly one mention.

use std::num::ParseIntError;
use thiserror::Error;

use crate::model::mention::MentionKind;

/// Errors produced by strict parsing and typed ID conversion.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MentionError {
    /// Failure to parse id from String
    ///
    /// Occurs when a captured digit run is too long to fit in a `u64`, which no
    /// Discord snowflake can be.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// Identifier parsed to zero.
    ///
    /// Snowflakes are non-zero, and Serenity's ID types panic when constructed
    /// from `0`, so this is rejected before conversion.
    #[error("ID '{value}' is zero and cannot be a snowflake")]
    ZeroId {
        /// The string value that parsed to zero
        value: String,
    },

    /// Input is not exactly one mention of the expected kind.
    #[error("'{value}' is not a single {kind} mention")]
    InvalidMention {
        /// The mention kind that was expected
        kind: MentionKind,
        /// The rejected input
        value: String,
    },
}

/// Result type returned by strict parsing and typed ID conversion.
pub type Result<T> = std::result::Result<T, MentionError>;
