//! Domain types shared by extraction and formatting.
//!
//! Identifiers are kept as strings throughout. Snowflakes span the full `u64` range
//! and are exchanged with Discord as decimal text, so nothing here converts them to a
//! numeric type; see [`crate::util::parse`] for explicit, fallible conversion.

pub mod mention;
pub mod message;
