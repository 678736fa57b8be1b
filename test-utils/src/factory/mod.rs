//! Factory methods for creating test data.
//!
//! Factories generate unique values on every call so tests never depend on IDs
//! chosen by another test.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let guild_id = factory::helpers::snowflake();
//! let text = factory::mention::MentionTextBuilder::new()
//!     .user(&factory::helpers::snowflake())
//!     .build();
//! ```

pub mod helpers;
pub mod mention;

pub use helpers::{next_id, snowflake};
pub use mention::MentionTextBuilder;
