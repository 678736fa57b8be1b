//! Discord Mentions Test Utils
//!
//! Provides shared testing utilities for the discord-mentions crate. The crate offers
//! fixed mention text fixtures and factories that generate unique snowflakes and
//! compose message text containing mentions.
//!
//! # Overview
//!
//! - **fixture**: Constant input texts covering common and malformed mention shapes
//! - **factory**: Unique snowflake generation and a builder for mention-bearing text
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::factory::{helpers::snowflake, mention::MentionTextBuilder};
//!
//! #[test]
//! fn test_role_extraction() {
//!     let role_id = snowflake();
//!     let text = MentionTextBuilder::new()
//!         .text("ping")
//!         .role(&role_id)
//!         .build();
//!
//!     // Extract from text...
//! }
//! ```

pub mod factory;
pub mod fixture;
