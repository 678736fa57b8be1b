//! Discord Mentions
//!
//! Helpers for pulling snowflake IDs out of Discord mention syntax and for building
//! links to messages. Everything here is a pure function over its input: there is no
//! shared mutable state, no I/O, and every call can be made concurrently from any
//! thread.
//!
//! # Overview
//!
//! - **Extraction** (`extract`) - Finds `<@id>`, `<@!id>`, `<@&id>` and `<#id>`
//!   mentions in free-form text
//! - **Formatting** (`format`) - Renders mentions and message URLs from known IDs
//! - **Model** (`model`) - Mention kinds and message references
//! - **Error** (`error`) - Errors for strict parsing and typed conversion
//!
//! # Usage
//!
//! ```rust
//! use discord_mentions::{build_message_url, get_role_ids_from_mention, get_user_id_from_mention};
//!
//! let text = "<@!123> pinged <@&456> and <@&789>";
//!
//! assert_eq!(get_user_id_from_mention(text), Some("123".to_string()));
//! assert_eq!(get_role_ids_from_mention(text), vec!["456", "789"]);
//! assert_eq!(
//!     build_message_url("1", "2", "3"),
//!     "https://discord.com/channels/1/2/3"
//! );
//! ```
//!
//! # Feature Gates
//!
//! - `serenity` - Typed ID extraction and `MessageLink` for Serenity's `Message`

pub mod error;
pub mod extract;
pub mod format;
pub mod model;
pub mod util;

#[cfg(feature = "serenity")]
pub mod discord;

pub use error::{MentionError, Result};
pub use extract::{
    extract_mentions, get_channel_id_from_mention, get_channel_ids_from_mention,
    get_role_id_from_mention, get_role_ids_from_mention, get_user_id_from_mention,
    get_user_ids_from_mention, parse_mention,
};
pub use format::{build_message_url, format_mention, get_message_url};
pub use model::{
    mention::{Mention, MentionKind},
    message::{MessageLink, MessageRef},
};
