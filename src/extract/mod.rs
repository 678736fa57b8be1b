//! Snowflake extraction from Discord mention syntax.
//!
//! Each [`MentionKind`] owns one compiled pattern. Extraction scans the whole input
//! left to right for non-overlapping matches and returns the captured digit runs in
//! the order they appear. Mentions of other kinds, and anything that only looks like a
//! mention (missing `>`, non-digit content, empty ID), are ignored.
//!
//! # Functions
//!
//! For each kind there is a pair:
//!
//! - `get_<kind>_ids_from_mention` - Every ID found, possibly none
//! - `get_<kind>_id_from_mention` - The leftmost ID, if any
//!
//! [`extract_mentions`] returns mentions of every kind together, and
//! [`parse_mention`] checks that an input is exactly one mention.

use regex::Regex;
use std::sync::LazyLock;

use crate::{
    error::{MentionError, Result},
    model::mention::{Mention, MentionKind},
};

static USER_MENTION: LazyLock<Regex> = LazyLock::new(|| compile(MentionKind::User.pattern()));
static ROLE_MENTION: LazyLock<Regex> = LazyLock::new(|| compile(MentionKind::Role.pattern()));
static CHANNEL_MENTION: LazyLock<Regex> =
    LazyLock::new(|| compile(MentionKind::Channel.pattern()));

// `@&` is tried before `@!?` so role mentions are never read as users.
static ANY_MENTION: LazyLock<Regex> = LazyLock::new(|| compile(r"<(@&|@!?|#)([0-9]+)>"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("mention pattern is a valid regex")
}

fn regex_for(kind: MentionKind) -> &'static Regex {
    match kind {
        MentionKind::User => &*USER_MENTION,
        MentionKind::Role => &*ROLE_MENTION,
        MentionKind::Channel => &*CHANNEL_MENTION,
    }
}

/// Extracts every ID of the given mention kind from text.
///
/// # Arguments
/// - `text` - Arbitrary input, possibly empty
/// - `kind` - Which mention syntax to look for
///
/// # Returns
/// - `Vec<String>` - Captured IDs in order of appearance, empty if there are none
pub fn extract_ids(text: &str, kind: MentionKind) -> Vec<String> {
    let ids: Vec<String> = regex_for(kind)
        .captures_iter(text)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
        .collect();

    tracing::trace!("Extracted {} {} mention ID(s)", ids.len(), kind);

    ids
}

/// Extracts the leftmost ID of the given mention kind from text.
///
/// # Returns
/// - `Some(id)` - The first ID in order of appearance
/// - `None` - No mention of this kind was found
pub fn extract_first_id(text: &str, kind: MentionKind) -> Option<String> {
    extract_ids(text, kind).into_iter().next()
}

/// Extracts all user IDs from `<@id>` and `<@!id>` mentions.
pub fn get_user_ids_from_mention(text: &str) -> Vec<String> {
    extract_ids(text, MentionKind::User)
}

/// Extracts the first user ID from `<@id>` or `<@!id>` mentions.
pub fn get_user_id_from_mention(text: &str) -> Option<String> {
    extract_first_id(text, MentionKind::User)
}

/// Extracts all role IDs from `<@&id>` mentions.
pub fn get_role_ids_from_mention(text: &str) -> Vec<String> {
    extract_ids(text, MentionKind::Role)
}

/// Extracts the first role ID from `<@&id>` mentions.
pub fn get_role_id_from_mention(text: &str) -> Option<String> {
    extract_first_id(text, MentionKind::Role)
}

/// Extracts all channel IDs from `<#id>` mentions.
pub fn get_channel_ids_from_mention(text: &str) -> Vec<String> {
    extract_ids(text, MentionKind::Channel)
}

/// Extracts the first channel ID from `<#id>` mentions.
pub fn get_channel_id_from_mention(text: &str) -> Option<String> {
    extract_first_id(text, MentionKind::Channel)
}

/// Extracts mentions of every kind from text.
///
/// Kinds are interleaved in order of appearance, so `"<#1> <@2>"` yields the channel
/// mention before the user mention.
pub fn extract_mentions(text: &str) -> Vec<Mention> {
    ANY_MENTION
        .captures_iter(text)
        .filter_map(|cap| {
            let kind = match cap.get(1)?.as_str() {
                "@&" => MentionKind::Role,
                "#" => MentionKind::Channel,
                _ => MentionKind::User,
            };
            let id = cap.get(2)?.as_str().to_string();

            Some(Mention { kind, id })
        })
        .collect()
}

/// Parses text that must consist of exactly one mention of the given kind.
///
/// Leading and trailing whitespace is ignored. Useful for command arguments where a
/// single user, role or channel is expected.
///
/// # Arguments
/// - `text` - Input expected to be one mention, e.g. `"<@&123>"`
/// - `kind` - The mention kind the input must be
///
/// # Returns
/// - `Ok(id)` - The mention's ID
/// - `Err(MentionError::InvalidMention)` - Input is empty, has surrounding text,
///   holds several mentions, or is a mention of another kind
pub fn parse_mention(text: &str, kind: MentionKind) -> Result<String> {
    let trimmed = text.trim();

    let id = regex_for(kind)
        .captures(trimmed)
        .filter(|cap| cap.get(0).is_some_and(|m| m.range() == (0..trimmed.len())))
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string());

    id.ok_or_else(|| {
        tracing::debug!("Rejected '{}' as a {} mention", trimmed, kind);

        MentionError::InvalidMention {
            kind,
            value: text.to_string(),
        }
    })
}

#[cfg(test)]
mod test;
