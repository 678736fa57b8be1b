//! Test fixtures providing fixed input text.
//!
//! Unlike factories, fixtures never change between calls, which makes them suitable
//! for asserting exact outputs.

/// Text with no mention syntax at all.
pub const PLAIN_TEXT: &str = "Fleet forms up at 19:00, bring your own snacks.";

/// One mention of each kind, in user, role, channel order.
pub const MIXED_MENTIONS: &str = "<@123> <@&456> <#789>";

/// Mention-like text that must not match any pattern.
///
/// Covers a missing closing bracket, an empty ID, non-digit IDs, whitespace inside
/// the brackets and a doubled nickname marker.
pub const MALFORMED_MENTIONS: &[&str] = &[
    "<@123",
    "<@>",
    "<@&>",
    "<#>",
    "<@abc>",
    "<#12a>",
    "<@ 123>",
    "<@!!123>",
    "@123",
    "#789",
];

/// Channel mention whose ID is one past `u64::MAX`.
pub const OVERFLOWING_CHANNEL_MENTION: &str = "<#18446744073709551616>";

/// Non-ASCII decimal digits (Arabic-Indic), which are not snowflake digits.
pub const NON_ASCII_DIGIT_MENTION: &str = "<@١٢٣>";

/// Message spread over several lines, as posted in a real channel.
pub const MULTILINE_MESSAGE: &str = "Fleet up!\n<@&111> <@&222>\nFC: <@!333>\nComms in <#444>";
