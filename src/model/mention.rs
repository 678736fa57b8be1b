use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of entity a mention refers to.
///
/// Each kind has exactly one mention syntax, delimited by angle brackets and a
/// type sigil: `<@id>` (or `<@!id>`) for users, `<@&id>` for roles and `<#id>` for
/// channels.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MentionKind {
    User,
    Role,
    Channel,
}

impl MentionKind {
    /// Every mention kind, in declaration order.
    pub const ALL: [MentionKind; 3] = [MentionKind::User, MentionKind::Role, MentionKind::Channel];

    /// Regular expression matching one mention of this kind.
    ///
    /// The single capture group holds the snowflake digits. The user pattern
    /// accepts the legacy nickname marker (`<@!id>`) but never captures it.
    pub fn pattern(self) -> &'static str {
        match self {
            MentionKind::User => r"<@!?([0-9]+)>",
            MentionKind::Role => r"<@&([0-9]+)>",
            MentionKind::Channel => r"<#([0-9]+)>",
        }
    }

    /// Text that opens a mention of this kind when formatting one.
    pub fn prefix(self) -> &'static str {
        match self {
            MentionKind::User => "<@",
            MentionKind::Role => "<@&",
            MentionKind::Channel => "<#",
        }
    }
}

impl fmt::Display for MentionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MentionKind::User => "user",
            MentionKind::Role => "role",
            MentionKind::Channel => "channel",
        };
        f.write_str(name)
    }
}

/// A single mention found in text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mention {
    pub kind: MentionKind,
    /// Snowflake digits exactly as they appeared in the text
    pub id: String,
}
