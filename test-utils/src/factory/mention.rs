//! Builder for message text containing mentions.

/// Builds message text from plain words and mentions, joined by single spaces.
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::factory::mention::MentionTextBuilder;
///
/// let text = MentionTextBuilder::new()
///     .text("hey")
///     .nickname_user("123")
///     .role("456")
///     .build();
/// assert_eq!(text, "hey <@!123> <@&456>");
/// ```
#[derive(Debug, Default, Clone)]
pub struct MentionTextBuilder {
    parts: Vec<String>,
}

impl MentionTextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends plain text.
    pub fn text(mut self, text: &str) -> Self {
        self.parts.push(text.to_string());
        self
    }

    /// Appends a `<@id>` user mention.
    pub fn user(mut self, id: &str) -> Self {
        self.parts.push(format!("<@{}>", id));
        self
    }

    /// Appends a `<@!id>` user mention using the legacy nickname marker.
    pub fn nickname_user(mut self, id: &str) -> Self {
        self.parts.push(format!("<@!{}>", id));
        self
    }

    /// Appends a `<@&id>` role mention.
    pub fn role(mut self, id: &str) -> Self {
        self.parts.push(format!("<@&{}>", id));
        self
    }

    /// Appends a `<#id>` channel mention.
    pub fn channel(mut self, id: &str) -> Self {
        self.parts.push(format!("<#{}>", id));
        self
    }

    pub fn build(self) -> String {
        self.parts.join(" ")
    }
}
