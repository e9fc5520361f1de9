//! Opaque localization pass-through used when assembling display strings.
//!
//! The registry never interprets translations; it stores whatever the
//! translator returns as the entry's display name or description. The default
//! implementation renders the English default message with `{placeholder}`
//! values substituted, which keeps construction deterministic when no
//! translation bundle is wired in.

/// A translatable message: stable id, English default, substitutions.
#[derive(Debug, Clone)]
pub struct Message<'a> {
    /// Stable message identifier, namespaced by area and setting.
    pub id: &'a str,
    /// English default rendered when no translation bundle matches.
    pub default_message: &'a str,
    /// Placeholder substitutions applied to the rendered message.
    pub values: Vec<(&'a str, String)>,
}

impl<'a> Message<'a> {
    /// Create a message with no placeholder values.
    #[must_use]
    pub const fn new(id: &'a str, default_message: &'a str) -> Self {
        Self {
            id,
            default_message,
            values: Vec::new(),
        }
    }

    /// Attach a placeholder substitution.
    #[must_use]
    pub fn with_value(mut self, name: &'a str, value: impl Into<String>) -> Self {
        self.values.push((name, value.into()));
        self
    }
}

/// Localization hook resolving messages to display strings.
pub trait Translator {
    /// Resolve `message` to the string shown to the user.
    fn translate(&self, message: &Message<'_>) -> String;
}

/// Translator that renders default messages without a translation bundle.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMessages;

impl Translator for DefaultMessages {
    fn translate(&self, message: &Message<'_>) -> String {
        let mut rendered = message.default_message.to_string();
        for (name, value) in &message.values {
            rendered = rendered.replace(&format!("{{{name}}}"), value);
        }
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_messages_pass_through() {
        let message = Message::new("settings.test.title", "Highlight results");
        assert_eq!(DefaultMessages.translate(&message), "Highlight results");
    }

    #[test]
    fn placeholders_are_substituted() {
        let message = Message::new("settings.test.text", "Used when {language} is active")
            .with_value("language", "Lucene");
        assert_eq!(
            DefaultMessages.translate(&message),
            "Used when Lucene is active"
        );
    }

    #[test]
    fn unmatched_placeholders_are_left_intact() {
        let message = Message::new("settings.test.text", "See {other} for details");
        assert_eq!(DefaultMessages.translate(&message), "See {other} for details");
    }
}
