use once_cell::sync::Lazy;
use regex::Regex;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z0-9_]+").unwrap());

/// A raw `"sender:message"` line split at the first colon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatMessage<'a> {
    pub sender: &'a str,
    pub body: &'a str,
}

impl<'a> ChatMessage<'a> {
    /// Returns `None` when there is no `:` separator.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let (sender, body) = raw.split_once(':')?;
        Some(Self { sender, body })
    }

    /// Maximal runs of ASCII letters, digits and underscores, left to right.
    pub fn words(&self) -> impl Iterator<Item = &'a str> {
        WORD.find_iter(self.body).map(|m| m.as_str())
    }
}

/// Tokens of a raw chat line. Lines without a sender prefix yield nothing.
pub fn words(raw: &str) -> impl Iterator<Item = &str> {
    ChatMessage::parse(raw).into_iter().flat_map(|message| message.words())
}
