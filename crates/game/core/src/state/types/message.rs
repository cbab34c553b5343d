//! Player-facing message log.
//!
//! Messages are observational only: nothing in the rules reads them back. The
//! log keeps the most recent [`GameConfig::MAX_MESSAGES`] entries.

use std::collections::VecDeque;

use crate::config::GameConfig;

use super::Tick;

/// Channel a message is printed on; front ends colour and filter by channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum MessageChannel {
    #[default]
    Plain,
    /// Things the player hears rather than sees.
    Sound,
    /// Notices about timed effects starting, running out, or ending.
    Duration,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    pub channel: MessageChannel,
    pub text: String,
    pub turn: Tick,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageLog {
    entries: VecDeque<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message, dropping the oldest entry once the log is full.
    pub fn push(&mut self, channel: MessageChannel, text: impl Into<String>, turn: Tick) {
        if self.entries.len() == GameConfig::MAX_MESSAGES {
            self.entries.pop_front();
        }
        self.entries.push_back(Message {
            channel,
            text: text.into(),
            turn,
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.entries.iter()
    }

    /// Message texts in the order they were printed.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|message| message.text.as_str())
    }

    pub fn last(&self) -> Option<&Message> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.texts().any(|line| line == text)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
