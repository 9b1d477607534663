//! Community
//!
//! Chat-style community board backed by a static feed. Posting only appends to
//! the in-memory message list.

use serde::Deserialize;
use smallvec::SmallVec;
use thiserror::Error;
use tracing::debug;

const DEMO_FEED_YAML: &str = include_str!("../../../fixtures/community/feed.yml");

/// Author name of locally posted messages.
pub const SELF_AUTHOR: &str = "我";

/// Timestamp shown on locally posted messages.
pub const JUST_NOW: &str = "刚刚";

const SELF_AVATAR: &str = "https://images.unsplash.com/photo-1494790108377-be9c29b29330?ixlib=rb-1.2.1&auto=format&fit=crop&w=100&h=100&q=80";

/// Community feed errors
#[derive(Debug, Error)]
pub enum CommunityError {
    /// YAML parsing error
    #[error("Failed to parse community feed: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// The default channel isn't in the channel list
    #[error("Default channel {0} does not exist")]
    UnknownDefaultChannel(u32),
}

/// Channel type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    /// Text chat.
    Text,

    /// Voice room.
    Voice,
}

/// A channel in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Channel {
    /// Channel id.
    pub id: u32,

    /// Display name.
    pub name: String,

    /// Text or voice.
    pub kind: ChannelKind,

    /// Whether the channel has unread messages.
    #[serde(default)]
    pub unread: bool,
}

/// Emoji reaction tally.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Reaction {
    /// Emoji.
    pub emoji: String,

    /// Number of members who reacted.
    pub count: u32,
}

/// A chat message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Message {
    /// Sequential id.
    pub id: u32,

    /// Author display name.
    pub author: String,

    /// Author avatar URL.
    pub avatar: String,

    /// Message text.
    pub content: String,

    /// Relative display time.
    pub timestamp: String,

    /// Posted by the assistant bot.
    #[serde(default)]
    pub bot: bool,

    /// Reactions.
    #[serde(default)]
    pub reactions: SmallVec<[Reaction; 2]>,
}

/// Member presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    /// Online.
    Online,

    /// Away.
    Idle,

    /// Do not disturb.
    Dnd,

    /// Automated member.
    Bot,
}

impl Presence {
    /// Indicator dot classes used by the web front end.
    pub const fn dot_class(self) -> &'static str {
        match self {
            Self::Online => "bg-green-500",
            Self::Idle => "bg-yellow-500",
            Self::Dnd => "bg-red-500",
            Self::Bot => "bg-blue-500",
        }
    }
}

/// A member in the member list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Member {
    /// Member id.
    pub id: u32,

    /// Display name.
    pub name: String,

    /// Avatar URL.
    pub avatar: String,

    /// Presence.
    pub status: Presence,
}

#[derive(Debug, Deserialize)]
struct FeedFixture {
    default_channel: u32,
    channels: Vec<Channel>,
    messages: Vec<Message>,
    members: Vec<Member>,
}

/// Channels, messages and members of the community board, plus the selected
/// channel.
#[derive(Debug, Clone)]
pub struct ChannelFeed {
    channels: Vec<Channel>,
    messages: Vec<Message>,
    members: Vec<Member>,
    selected: u32,
}

impl ChannelFeed {
    /// The bundled demo feed.
    ///
    /// # Errors
    ///
    /// Returns a [`CommunityError`] if the bundled fixture is invalid.
    pub fn demo() -> Result<Self, CommunityError> {
        Self::from_yaml(DEMO_FEED_YAML)
    }

    /// Parse a feed fixture.
    ///
    /// # Errors
    ///
    /// - [`CommunityError::Yaml`]: the document doesn't parse.
    /// - [`CommunityError::UnknownDefaultChannel`]: `default_channel` isn't
    ///   listed.
    pub fn from_yaml(yaml: &str) -> Result<Self, CommunityError> {
        let fixture: FeedFixture = serde_norway::from_str(yaml)?;

        if !fixture
            .channels
            .iter()
            .any(|channel| channel.id == fixture.default_channel)
        {
            return Err(CommunityError::UnknownDefaultChannel(
                fixture.default_channel,
            ));
        }

        Ok(Self {
            channels: fixture.channels,
            messages: fixture.messages,
            members: fixture.members,
            selected: fixture.default_channel,
        })
    }

    /// All channels.
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Messages, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Members.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// The selected channel.
    pub fn selected(&self) -> Option<&Channel> {
        self.channels
            .iter()
            .find(|channel| channel.id == self.selected)
    }

    /// Select the channel with `id`. Returns `false` if there's no such
    /// channel, leaving the selection unchanged.
    pub fn select(&mut self, id: u32) -> bool {
        let exists = self.channels.iter().any(|channel| channel.id == id);

        if exists {
            self.selected = id;
        }

        exists
    }

    /// Post `content` as the local user.
    ///
    /// Blank content is ignored and returns `None`.
    pub fn post(&mut self, content: &str) -> Option<&Message> {
        if content.trim().is_empty() {
            return None;
        }

        let id = u32::try_from(self.messages.len())
            .unwrap_or(u32::MAX)
            .saturating_add(1);

        debug!(id, channel = self.selected, "posting message");

        self.messages.push(Message {
            id,
            author: SELF_AUTHOR.to_string(),
            avatar: SELF_AVATAR.to_string(),
            content: content.to_string(),
            timestamp: JUST_NOW.to_string(),
            bot: false,
            reactions: SmallVec::new(),
        });

        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn demo_feed_loads() -> TestResult {
        let feed = ChannelFeed::demo()?;

        assert_eq!(feed.channels().len(), 7);
        assert_eq!(feed.messages().len(), 5);
        assert_eq!(feed.members().len(), 7);
        assert_eq!(
            feed.selected().map(|channel| channel.name.as_str()),
            Some("学习交流")
        );
        assert!(feed.messages().iter().any(|message| message.bot));

        Ok(())
    }

    #[test]
    fn post_appends_with_next_id() -> TestResult {
        let mut feed = ChannelFeed::demo()?;

        let message = feed.post("有人一起学 Rust 吗？").cloned();

        let message = message.expect("message should be posted");

        assert_eq!(message.id, 6);
        assert_eq!(message.author, SELF_AUTHOR);
        assert_eq!(message.timestamp, JUST_NOW);
        assert!(message.reactions.is_empty());
        assert_eq!(feed.messages().len(), 6);

        Ok(())
    }

    #[test]
    fn blank_posts_are_ignored() -> TestResult {
        let mut feed = ChannelFeed::demo()?;

        assert!(feed.post("").is_none());
        assert!(feed.post("   \n").is_none());
        assert_eq!(feed.messages().len(), 5);

        Ok(())
    }

    #[test]
    fn select_only_accepts_known_channels() -> TestResult {
        let mut feed = ChannelFeed::demo()?;

        assert!(feed.select(7));
        assert_eq!(
            feed.selected().map(|channel| channel.kind),
            Some(ChannelKind::Voice)
        );

        assert!(!feed.select(42));
        assert_eq!(feed.selected().map(|channel| channel.id), Some(7));

        Ok(())
    }

    #[test]
    fn unknown_default_channel_is_rejected() {
        let yaml = "default_channel: 9\nchannels: []\nmessages: []\nmembers: []\n";

        assert!(matches!(
            ChannelFeed::from_yaml(yaml),
            Err(CommunityError::UnknownDefaultChannel(9))
        ));
    }
}
