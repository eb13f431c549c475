use async_trait::async_trait;

use crate::error::Result;

pub type ScopeId = String;

/// Aliases may expand into other aliases; past this many hops a message is dropped.
pub const MAX_REDISPATCH_DEPTH: u8 = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Author {
    pub id: String,
    pub name: String,
    pub nickname: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Channel {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Server {
    pub id: ScopeId,
    pub name: String,
}

/// A chat message as seen by the plugins.
///
/// `server` is `None` for private channels, which no plugin handles.
/// `depth` counts how many alias expansions produced this message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncomingMessage {
    pub id: String,
    pub content: String,
    pub author: Author,
    pub channel: Channel,
    pub server: Option<Server>,
    pub depth: u8,
}

impl IncomingMessage {
    pub fn scope(&self) -> Option<&str> {
        self.server.as_ref().map(|server| server.id.as_str())
    }

    /// Copy of this message carrying new content, one expansion deeper.
    pub fn redirect(&self, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            depth: self.depth.saturating_add(1),
            ..self.clone()
        }
    }
}

/// The chat framework the plugins are mounted in.
#[async_trait]
pub trait CommandHost: Send + Sync {
    /// Names of commands the framework answers itself; triggers may not shadow them.
    fn native_commands(&self) -> Vec<String>;

    async fn send_reply(&self, channel: &str, text: &str) -> Result<()>;

    /// Feeds a rewritten message back through the command pipeline.
    async fn redispatch(&self, message: IncomingMessage) -> Result<()>;
}

pub trait PolicyGate: Send + Sync {
    fn is_sender_allowed(&self, message: &IncomingMessage) -> bool;

    /// Whether the sender may add, edit or delete triggers.
    fn can_manage(&self, message: &IncomingMessage) -> bool;
}

pub trait PrefixProvider: Send + Sync {
    fn prefixes(&self, scope: &str) -> Vec<String>;
}

/// Everything a plugin needs from its surroundings.
pub trait Host: CommandHost + PolicyGate + PrefixProvider {}

impl<T: CommandHost + PolicyGate + PrefixProvider + ?Sized> Host for T {}

/// Outbound transport used by [`crate::bot::Bot`].
#[async_trait]
pub trait Responder: Send + Sync {
    async fn send(&self, channel: &str, content: &str) -> Result<()>;
}
