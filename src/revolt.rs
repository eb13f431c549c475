use async_trait::async_trait;
use reywen::{
    client::{methods::message::DataMessageSend, Client},
    structures::channels::message::Message,
};
use tracing::debug;

use crate::{
    config::Conf,
    error::{CogError, Result},
    host::{Author, Channel, IncomingMessage, PrefixProvider, Responder, Server},
    trigger::match_prefix,
};

#[derive(Clone)]
pub struct Revolt {
    pub client: Client,
}

impl Revolt {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Converts a websocket message into what the plugins read.
    ///
    /// Messages outside a configured server, or without a command prefix, are
    /// skipped before the author lookup to save an API call.
    pub async fn incoming(&self, conf: &Conf, message: &Message) -> Option<IncomingMessage> {
        let content = message.content.clone()?;
        let (server_id, server) = conf.server_of(&message.channel)?;
        match_prefix(&content, &conf.prefixes(server_id))?;

        let name = match self.client.user_fetch(&message.author).await {
            Ok(user) => user.username,
            Err(error) => {
                debug!(author = %message.author, ?error, "user lookup failed");
                message.author.clone()
            }
        };

        Some(IncomingMessage {
            id: message.id.clone(),
            content,
            author: Author {
                id: message.author.clone(),
                name,
                nickname: None,
            },
            channel: Channel {
                id: message.channel.clone(),
                name: server
                    .channels
                    .get(&message.channel)
                    .cloned()
                    .unwrap_or_else(|| message.channel.clone()),
            },
            server: Some(Server {
                id: server_id.to_string(),
                name: server.name.clone(),
            }),
            depth: 0,
        })
    }
}

#[async_trait]
impl Responder for Revolt {
    async fn send(&self, channel: &str, content: &str) -> Result<()> {
        self.client
            .message_send(channel, &DataMessageSend::new().set_content(content))
            .await
            .map(|_| ())
            .map_err(|error| CogError::Transport(format!("{error:?}")))
    }
}
