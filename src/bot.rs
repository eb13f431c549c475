use async_trait::async_trait;

use crate::{
    common::{crash_condition, next_word},
    config::Conf,
    error::Result,
    host::{CommandHost, IncomingMessage, PolicyGate, PrefixProvider, Responder},
    plugins::{alias, customcom, reply},
    trigger::{match_prefix, split_trigger},
    DB,
};

pub const HELP_COMMAND: &str = "help";

// alias re-dispatch runs the rewritten message through `handle` again
pub struct Bot<R> {
    pub conf: Conf,
    pub db: DB,
    responder: R,
}

impl<R: Responder> Bot<R> {
    pub fn new(conf: Conf, db: DB, responder: R) -> Self {
        Self {
            conf,
            db,
            responder,
        }
    }

    pub fn responder(&self) -> &R {
        &self.responder
    }

    /// Runs the builtin commands and every enabled plugin on one message.
    pub async fn handle(&self, message: IncomingMessage) {
        let alias = async {
            if self.conf.plugins.alias.enabled {
                alias::on_message(self, &self.db.alias, &message).await;
            }
        };
        let customcom = async {
            if self.conf.plugins.customcom.enabled {
                customcom::on_message(self, &self.db.customcom, &message).await;
            }
        };

        tokio::join!(self.help(&message), alias, customcom);
    }

    async fn help(&self, message: &IncomingMessage) {
        if crash_condition(message) {
            return;
        };
        let Some(scope) = message.scope() else {
            return;
        };
        let prefixes = self.prefixes(scope);
        let Some(prefix) = match_prefix(&message.content, &prefixes) else {
            return;
        };
        let Some((trigger, args)) = split_trigger(&message.content, prefix) else {
            return;
        };
        if trigger != HELP_COMMAND || !self.is_sender_allowed(message) {
            return;
        }

        let topic = next_word(args).map(|(topic, _)| topic.to_lowercase());
        let content = match topic.as_deref() {
            None => self.overview(prefix),
            Some(alias::COMMAND) => alias::HELP.to_string(),
            Some(topic) if customcom::COMMANDS.contains(&topic) => customcom::HELP.to_string(),
            Some(topic) => format!("**No command called '{topic}' found**"),
        };
        reply(self, message, &content).await;
    }

    fn overview(&self, prefix: &str) -> String {
        let mut content = String::from("### Commands");
        for command in self.native_commands() {
            content += &format!("\n`{prefix}{command}`");
        }
        content + &format!("\nUse `{prefix}{HELP_COMMAND} COMMAND` for details")
    }
}

#[async_trait]
impl<R: Responder> CommandHost for Bot<R> {
    fn native_commands(&self) -> Vec<String> {
        let mut commands = vec![HELP_COMMAND.to_string()];
        if self.conf.plugins.alias.enabled {
            commands.push(alias::COMMAND.to_string());
        }
        if self.conf.plugins.customcom.enabled {
            commands.extend(customcom::COMMANDS.iter().map(|command| command.to_string()));
        }
        commands
    }

    async fn send_reply(&self, channel: &str, text: &str) -> Result<()> {
        self.responder.send(channel, text).await
    }

    async fn redispatch(&self, message: IncomingMessage) -> Result<()> {
        self.handle(message).await;
        Ok(())
    }
}

impl<R: Responder> PolicyGate for Bot<R> {
    fn is_sender_allowed(&self, message: &IncomingMessage) -> bool {
        self.conf.sender_allowed(message)
    }

    fn can_manage(&self, message: &IncomingMessage) -> bool {
        self.conf.manager(message)
    }
}

impl<R: Responder> PrefixProvider for Bot<R> {
    fn prefixes(&self, scope: &str) -> Vec<String> {
        self.conf.prefixes(scope)
    }
}
