#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reywen_cogs::{
    bot::Bot,
    config::Conf,
    error::Result,
    host::{
        Author, Channel, CommandHost, IncomingMessage, PolicyGate, PrefixProvider, Responder,
        Server,
    },
    store::{TriggerRules, TriggerStore},
    DBAlias, DBCustomCom, DB,
};

pub const MANAGER: &str = "mod";
pub const BLOCKED: &str = "troll";

pub fn message(author: &str, content: &str) -> IncomingMessage {
    IncomingMessage {
        id: "m1".into(),
        content: content.into(),
        author: Author {
            id: author.into(),
            name: capitalize(author),
            nickname: None,
        },
        channel: Channel {
            id: "c1".into(),
            name: "general".into(),
        },
        server: Some(Server {
            id: "s1".into(),
            name: "Home".into(),
        }),
        depth: 0,
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Plugin host that records everything instead of talking to a chat service.
#[derive(Default)]
pub struct MockHost {
    pub replies: Mutex<Vec<String>>,
    pub dispatched: Mutex<Vec<IncomingMessage>>,
}

impl MockHost {
    pub fn replies(&self) -> Vec<String> {
        self.replies.lock().unwrap().clone()
    }

    pub fn dispatched(&self) -> Vec<String> {
        self.dispatched
            .lock()
            .unwrap()
            .iter()
            .map(|message| message.content.clone())
            .collect()
    }
}

#[async_trait]
impl CommandHost for MockHost {
    fn native_commands(&self) -> Vec<String> {
        ["help", "alias", "addcom", "editcom", "delcom", "customcommands", "flip"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    async fn send_reply(&self, _channel: &str, text: &str) -> Result<()> {
        self.replies.lock().unwrap().push(text.to_string());
        Ok(())
    }

    async fn redispatch(&self, message: IncomingMessage) -> Result<()> {
        self.dispatched.lock().unwrap().push(message);
        Ok(())
    }
}

impl PolicyGate for MockHost {
    fn is_sender_allowed(&self, message: &IncomingMessage) -> bool {
        message.author.id != BLOCKED
    }

    fn can_manage(&self, message: &IncomingMessage) -> bool {
        message.author.id == MANAGER
    }
}

impl PrefixProvider for MockHost {
    fn prefixes(&self, _scope: &str) -> Vec<String> {
        vec!["!".to_string()]
    }
}

pub async fn alias_db(dir: &tempfile::TempDir) -> DBAlias {
    DBAlias(
        TriggerStore::open(
            dir.path().join("alias/aliases.json"),
            TriggerRules {
                strip_prefixes: true,
            },
        )
        .await
        .unwrap(),
    )
}

pub async fn customcom_db(dir: &tempfile::TempDir) -> DBCustomCom {
    DBCustomCom(
        TriggerStore::open(
            dir.path().join("customcom/commands.json"),
            TriggerRules {
                strip_prefixes: false,
            },
        )
        .await
        .unwrap(),
    )
}

/// Records every message the bot sends as `(channel, content)`.
#[derive(Clone, Default)]
pub struct Recorder {
    pub sent: Arc<Mutex<Vec<(String, String)>>>,
}

impl Recorder {
    pub fn contents(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|(_, content)| content.clone())
            .collect()
    }
}

#[async_trait]
impl Responder for Recorder {
    async fn send(&self, channel: &str, content: &str) -> Result<()> {
        self.sent
            .lock()
            .unwrap()
            .push((channel.to_string(), content.to_string()));
        Ok(())
    }
}

pub fn conf(dir: &tempfile::TempDir) -> Conf {
    Conf::parse(&format!(
        r#"
        [auth]
        token = "token"
        bot_id = "bot"
        owner = "owner"

        [store]
        data_dir = '{}'

        [prefixes]
        default = ["!"]

        [servers.s1]
        name = "Home"
        managers = ["{MANAGER}"]
        channels = {{ c1 = "general" }}

        [policy]
        blacklist = ["{BLOCKED}"]
        "#,
        dir.path().display()
    ))
    .unwrap()
}

pub async fn bot(dir: &tempfile::TempDir) -> Bot<Recorder> {
    let conf = conf(dir);
    let db = DB::init(&conf).await.unwrap();
    Bot::new(conf, db, Recorder::default())
}
