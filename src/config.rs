use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::{
    error::{CogError, Result},
    host::{IncomingMessage, PrefixProvider},
};

pub const CONFIG_PATH: &str = "config/reywen.toml";

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Conf {
    pub auth: Auth,
    #[serde(default)]
    pub store: StoreConf,
    #[serde(default)]
    pub prefixes: PrefixConf,
    // keyed by server id
    #[serde(default)]
    pub servers: HashMap<String, ServerConf>,
    #[serde(default)]
    pub policy: PolicyConf,
    #[serde(default)]
    pub plugins: Plugins,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Auth {
    pub token: String,
    pub bot_id: String,
    #[serde(default)]
    pub owner: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StoreConf {
    pub data_dir: PathBuf,
}

impl Default for StoreConf {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PrefixConf {
    pub default: IndexSet<String>,
}

impl Default for PrefixConf {
    fn default() -> Self {
        Self {
            default: IndexSet::from([String::from("!")]),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ServerConf {
    #[serde(default)]
    pub name: String,
    // overrides the default prefixes when set
    #[serde(default)]
    pub prefixes: Option<IndexSet<String>>,
    // channel id -> channel name
    #[serde(default)]
    pub channels: HashMap<String, String>,
    #[serde(default)]
    pub managers: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct PolicyConf {
    #[serde(default)]
    pub whitelist: Vec<String>,
    #[serde(default)]
    pub blacklist: Vec<String>,
    #[serde(default)]
    pub managers: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Plugins {
    #[serde(default)]
    pub alias: PluginConf,
    #[serde(default)]
    pub customcom: PluginConf,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PluginConf {
    pub enabled: bool,
}

impl Default for PluginConf {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Conf {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| CogError::Config(format!("failed to read {}: {e}", path.display())))?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| CogError::Config(e.to_string()))
    }

    pub fn alias_path(&self) -> PathBuf {
        self.store.data_dir.join("alias").join("aliases.json")
    }

    pub fn customcom_path(&self) -> PathBuf {
        self.store.data_dir.join("customcom").join("commands.json")
    }

    /// Finds the server a channel belongs to; unmapped channels are private.
    pub fn server_of(&self, channel_id: &str) -> Option<(&str, &ServerConf)> {
        self.servers
            .iter()
            .find(|(_, server)| server.channels.contains_key(channel_id))
            .map(|(id, server)| (id.as_str(), server))
    }

    // true: access granted
    pub fn sender_allowed(&self, message: &IncomingMessage) -> bool {
        let author = &message.author.id;
        if *author == self.auth.bot_id {
            return false;
        }
        if self.is_owner(author) {
            return true;
        }
        if self.policy.blacklist.contains(author) {
            return false;
        }
        self.policy.whitelist.is_empty() || self.policy.whitelist.contains(author)
    }

    pub fn manager(&self, message: &IncomingMessage) -> bool {
        let author = &message.author.id;
        if self.is_owner(author) || self.policy.managers.contains(author) {
            return true;
        }
        message
            .scope()
            .and_then(|scope| self.servers.get(scope))
            .is_some_and(|server| server.managers.contains(author))
    }

    fn is_owner(&self, author: &str) -> bool {
        self.auth.owner.as_deref() == Some(author)
    }
}

impl PrefixProvider for Conf {
    fn prefixes(&self, scope: &str) -> Vec<String> {
        self.servers
            .get(scope)
            .and_then(|server| server.prefixes.as_ref())
            .unwrap_or(&self.prefixes.default)
            .iter()
            .cloned()
            .collect()
    }
}
