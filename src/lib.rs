use crate::{
    config::Conf,
    error::Result,
    store::{TriggerRules, TriggerStore},
};

pub mod bot;
pub mod common;
pub mod config;
pub mod error;
pub mod host;
pub mod plugins;
pub mod revolt;
pub mod store;
pub mod template;
pub mod trigger;

#[derive(Debug, Clone)]
pub struct DB {
    pub alias: DBAlias,
    pub customcom: DBCustomCom,
}

#[derive(Debug, Clone)]
pub struct DBAlias(pub TriggerStore);
#[derive(Debug, Clone)]
pub struct DBCustomCom(pub TriggerStore);

impl DB {
    /// Opens both trigger files and repairs entries left by older versions.
    pub async fn init(conf: &Conf) -> Result<Self> {
        let alias = TriggerStore::open(
            conf.alias_path(),
            TriggerRules {
                strip_prefixes: true,
            },
        )
        .await?;
        let customcom = TriggerStore::open(
            conf.customcom_path(),
            TriggerRules {
                strip_prefixes: false,
            },
        )
        .await?;

        alias.normalize(conf).await?;
        customcom.normalize(conf).await?;

        Ok(Self {
            alias: DBAlias(alias),
            customcom: DBCustomCom(customcom),
        })
    }
}
