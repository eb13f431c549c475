use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::error::{CogError, Result, StoreError};
use crate::host::{PrefixProvider, ScopeId};
use crate::trigger::{is_single_word, strip_prefix};

pub type Triggers = BTreeMap<String, String>;
pub type TriggerMap = BTreeMap<ScopeId, Triggers>;
pub type SharedTriggers = Arc<RwLock<TriggerMap>>;

/// Per-plugin storage rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerRules {
    /// Drop a leading command prefix from stored replacements.
    pub strip_prefixes: bool,
}

/// Outcome of [`TriggerStore::remove`]; none of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Removed,
    Missing,
    ScopeEmpty,
}

// memory only changes after the file has been written
#[derive(Debug, Clone)]
pub struct TriggerStore {
    path: PathBuf,
    rules: TriggerRules,
    triggers: SharedTriggers,
}

impl TriggerStore {
    /// Loads `path`, creating it (and its directory) when missing.
    ///
    /// A file that is not JSON at all is replaced by an empty document; a JSON
    /// file of the wrong layout is left alone and reported.
    pub async fn open(path: impl Into<PathBuf>, rules: TriggerRules) -> Result<Self> {
        let path = path.into();
        let triggers = match load_json(&path) {
            Ok(Some(triggers)) => triggers,
            Ok(None) => {
                info!(path = %path.display(), "creating empty trigger file");
                save_json(path.clone(), &TriggerMap::new()).await?;
                TriggerMap::new()
            }
            Err(error @ StoreError::InvalidJson { .. }) => {
                warn!(%error, "replacing unreadable trigger file");
                save_json(path.clone(), &TriggerMap::new()).await?;
                TriggerMap::new()
            }
            Err(error) => return Err(error.into()),
        };

        Ok(Self {
            path,
            rules,
            triggers: Arc::new(RwLock::new(triggers)),
        })
    }

    /// Stores a new trigger and returns the key it was stored under.
    pub async fn add(
        &self,
        scope: &str,
        trigger: &str,
        replacement: &str,
        prefixes: &[String],
        reserved: &[String],
    ) -> Result<String> {
        if !is_single_word(trigger) {
            return Err(CogError::MultiWord(trigger.to_string()));
        }
        let key = trigger.to_lowercase();
        if reserved.iter().any(|name| name.to_lowercase() == key) {
            return Err(CogError::ReservedName(key));
        }

        let mut triggers = self.triggers.write().await;
        if triggers
            .get(scope)
            .is_some_and(|scoped| scoped.contains_key(&key))
        {
            return Err(CogError::AlreadyExists(key));
        }

        let mut next = triggers.clone();
        next.entry(scope.to_string())
            .or_default()
            .insert(key.clone(), self.clean(replacement, prefixes));
        save_json(self.path.clone(), &next).await?;
        *triggers = next;

        info!(scope, trigger = %key, "trigger added");
        Ok(key)
    }

    pub async fn edit(
        &self,
        scope: &str,
        trigger: &str,
        replacement: &str,
        prefixes: &[String],
    ) -> Result<()> {
        let key = trigger.to_lowercase();
        let mut triggers = self.triggers.write().await;
        match triggers.get(scope) {
            None => return Err(CogError::ScopeEmpty),
            Some(scoped) if scoped.is_empty() => return Err(CogError::ScopeEmpty),
            Some(scoped) if !scoped.contains_key(&key) => return Err(CogError::NotFound(key)),
            Some(_) => {}
        }

        let mut next = triggers.clone();
        if let Some(scoped) = next.get_mut(scope) {
            scoped.insert(key.clone(), self.clean(replacement, prefixes));
        }
        save_json(self.path.clone(), &next).await?;
        *triggers = next;

        info!(scope, trigger = %key, "trigger edited");
        Ok(())
    }

    /// Deletes a trigger. Missing triggers are not an error and cause no write.
    pub async fn remove(&self, scope: &str, trigger: &str) -> Result<Removal> {
        let key = trigger.to_lowercase();
        let mut triggers = self.triggers.write().await;
        match triggers.get(scope) {
            None => return Ok(Removal::ScopeEmpty),
            Some(scoped) if !scoped.contains_key(&key) => return Ok(Removal::Missing),
            Some(_) => {}
        }

        let mut next = triggers.clone();
        if let Some(scoped) = next.get_mut(scope) {
            scoped.remove(&key);
        }
        save_json(self.path.clone(), &next).await?;
        *triggers = next;

        info!(scope, trigger = %key, "trigger removed");
        Ok(Removal::Removed)
    }

    /// Trigger names of a scope in lexicographic order.
    pub async fn list(&self, scope: &str) -> Result<Vec<String>> {
        match self.triggers.read().await.get(scope) {
            Some(scoped) if !scoped.is_empty() => Ok(scoped.keys().cloned().collect()),
            _ => Err(CogError::NoTriggers),
        }
    }

    pub async fn resolve(&self, scope: &str, trigger: &str) -> Option<String> {
        self.triggers
            .read()
            .await
            .get(scope)?
            .get(trigger)
            .cloned()
    }

    /// Exact lookup of `raw`, then of its lower-cased form.
    pub async fn resolve_loose(&self, scope: &str, raw: &str) -> Option<String> {
        let triggers = self.triggers.read().await;
        let scoped = triggers.get(scope)?;
        scoped
            .get(raw)
            .or_else(|| scoped.get(&raw.to_lowercase()))
            .cloned()
    }

    /// Repairs entries written by older versions and saves the result.
    ///
    /// Keys are lower-cased (an existing lower-case key wins a collision),
    /// multi-word keys are dropped and, when the rules ask for it, a leading
    /// prefix is stripped from replacements.
    pub async fn normalize<P: PrefixProvider + ?Sized>(&self, provider: &P) -> Result<()> {
        let mut triggers = self.triggers.write().await;
        let mut next = TriggerMap::new();

        for (scope, scoped) in triggers.iter() {
            let prefixes = provider.prefixes(scope);
            let mut cleaned = Triggers::new();
            // lower-case keys first so they win over their mixed-case twins
            let (lower, mixed): (Vec<_>, Vec<_>) = scoped
                .iter()
                .partition(|(name, _)| **name == name.to_lowercase());

            for (name, replacement) in lower.into_iter().chain(mixed) {
                if !is_single_word(name) {
                    warn!(scope = %scope, trigger = %name, "dropping multi-word trigger");
                    continue;
                }
                cleaned
                    .entry(name.to_lowercase())
                    .or_insert_with(|| self.clean(replacement, &prefixes));
            }
            next.insert(scope.clone(), cleaned);
        }

        save_json(self.path.clone(), &next).await?;
        debug!(path = %self.path.display(), "triggers normalized");
        *triggers = next;
        Ok(())
    }

    fn clean(&self, replacement: &str, prefixes: &[String]) -> String {
        if self.rules.strip_prefixes {
            strip_prefix(replacement, prefixes).to_string()
        } else {
            replacement.to_string()
        }
    }
}

/// `Ok(None)` when the file does not exist.
pub fn load_json(path: &Path) -> Result<Option<TriggerMap>, StoreError> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let value: serde_json::Value =
        serde_json::from_str(&raw).map_err(|source| StoreError::InvalidJson {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_value(value)
        .map(Some)
        .map_err(|source| StoreError::Shape {
            path: path.to_path_buf(),
            source,
        })
}

/// Writes `triggers` to a temp file beside `path` and renames it into place.
pub async fn save_json(path: PathBuf, triggers: &TriggerMap) -> Result<(), StoreError> {
    let bytes = serde_json::to_vec_pretty(triggers).map_err(StoreError::Serialize)?;
    tokio::task::spawn_blocking(move || write_atomic(&path, &bytes)).await?
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let io_err = |source: std::io::Error| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(io_err)?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(io_err)?;
    tmp.write_all(bytes).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|source| StoreError::Persist {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
