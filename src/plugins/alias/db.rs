use crate::{
    error::Result,
    store::Removal,
    trigger::{split_trigger, strip_prefix},
    DBAlias,
};

impl DBAlias {
    pub async fn alias_add(
        &self,
        scope: &str,
        name: &str,
        command: &str,
        prefixes: &[String],
        reserved: &[String],
    ) -> Result<String> {
        self.0.add(scope, name, command, prefixes, reserved).await
    }

    pub async fn alias_delete(&self, scope: &str, name: &str) -> Result<Removal> {
        self.0.remove(scope, name).await
    }

    pub async fn alias_show(&self, scope: &str, name: &str) -> Option<String> {
        self.0.resolve(scope, &name.to_lowercase()).await
    }

    pub async fn alias_list(&self, scope: &str) -> Result<Vec<String>> {
        self.0.list(scope).await
    }

    /// Rewrites `text` when its trigger is an alias: `prefix + command + rest`.
    pub async fn alias_expand(&self, scope: &str, text: &str, prefix: &str) -> Option<String> {
        let (trigger, rest) = split_trigger(text, prefix)?;
        let command = self.0.resolve(scope, &trigger).await?;
        Some(format!("{prefix}{command}{rest}"))
    }

    /// The command an alias runs, without prefix, for `help` lookups.
    pub async fn alias_help_target(
        &self,
        scope: &str,
        name: &str,
        prefixes: &[String],
    ) -> Option<String> {
        let command = self.alias_show(scope, name).await?;
        let first = command.split(' ').next().unwrap_or_default();
        Some(strip_prefix(first, prefixes).to_string())
    }
}
