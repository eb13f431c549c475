use crate::{
    error::Result,
    host::IncomingMessage,
    store::Removal,
    template::{expand, TemplateContext},
    DBCustomCom,
};

impl DBCustomCom {
    pub async fn command_add(
        &self,
        scope: &str,
        name: &str,
        text: &str,
        prefixes: &[String],
        reserved: &[String],
    ) -> Result<String> {
        self.0.add(scope, name, text, prefixes, reserved).await
    }

    pub async fn command_edit(
        &self,
        scope: &str,
        name: &str,
        text: &str,
        prefixes: &[String],
    ) -> Result<()> {
        self.0.edit(scope, name, text, prefixes).await
    }

    pub async fn command_delete(&self, scope: &str, name: &str) -> Result<Removal> {
        self.0.remove(scope, name).await
    }

    pub async fn command_list(&self, scope: &str) -> Result<Vec<String>> {
        self.0.list(scope).await
    }

    /// The expanded reply for `message`, whose text after `prefix` names the command.
    pub async fn command_reply(
        &self,
        scope: &str,
        message: &IncomingMessage,
        prefix: &str,
    ) -> Option<String> {
        let raw = message.content.strip_prefix(prefix)?;
        let template = self.0.resolve_loose(scope, raw).await?;
        Some(expand(&template, &TemplateContext::new(message)))
    }
}
