use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::host::{Author, Channel, IncomingMessage, Server};

/// Attributes starting with this character are never looked up.
pub const PRIVATE_MARKER: char = '_';

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([^}]+)\}").expect("token pattern"));

// message, author, channel and server are the only objects a template can reach
pub trait TemplateObject {
    fn render(&self) -> String;
    fn attribute(&self, name: &str) -> Option<String>;
}

impl TemplateObject for IncomingMessage {
    fn render(&self) -> String {
        self.content.clone()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        match name {
            "id" => Some(self.id.clone()),
            "content" => Some(self.content.clone()),
            _ => None,
        }
    }
}

impl TemplateObject for Author {
    fn render(&self) -> String {
        self.name.clone()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        match name {
            "id" => Some(self.id.clone()),
            "name" => Some(self.name.clone()),
            "display_name" => Some(self.nickname.clone().unwrap_or_else(|| self.name.clone())),
            "mention" => Some(format!("<@{}>", self.id)),
            _ => None,
        }
    }
}

impl TemplateObject for Channel {
    fn render(&self) -> String {
        self.name.clone()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        match name {
            "id" => Some(self.id.clone()),
            "name" => Some(self.name.clone()),
            "mention" => Some(format!("<#{}>", self.id)),
            _ => None,
        }
    }
}

impl TemplateObject for Server {
    fn render(&self) -> String {
        self.name.clone()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        match name {
            "id" => Some(self.id.clone()),
            "name" => Some(self.name.clone()),
            _ => None,
        }
    }
}

/// The allow-listed objects for one message.
pub struct TemplateContext<'a> {
    message: &'a IncomingMessage,
}

impl<'a> TemplateContext<'a> {
    pub fn new(message: &'a IncomingMessage) -> Self {
        Self { message }
    }

    fn object(&self, key: &str) -> Option<&'a dyn TemplateObject> {
        match key {
            "message" => Some(self.message),
            "author" => Some(&self.message.author),
            "channel" => Some(&self.message.channel),
            "server" => self
                .message
                .server
                .as_ref()
                .map(|server| server as &dyn TemplateObject),
            _ => None,
        }
    }

    fn lookup(&self, body: &str) -> Option<String> {
        if let Some(object) = self.object(body) {
            return Some(object.render());
        }
        let (key, attribute) = body.split_once('.')?;
        if attribute.contains('.') || attribute.starts_with(PRIVATE_MARKER) {
            return None;
        }
        self.object(key)?.attribute(attribute)
    }
}

/// Replaces every known token in `template`. Substituted text is not scanned again.
pub fn expand(template: &str, context: &TemplateContext) -> String {
    TOKEN
        .replace_all(template, |caps: &Captures| {
            context
                .lookup(&caps[1])
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
