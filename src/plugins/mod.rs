use tracing::{error, warn};

use crate::{
    error::CogError,
    host::{CommandHost, IncomingMessage},
};

pub mod alias;
pub mod customcom;

// replies shared by every plugin
pub const NO_PERMISSION: &str = "**You are not allowed to manage this server's commands**";
pub const DB_ERROR: &str = "**Storage error, please contact an administrator**";

pub async fn reply<H: CommandHost + ?Sized>(host: &H, message: &IncomingMessage, text: &str) {
    if let Err(error) = host.send_reply(&message.channel.id, text).await {
        warn!(%error, channel = %message.channel.id, "failed to send reply");
    }
}

// storage failures are logged loudly; everything else becomes a plain reply
pub fn failure(error: CogError) -> String {
    match error {
        CogError::Persistence(_) => {
            error!(%error, "trigger store failure");
            DB_ERROR.to_string()
        }
        other => format!("**{other}**"),
    }
}
