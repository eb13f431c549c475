use tracing::{debug, warn};

use super::{
    added, bot_command, deleted, COMMAND, EMPTY, EXISTS, HELP, LIST_HEADER, MULTI_WORD, NOT_FOUND,
};
use crate::{
    common::{code_block, crash_condition, next_arg, next_word, paginate, MESSAGE_LIMIT},
    error::CogError,
    host::{Host, IncomingMessage, MAX_REDISPATCH_DEPTH},
    plugins::{failure, reply, NO_PERMISSION},
    trigger::{match_prefix, split_trigger},
    DBAlias,
};

pub async fn on_message<H: Host + ?Sized>(host: &H, db: &DBAlias, message: &IncomingMessage) {
    if crash_condition(message) {
        return;
    };
    let Some(scope) = message.scope() else {
        return;
    };

    let prefixes = host.prefixes(scope);
    let Some(prefix) = match_prefix(&message.content, &prefixes) else {
        return;
    };
    let Some((trigger, rest)) = split_trigger(&message.content, prefix) else {
        return;
    };

    if !host.is_sender_allowed(message) {
        return;
    };

    if trigger == COMMAND {
        alias_fn(host, db, message, scope, &prefixes, rest).await;
        return;
    }

    let Some(line) = db.alias_expand(scope, &message.content, prefix).await else {
        return;
    };

    if message.depth >= MAX_REDISPATCH_DEPTH {
        warn!(scope, %trigger, depth = message.depth, "alias expansion too deep, dropping");
        return;
    }

    debug!(scope, %trigger, %line, "alias expanded");
    if let Err(error) = host.redispatch(message.redirect(line)).await {
        warn!(%error, scope, %trigger, "alias redispatch failed");
    }
}

async fn alias_fn<H: Host + ?Sized>(
    host: &H,
    db: &DBAlias,
    message: &IncomingMessage,
    scope: &str,
    prefixes: &[String],
    args: &str,
) {
    let content = match next_word(args) {
        Some(("add", args)) => {
            if !host.can_manage(message) {
                NO_PERMISSION.to_string()
            } else {
                match next_arg(args) {
                    Some((name, command)) if !command.is_empty() => {
                        let reserved = host.native_commands();
                        match db.alias_add(scope, name, command, prefixes, &reserved).await {
                            Ok(name) => added(&name),
                            Err(CogError::MultiWord(_)) => MULTI_WORD.to_string(),
                            Err(CogError::AlreadyExists(_)) => EXISTS.to_string(),
                            Err(CogError::ReservedName(name)) => bot_command(&name),
                            Err(error) => failure(error),
                        }
                    }
                    _ => HELP.to_string(),
                }
            }
        }
        Some(("del", args)) => {
            if !host.can_manage(message) {
                NO_PERMISSION.to_string()
            } else {
                match next_arg(args) {
                    // reported as deleted whether or not it existed
                    Some((name, _)) => match db.alias_delete(scope, name).await {
                        Ok(_) => deleted(&name.to_lowercase()),
                        Err(error) => failure(error),
                    },
                    None => HELP.to_string(),
                }
            }
        }
        Some(("show", args)) => match next_arg(args) {
            Some((name, _)) => match db.alias_show(scope, name).await {
                Some(command) => code_block(&command),
                None => NOT_FOUND.to_string(),
            },
            None => HELP.to_string(),
        },
        Some(("help", args)) => {
            let Some((name, _)) = next_arg(args) else {
                reply(host, message, HELP).await;
                return;
            };
            match (
                db.alias_help_target(scope, name, prefixes).await,
                prefixes.first(),
            ) {
                (Some(target), Some(first)) => {
                    let line = format!("{first}help {target}");
                    if let Err(error) = host.redispatch(message.redirect(line)).await {
                        warn!(%error, scope, "alias help redispatch failed");
                    }
                    return;
                }
                _ => NOT_FOUND.to_string(),
            }
        }
        Some(("list", _)) => match db.alias_list(scope).await {
            Ok(names) => {
                for page in paginate(LIST_HEADER, &names, MESSAGE_LIMIT) {
                    reply(host, message, &page).await;
                }
                return;
            }
            Err(CogError::NoTriggers) => EMPTY.to_string(),
            Err(error) => failure(error),
        },
        _ => HELP.to_string(),
    };

    reply(host, message, &content).await;
}
