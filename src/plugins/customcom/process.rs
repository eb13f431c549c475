use super::{
    ADD, COMMANDS, CREATED, DELETE, DELETED, EDIT, EDITED, EMPTY, EXISTS, HELP, LIST, LIST_HEADER,
    MULTI_WORD, NOT_FOUND,
};
use crate::{
    common::{crash_condition, next_arg, paginate, MESSAGE_LIMIT},
    error::CogError,
    host::{Host, IncomingMessage},
    plugins::{failure, reply, NO_PERMISSION},
    store::Removal,
    trigger::{match_prefix, split_trigger},
    DBCustomCom,
};

pub async fn on_message<H: Host + ?Sized>(host: &H, db: &DBCustomCom, message: &IncomingMessage) {
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

    if !host.is_sender_allowed(message) {
        return;
    };

    if let Some((trigger, args)) = split_trigger(&message.content, prefix) {
        if COMMANDS.contains(&trigger.as_str()) {
            let content = command_fn(host, db, message, scope, prefix, &trigger, args).await;
            for page in content {
                reply(host, message, &page).await;
            }
            return;
        }
    }

    if let Some(content) = db.command_reply(scope, message, prefix).await {
        reply(host, message, &content).await;
    }
}

async fn command_fn<H: Host + ?Sized>(
    host: &H,
    db: &DBCustomCom,
    message: &IncomingMessage,
    scope: &str,
    prefix: &str,
    command: &str,
    args: &str,
) -> Vec<String> {
    if command == LIST {
        return match db.command_list(scope).await {
            Ok(names) => {
                let names: Vec<String> = names
                    .iter()
                    .map(|name| format!("{prefix}{name}"))
                    .collect();
                paginate(LIST_HEADER, &names, MESSAGE_LIMIT)
            }
            Err(CogError::NoTriggers) => vec![EMPTY.to_string()],
            Err(error) => vec![failure(error)],
        };
    }

    if !host.can_manage(message) {
        return vec![NO_PERMISSION.to_string()];
    }

    let Some((name, text)) = next_arg(args) else {
        return vec![HELP.to_string()];
    };
    let prefixes = host.prefixes(scope);

    let content = match command {
        ADD if !text.is_empty() => {
            let reserved = host.native_commands();
            match db.command_add(scope, name, text, &prefixes, &reserved).await {
                Ok(_) => CREATED.to_string(),
                Err(CogError::AlreadyExists(_) | CogError::ReservedName(_)) => EXISTS.to_string(),
                Err(CogError::MultiWord(_)) => MULTI_WORD.to_string(),
                Err(error) => failure(error),
            }
        }
        EDIT if !text.is_empty() => match db.command_edit(scope, name, text, &prefixes).await {
            Ok(()) => EDITED.to_string(),
            Err(CogError::NotFound(_)) => NOT_FOUND.to_string(),
            Err(CogError::ScopeEmpty) => EMPTY.to_string(),
            Err(error) => failure(error),
        },
        DELETE => match db.command_delete(scope, name).await {
            Ok(Removal::Removed) => DELETED.to_string(),
            Ok(Removal::Missing) => NOT_FOUND.to_string(),
            Ok(Removal::ScopeEmpty) => EMPTY.to_string(),
            Err(error) => failure(error),
        },
        _ => HELP.to_string(),
    };
    vec![content]
}
