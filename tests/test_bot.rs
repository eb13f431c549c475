mod common;

use common::{bot, conf, message, MANAGER};
use reywen_cogs::{
    bot::Bot,
    host::{CommandHost, PolicyGate},
    plugins::{alias, customcom},
    DB,
};

#[tokio::test]
async fn alias_runs_a_custom_command() {
    let dir = tempfile::tempdir().unwrap();
    let bot = bot(&dir).await;

    bot.handle(message(MANAGER, "!addcom greet Hello {author}!")).await;
    bot.handle(message(MANAGER, "!alias add hi !greet")).await;
    bot.handle(message("alice", "!hi")).await;

    assert_eq!(
        bot.responder().contents(),
        vec![customcom::CREATED.to_string(), alias::added("hi"), "Hello Alice!".to_string()]
    );
    assert!(bot
        .responder()
        .sent
        .lock()
        .unwrap()
        .iter()
        .all(|(channel, _)| channel == "c1"));
}

#[tokio::test]
async fn alias_cycles_stop() {
    let dir = tempfile::tempdir().unwrap();
    let bot = bot(&dir).await;

    bot.handle(message(MANAGER, "!alias add ping pong")).await;
    bot.handle(message(MANAGER, "!alias add pong ping")).await;
    bot.handle(message("alice", "!ping")).await;

    assert_eq!(bot.responder().contents().len(), 2);
}

#[tokio::test]
async fn help_topics() {
    let dir = tempfile::tempdir().unwrap();
    let bot = bot(&dir).await;

    bot.handle(message("alice", "!help alias")).await;
    bot.handle(message("alice", "!help addcom")).await;
    bot.handle(message("alice", "!help nothing")).await;
    bot.handle(message("alice", "!help")).await;

    let contents = bot.responder().contents();
    assert_eq!(contents[0], alias::HELP);
    assert_eq!(contents[1], customcom::HELP);
    assert_eq!(contents[2], "**No command called 'nothing' found**");
    assert!(contents[3].contains("`!customcommands`"));
}

#[tokio::test]
async fn alias_help_goes_through_the_bot() {
    let dir = tempfile::tempdir().unwrap();
    let bot = bot(&dir).await;

    bot.handle(message(MANAGER, "!alias add new !addcom")).await;
    bot.handle(message("alice", "!alias help new")).await;

    assert_eq!(bot.responder().contents()[1], customcom::HELP);
}

#[tokio::test]
async fn plugin_commands_are_reserved() {
    let dir = tempfile::tempdir().unwrap();
    let bot = bot(&dir).await;

    let native = bot.native_commands();
    assert!(native.contains(&"alias".to_string()));
    assert!(native.contains(&"delcom".to_string()));

    bot.handle(message(MANAGER, "!alias add delcom ping")).await;
    assert_eq!(bot.responder().contents(), vec![alias::bot_command("delcom")]);
}

#[tokio::test]
async fn disabled_plugins_are_silent() {
    let dir = tempfile::tempdir().unwrap();
    let mut conf = conf(&dir);
    conf.plugins.customcom.enabled = false;
    let db = DB::init(&conf).await.unwrap();
    let bot = Bot::new(conf, db, common::Recorder::default());

    bot.handle(message(MANAGER, "!addcom greet hi")).await;
    assert!(bot.responder().contents().is_empty());
    assert!(!bot.native_commands().contains(&"addcom".to_string()));
}

#[tokio::test]
async fn triggers_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let bot = bot(&dir).await;
        bot.handle(message(MANAGER, "!addcom greet hi {author}")).await;
    }

    let bot = bot(&dir).await;
    bot.handle(message("alice", "!greet")).await;
    assert_eq!(bot.responder().contents(), vec!["hi Alice"]);
}

#[tokio::test]
async fn bot_ignores_itself() {
    let dir = tempfile::tempdir().unwrap();
    let bot = bot(&dir).await;

    assert!(!bot.is_sender_allowed(&message("bot", "!help")));
    bot.handle(message("bot", "!help")).await;
    assert!(bot.responder().contents().is_empty());
}
