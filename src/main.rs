// external packages
use futures_util::StreamExt;
use reywen::{client::Client, websocket::data::WebSocketEvent};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use reywen_cogs::{
    bot::Bot,
    config::{Conf, CONFIG_PATH},
    revolt::Revolt,
    DB,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let conf = match Conf::from_file(CONFIG_PATH) {
        Ok(conf) => conf,
        Err(error) => {
            error!(%error, "cannot start without {CONFIG_PATH}");
            return;
        }
    };

    let db = match DB::init(&conf).await {
        Ok(db) => db,
        Err(error) => {
            error!(%error, "failed to open trigger files");
            return;
        }
    };

    let client = match Client::from_token(&conf.auth.token, true) {
        Ok(client) => client,
        Err(error) => {
            error!("failed to build client: {error:?}");
            return;
        }
    };

    info!("booting...");
    let bot = Bot::new(conf, db, Revolt::new(client.clone()));

    // messages are handled one at a time, in the order they arrive
    loop {
        let (mut read, _) = client.websocket.dual_async().await;
        info!("websocket established");

        while let Some(event) = read.next().await {
            let WebSocketEvent::Message { message } = event else {
                continue;
            };
            if let Some(message) = bot.responder().incoming(&bot.conf, &message).await {
                bot.handle(message).await;
            }
        }
        warn!("websocket closed, reconnecting");
    }
}
