use std::sync::Arc;

use telegram_lyrics_bot::*;

use config::Config;
use genius::GeniusClient;
use handlers::*;
use teloxide::prelude::*;

#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            log::error!("invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    let genius = Arc::new(GeniusClient::new(config.genius_api_token.clone()));

    let bot = Bot::from_env();

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(command_handler),
        )
        .branch(Update::filter_message().endpoint(message_handler))
        .branch(Update::filter_callback_query().endpoint(callback_handler));

    log::info!("Started");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![config, genius])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}
