use std::sync::Arc;

use teloxide::prelude::*;

use super::gate::send_gate_message;
use crate::{
    config::Config,
    genius::{GeniusClient, LyricsResult},
    membership::{check_membership, Membership},
};

const SEARCHING_TEXT: &str = "🔍 Searching for lyrics...";

pub async fn message_handler(
    bot: Bot,
    msg: Message,
    config: Arc<Config>,
    genius: Arc<GeniusClient>,
) -> ResponseResult<()> {
    log::debug!("{}", serde_json::to_string_pretty(&msg).unwrap());

    // Lyrics queries are served in private chats only.
    if !msg.chat.is_private() {
        return Ok(());
    }

    let (Some(user), Some(text)) = (&msg.from, msg.text()) else {
        return Ok(());
    };
    // Commands are routed separately; unknown ones get no reply.
    if text.starts_with('/') {
        return Ok(());
    }

    match check_membership(&bot, &config.gate, user.id).await {
        Membership::NotAllowed => send_gate_message(&bot, msg.chat.id, &config.gate).await,
        Membership::Allowed => {
            bot.send_message(msg.chat.id, SEARCHING_TEXT).await?;

            let reply = lyrics_reply(genius.search(text).await);
            bot.send_message(msg.chat.id, reply).await.and(Ok(()))
        }
    }
}

fn lyrics_reply(result: LyricsResult) -> String {
    match result {
        LyricsResult::Found(url) => format!("🎵 Lyrics found! Click below:\n{}", url),
        LyricsResult::NotFound => "❌ Lyrics not found.".to_string(),
        LyricsResult::UpstreamError => "❌ Error: Unable to connect to Genius API.".to_string(),
    }
}
