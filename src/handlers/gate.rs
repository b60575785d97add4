use teloxide::{
    prelude::*,
    types::{InlineKeyboardButton, InlineKeyboardMarkup, LinkPreviewOptions, ParseMode},
};

use crate::config::GateConfig;

pub const VERIFY_JOIN_CALLBACK: &str = "verify_join";

pub const VERIFIED_TEXT: &str =
    "✅ You are verified! Send me a song name, and I'll fetch the lyrics for you!";

pub const NOT_JOINED_ALERT: &str = "❌ You haven't joined both the channel and group yet!";

/// Join links plus the re-check button; the start flow and the lyrics flow
/// send the same message.
pub async fn send_gate_message(
    bot: &Bot,
    chat_id: ChatId,
    gate: &GateConfig,
) -> ResponseResult<()> {
    bot.send_message(chat_id, gate_text(gate))
        .parse_mode(ParseMode::Html)
        .link_preview_options(disabled_link_preview())
        .reply_markup(join_keyboard(gate))
        .await
        .and(Ok(()))
}

fn gate_text(gate: &GateConfig) -> String {
    format!(
        "🔒 <b>To use this bot, you must join our official channel and group.</b>\n\n\
         📢 <b>Join the Channel:</b> <a href=\"{}\">Click Here</a>\n\
         💬 <b>Join the Group:</b> <a href=\"{}\">Click Here</a>\n\n\
         After joining, tap <b>'I've Joined'</b> below.",
        gate.channel_link, gate.group_link
    )
}

fn join_keyboard(gate: &GateConfig) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new([
        vec![InlineKeyboardButton::url(
            "📢 Join Channel",
            gate.channel_link.clone(),
        )],
        vec![InlineKeyboardButton::url(
            "💬 Join Group",
            gate.group_link.clone(),
        )],
        vec![InlineKeyboardButton::callback(
            "✅ I've Joined",
            VERIFY_JOIN_CALLBACK,
        )],
    ])
}

fn disabled_link_preview() -> LinkPreviewOptions {
    LinkPreviewOptions {
        is_disabled: true,
        url: None,
        prefer_small_media: false,
        prefer_large_media: false,
        show_above_text: false,
    }
}
