use std::sync::Arc;

use teloxide::prelude::*;

use super::gate::{NOT_JOINED_ALERT, VERIFIED_TEXT, VERIFY_JOIN_CALLBACK};
use crate::{
    config::Config,
    membership::{check_membership, Membership},
};

pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    config: Arc<Config>,
) -> ResponseResult<()> {
    if q.data.as_deref() != Some(VERIFY_JOIN_CALLBACK) {
        // Answer anyway so the client-side spinner clears.
        bot.answer_callback_query(q.id.clone()).await?;
        return Ok(());
    }

    log::debug!("got verify_join callback from {}", q.from.id);

    match check_membership(&bot, &config.gate, q.from.id).await {
        Membership::Allowed => {
            if let Some(message) = &q.message {
                bot.edit_message_text(message.chat().id, message.id(), VERIFIED_TEXT)
                    .await?;
            }
            bot.answer_callback_query(q.id.clone()).await.and(Ok(()))
        }
        Membership::NotAllowed => bot
            .answer_callback_query(q.id.clone())
            .text(NOT_JOINED_ALERT)
            .show_alert(true)
            .await
            .and(Ok(())),
    }
}
