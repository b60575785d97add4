use std::sync::Arc;

use teloxide::{prelude::*, utils::command::BotCommands};

use super::gate::{send_gate_message, VERIFIED_TEXT};
use crate::{
    config::Config,
    membership::{check_membership, Membership},
};

#[derive(BotCommands, Clone)]
#[command(
    rename_rule = "lowercase",
    description = "These commands are supported:"
)]
pub enum Command {
    #[command(description = "Check your membership and unlock lyrics search.")]
    Start,
    #[command(description = "Display this text.")]
    Help,
}

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    config: Arc<Config>,
) -> ResponseResult<()> {
    match cmd {
        Command::Start => start_handler(bot, msg, config).await,
        Command::Help => help_handler(bot, msg).await,
    }
}

async fn start_handler(bot: Bot, msg: Message, config: Arc<Config>) -> ResponseResult<()> {
    log::debug!("got command start");
    let Some(user) = &msg.from else {
        return Ok(());
    };

    match check_membership(&bot, &config.gate, user.id).await {
        Membership::Allowed => bot
            .send_message(msg.chat.id, VERIFIED_TEXT)
            .await
            .and(Ok(())),
        Membership::NotAllowed => send_gate_message(&bot, msg.chat.id, &config.gate).await,
    }
}

async fn help_handler(bot: Bot, msg: Message) -> ResponseResult<()> {
    log::debug!("got command help");
    bot.send_message(msg.chat.id, Command::descriptions().to_string())
        .await
        .and(Ok(()))
}
