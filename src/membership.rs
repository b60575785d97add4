use futures::future;
use teloxide::{prelude::*, types::ChatMemberStatus, ApiError, RequestError};

use crate::config::GateConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    Allowed,
    NotAllowed,
}

/// Computed fresh on every call; a transport failure counts as not joined.
pub async fn check_membership(bot: &Bot, gate: &GateConfig, user_id: UserId) -> Membership {
    let lookups = future::try_join(
        bot.get_chat_member(gate.channel_id, user_id).send(),
        bot.get_chat_member(gate.group_id, user_id).send(),
    );

    match lookups.await {
        Ok((channel, group)) => {
            if status_allowed(&channel.status()) && status_allowed(&group.status()) {
                Membership::Allowed
            } else {
                log::debug!("{} has not joined both gated chats", user_id);
                Membership::NotAllowed
            }
        }
        Err(RequestError::Api(ApiError::UserNotFound)) => {
            log::debug!("{} is unknown to the gated chats", user_id);
            Membership::NotAllowed
        }
        Err(e) => {
            log::warn!("membership lookup for {} failed: {}", user_id, e);
            Membership::NotAllowed
        }
    }
}

fn status_allowed(status: &ChatMemberStatus) -> bool {
    matches!(
        status,
        ChatMemberStatus::Owner | ChatMemberStatus::Administrator | ChatMemberStatus::Member
    )
}

#[cfg(test)]
mod membership_tests {
    use super::*;

    #[test]
    fn allowed_statuses_test() {
        assert!(status_allowed(&ChatMemberStatus::Owner));
        assert!(status_allowed(&ChatMemberStatus::Administrator));
        assert!(status_allowed(&ChatMemberStatus::Member));
    }

    #[test]
    fn excluded_statuses_test() {
        assert!(!status_allowed(&ChatMemberStatus::Restricted));
        assert!(!status_allowed(&ChatMemberStatus::Left));
        assert!(!status_allowed(&ChatMemberStatus::Banned));
    }
}
