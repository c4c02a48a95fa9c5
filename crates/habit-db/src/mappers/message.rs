//! Message entity <-> model mappers

use habit_core::entities::{InboxMessage, Message, MessageKind};
use habit_core::value_objects::UserId;

use crate::models::{InboxMessageModel, MessageModel};

impl From<MessageModel> for Message {
    fn from(model: MessageModel) -> Self {
        Message {
            id: model.id,
            sender_id: UserId::new(model.sender_id),
            receiver_id: UserId::new(model.receiver_id),
            kind: MessageKind::from_str_lossy(&model.kind),
            content: model.content,
            read: model.read,
            created_at: model.created_at,
        }
    }
}

impl From<InboxMessageModel> for InboxMessage {
    fn from(model: InboxMessageModel) -> Self {
        InboxMessage {
            message: Message {
                id: model.id,
                sender_id: UserId::new(model.sender_id),
                receiver_id: UserId::new(model.receiver_id),
                kind: MessageKind::from_str_lossy(&model.kind),
                content: model.content,
                read: model.read,
                created_at: model.created_at,
            },
            sender_username: model.sender_username,
            sender_nickname: model.sender_nickname,
            sender_avatar_url: model.sender_avatar_url,
        }
    }
}
