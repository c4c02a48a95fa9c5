//! User entity <-> model mapper

use habit_core::entities::User;
use habit_core::value_objects::UserId;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::new(model.id),
            username: model.username,
            nickname: model.nickname,
            email: model.email,
            avatar_url: model.avatar_url,
            phone: model.phone,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
