//! Intimacy score entity <-> model mapper

use habit_core::entities::IntimacyScore;
use habit_core::value_objects::UserId;

use crate::models::IntimacyScoreModel;

impl From<IntimacyScoreModel> for IntimacyScore {
    fn from(model: IntimacyScoreModel) -> Self {
        IntimacyScore {
            user_id: UserId::new(model.user_id),
            friend_id: UserId::new(model.friend_id),
            score: model.score,
            last_interaction: model.last_interaction,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
