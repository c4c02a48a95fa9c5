//! Check-in task entity <-> model mapper

use habit_core::entities::CheckinTask;
use habit_core::value_objects::UserId;

use crate::models::TaskModel;

impl From<TaskModel> for CheckinTask {
    fn from(model: TaskModel) -> Self {
        CheckinTask {
            id: model.id,
            user_id: UserId::new(model.user_id),
            title: model.title,
            created_at: model.created_at,
        }
    }
}
