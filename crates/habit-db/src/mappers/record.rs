//! Check-in record entity <-> model mapper

use habit_core::entities::CheckinRecord;
use habit_core::value_objects::UserId;

use crate::models::RecordModel;

impl From<RecordModel> for CheckinRecord {
    fn from(model: RecordModel) -> Self {
        CheckinRecord {
            id: model.id,
            user_id: UserId::new(model.user_id),
            title: model.title,
            date: model.date,
            create_time: model.create_time,
        }
    }
}
