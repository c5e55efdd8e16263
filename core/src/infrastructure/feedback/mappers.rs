use crate::{domain::feedback::entities::Feedback, entity::feedback};

impl From<&feedback::Model> for Feedback {
    fn from(model: &feedback::Model) -> Self {
        Self {
            id: model.id,
            text: model.text.clone(),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<feedback::Model> for Feedback {
    fn from(model: feedback::Model) -> Self {
        Self::from(&model)
    }
}
