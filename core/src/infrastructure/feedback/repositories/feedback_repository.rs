use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait, Order, QueryOrder};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        feedback::{entities::Feedback, ports::FeedbackRepository},
    },
    entity::feedback::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresFeedbackRepository {
    pub db: DatabaseConnection,
}

impl PostgresFeedbackRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl FeedbackRepository for PostgresFeedbackRepository {
    async fn insert(&self, feedback: Feedback) -> Result<Feedback, CoreError> {
        let active_model = ActiveModel {
            id: Set(feedback.id),
            text: Set(feedback.text.clone()),
            created_at: Set(feedback.created_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to insert feedback: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Feedback::from(created))
    }

    async fn fetch_all(&self) -> Result<Vec<Feedback>, CoreError> {
        let models = Entity::find()
            .order_by(Column::CreatedAt, Order::Desc)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch feedback: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(models.into_iter().map(Feedback::from).collect())
    }
}
