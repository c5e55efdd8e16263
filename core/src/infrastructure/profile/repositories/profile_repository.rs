use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait, Order, QueryOrder};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        profile::{entities::Profile, ports::ProfileRepository},
    },
    entity::profiles::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresProfileRepository {
    pub db: DatabaseConnection,
}

impl PostgresProfileRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ProfileRepository for PostgresProfileRepository {
    async fn insert(&self, profile: Profile) -> Result<Profile, CoreError> {
        let active_model = ActiveModel {
            id: Set(profile.id),
            name: Set(profile.name.clone()),
            email: Set(profile.email.clone()),
            phone: Set(profile.phone.clone()),
            majors: Set(serde_json::json!(profile.majors)),
            class_level: Set(profile.class_level.clone()),
            interests: Set(serde_json::json!(profile.interests)),
            personality_type: Set(profile.personality_type.clone()),
            humor_type: Set(profile.humor_type.clone()),
            conversation_type: Set(profile.conversation_type.clone()),
            planner_type: Set(profile.planner_type.clone()),
            hp_house: Set(profile.hp_house.clone()),
            match_preference: Set(profile.match_preference.clone()),
            housing_status: Set(profile.housing_status.clone()),
            roommate_gender_preference: Set(profile.roommate_gender_preference.clone()),
            cleanliness_level: Set(profile.cleanliness_level.clone()),
            housing_time_period: Set(profile.housing_time_period.clone()),
            housing_number: Set(profile.housing_number),
            meal_plan: Set(profile.meal_plan),
            guest_swipe: Set(profile.guest_swipe),
            dining_locations: Set(serde_json::json!(profile.dining_locations)),
            meal_times: Set(profile.meal_times.clone()),
            created_at: Set(profile.created_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to insert profile: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Profile::from(created))
    }

    async fn fetch_all(&self) -> Result<Vec<Profile>, CoreError> {
        let models = Entity::find()
            .order_by(Column::CreatedAt, Order::Desc)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch profiles: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(models.into_iter().map(Profile::from).collect())
    }
}
