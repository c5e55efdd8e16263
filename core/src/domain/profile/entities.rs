use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// One student's sign-up record. Immutable once inserted: the dashboard
/// never writes profile fields back, and deleting a profile there is local
/// to the view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub majors: Vec<String>,
    pub class_level: String, // 'FRESHMAN' | 'SOPHOMORE' | 'JUNIOR' | 'SENIOR' | 'GRAD'
    pub interests: Vec<String>,
    pub personality_type: Option<String>, // 'INTROVERT' | 'EXTROVERT' | 'AMBIVERT'
    pub humor_type: Option<String>,
    pub conversation_type: Option<String>,
    pub planner_type: Option<String>,
    pub hp_house: Option<String>,
    pub match_preference: Option<String>,
    pub housing_status: Option<String>,
    pub roommate_gender_preference: Option<String>,
    pub cleanliness_level: Option<String>,
    pub housing_time_period: Option<String>,
    pub housing_number: Option<i32>,
    pub meal_plan: bool,
    pub guest_swipe: bool, // meaningful only when meal_plan is true
    pub dining_locations: Vec<String>,
    /// Weekly availability, `{ day: { meal: [slot label, ...] } }`. Kept as
    /// raw JSON: rows predating the current shape must still load, so the
    /// aggregation parses per profile and skips what it cannot read.
    pub meal_times: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ProfileConfig {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub majors: Vec<String>,
    pub class_level: String,
    pub interests: Vec<String>,
    pub personality_type: Option<String>,
    pub humor_type: Option<String>,
    pub conversation_type: Option<String>,
    pub planner_type: Option<String>,
    pub hp_house: Option<String>,
    pub match_preference: Option<String>,
    pub housing_status: Option<String>,
    pub roommate_gender_preference: Option<String>,
    pub cleanliness_level: Option<String>,
    pub housing_time_period: Option<String>,
    pub housing_number: Option<i32>,
    pub meal_plan: bool,
    pub guest_swipe: bool,
    pub dining_locations: Vec<String>,
    pub meal_times: serde_json::Value,
}

impl Profile {
    pub fn new(config: ProfileConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name: config.name,
            email: config.email,
            phone: config.phone,
            majors: config.majors,
            class_level: config.class_level,
            interests: config.interests,
            personality_type: config.personality_type,
            humor_type: config.humor_type,
            conversation_type: config.conversation_type,
            planner_type: config.planner_type,
            hp_house: config.hp_house,
            match_preference: config.match_preference,
            housing_status: config.housing_status,
            roommate_gender_preference: config.roommate_gender_preference,
            cleanliness_level: config.cleanliness_level,
            housing_time_period: config.housing_time_period,
            housing_number: config.housing_number,
            meal_plan: config.meal_plan,
            guest_swipe: config.guest_swipe,
            dining_locations: config.dining_locations,
            meal_times: config.meal_times,
            created_at: now,
        }
    }
}
