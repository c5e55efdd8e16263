use serde_json::Value;

use crate::{domain::profile::entities::Profile, entity::profiles};

impl From<&profiles::Model> for Profile {
    fn from(model: &profiles::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            email: model.email.clone(),
            phone: model.phone.clone(),
            majors: string_list(&model.majors),
            class_level: model.class_level.clone(),
            interests: string_list(&model.interests),
            personality_type: model.personality_type.clone(),
            humor_type: model.humor_type.clone(),
            conversation_type: model.conversation_type.clone(),
            planner_type: model.planner_type.clone(),
            hp_house: model.hp_house.clone(),
            match_preference: model.match_preference.clone(),
            housing_status: model.housing_status.clone(),
            roommate_gender_preference: model.roommate_gender_preference.clone(),
            cleanliness_level: model.cleanliness_level.clone(),
            housing_time_period: model.housing_time_period.clone(),
            housing_number: model.housing_number,
            meal_plan: model.meal_plan,
            guest_swipe: model.guest_swipe,
            dining_locations: string_list(&model.dining_locations),
            meal_times: model.meal_times.clone(),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<profiles::Model> for Profile {
    fn from(model: profiles::Model) -> Self {
        Self::from(&model)
    }
}

/// Lenient read of a JSON string list; non-string members are dropped.
fn string_list(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
