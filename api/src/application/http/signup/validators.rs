use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::server::api_entities::api_error::ApiError;

pub const CLASS_LEVELS: [&str; 5] = ["FRESHMAN", "SOPHOMORE", "JUNIOR", "SENIOR", "GRAD"];

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SubmitProfileRequest {
    #[validate(length(max = 100, message = "first_name must be at most 100 characters"))]
    pub first_name: String,
    #[validate(length(max = 100, message = "last_name must be at most 100 characters"))]
    pub last_name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    pub phone: Option<String>,
    pub majors: Vec<String>,
    pub class_level: String,
    #[serde(default)]
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
    #[serde(default)]
    pub meal_plan: bool,
    #[serde(default)]
    pub guest_swipe: bool,
    #[serde(default)]
    pub dining_locations: Vec<String>,
    /// `{ day: { meal: [slot label, ...] } }`
    #[serde(default)]
    pub meal_times: HashMap<String, HashMap<String, Vec<String>>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SubmitFeedbackRequest {
    #[validate(length(max = 5000, message = "text must be at most 5000 characters"))]
    pub text: String,
}

/// The sign-up form's step gates, checked in step order: identity first,
/// then academics. The first violation rejects the submission before any
/// store interaction.
pub fn validate_submission(
    request: &SubmitProfileRequest,
    email_domain: &str,
) -> Result<(), ApiError> {
    if !request
        .email
        .trim()
        .to_lowercase()
        .ends_with(&email_domain.to_lowercase())
    {
        return Err(ApiError::BadRequest(format!(
            "email must be a {} address",
            email_domain
        )));
    }

    if request.first_name.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "first_name must not be empty".to_string(),
        ));
    }

    if request.last_name.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "last_name must not be empty".to_string(),
        ));
    }

    if !CLASS_LEVELS.contains(&request.class_level.as_str()) {
        return Err(ApiError::BadRequest(format!(
            "class_level must be one of {}",
            CLASS_LEVELS.join(", ")
        )));
    }

    if !request.majors.iter().any(|major| !major.trim().is_empty()) {
        return Err(ApiError::BadRequest(
            "at least one major is required".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SubmitProfileRequest {
        SubmitProfileRequest {
            first_name: "Jo".to_string(),
            last_name: "Lee".to_string(),
            email: "jo@brandeis.edu".to_string(),
            phone: None,
            majors: vec!["CS".to_string()],
            class_level: "JUNIOR".to_string(),
            interests: Vec::new(),
            personality_type: None,
            humor_type: None,
            conversation_type: None,
            planner_type: None,
            hp_house: None,
            match_preference: None,
            housing_status: None,
            roommate_gender_preference: None,
            cleanliness_level: None,
            housing_time_period: None,
            housing_number: None,
            meal_plan: false,
            guest_swipe: false,
            dining_locations: Vec::new(),
            meal_times: HashMap::new(),
        }
    }

    #[test]
    fn rejects_non_institutional_email() {
        let mut bad = request();
        bad.email = "x@gmail.com".to_string();

        assert!(validate_submission(&bad, "@brandeis.edu").is_err());
    }

    #[test]
    fn accepts_institutional_email_with_names() {
        assert!(validate_submission(&request(), "@brandeis.edu").is_ok());
    }

    #[test]
    fn rejects_blank_names_after_trimming() {
        let mut bad = request();
        bad.first_name = "   ".to_string();

        assert!(validate_submission(&bad, "@brandeis.edu").is_err());
    }

    #[test]
    fn rejects_missing_class_level_or_majors() {
        let mut no_level = request();
        no_level.class_level = "".to_string();
        assert!(validate_submission(&no_level, "@brandeis.edu").is_err());

        let mut no_majors = request();
        no_majors.majors = vec!["  ".to_string()];
        assert!(validate_submission(&no_majors, "@brandeis.edu").is_err());
    }
}
