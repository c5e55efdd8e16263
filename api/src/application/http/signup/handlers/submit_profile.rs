use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::{
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    signup::validators::{SubmitProfileRequest, validate_submission},
};
use tablemates_core::domain::{
    dashboard::StoreEvent,
    notification::{entities::EmailMessage, ports::Mailer},
    profile::{
        entities::{Profile, ProfileConfig},
        ports::ProfileRepository,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SubmitProfileResponse {
    pub id: uuid::Uuid,
    pub name: String,
    pub email: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Profile> for SubmitProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id,
            name: profile.name,
            email: profile.email,
            created_at: profile.created_at,
        }
    }
}

#[utoipa::path(
    post,
    path = "/signup/profiles",
    tag = "signup",
    summary = "Submit a sign-up profile",
    description = "Validates the collapsed multi-step form answers and inserts one profile row",
    request_body = SubmitProfileRequest,
    responses(
        (status = 201, body = SubmitProfileResponse, description = "Profile created"),
        (status = 400, description = "Validation failed; nothing was written")
    )
)]
pub async fn submit_profile(
    State(state): State<AppState>,
    Json(request): Json<SubmitProfileRequest>,
) -> Result<Response<SubmitProfileResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    validate_submission(&request, &state.args.signup.email_domain)?;

    let name = format!(
        "{} {}",
        request.first_name.trim(),
        request.last_name.trim()
    );
    let profile = Profile::new(ProfileConfig {
        name,
        email: request.email.trim().to_string(),
        phone: request.phone,
        majors: request.majors,
        class_level: request.class_level,
        interests: request.interests,
        personality_type: request.personality_type,
        humor_type: request.humor_type,
        conversation_type: request.conversation_type,
        planner_type: request.planner_type,
        hp_house: request.hp_house,
        match_preference: request.match_preference,
        housing_status: request.housing_status,
        roommate_gender_preference: request.roommate_gender_preference,
        cleanliness_level: request.cleanliness_level,
        housing_time_period: request.housing_time_period,
        housing_number: request.housing_number,
        meal_plan: request.meal_plan,
        guest_swipe: request.guest_swipe,
        dining_locations: request.dining_locations,
        meal_times: serde_json::json!(request.meal_times),
    });

    let created = state
        .profile_repository
        .insert(profile)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert profile: {}", e);
            ApiError::from(e)
        })?;

    // Best effort: the sign-up already succeeded, so a failed confirmation
    // email is logged and never surfaced.
    let mailer = state.mailer.clone();
    let confirmation = EmailMessage {
        to: created.email.clone(),
        subject: "You're signed up for Tablemates".to_string(),
        text: format!(
            "Hi {},\n\nThanks for signing up! We'll reach out once your meal matches are ready.",
            created.name
        ),
    };
    tokio::spawn(async move {
        if let Err(e) = mailer.send(confirmation).await {
            tracing::warn!("Failed to send confirmation email: {}", e);
        }
    });

    if state
        .events
        .send(StoreEvent::profile_inserted(created.clone()))
        .is_err()
    {
        tracing::warn!("Store event channel closed; dashboard will miss this insert");
    }

    Ok(Response::Created(SubmitProfileResponse::from(created)))
}
