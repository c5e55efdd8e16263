use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub majors: Json,
    pub class_level: String,
    pub interests: Json,
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
    pub dining_locations: Json,
    pub meal_times: Json,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
