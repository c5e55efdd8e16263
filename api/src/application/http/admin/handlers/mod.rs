pub mod delete_profile;
pub mod export_csv;
pub mod get_feedback;
pub mod get_matching_groups;
pub mod get_meal_times;
pub mod get_profiles;
pub mod mark_reviewed;
pub mod reset_matching_groups;
pub mod select_sort;
pub mod sync;
pub mod update_matching_group;
pub mod update_view;
