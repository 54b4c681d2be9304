pub mod use_entries;
pub mod use_feedback;
pub mod use_meal_rows;
pub mod use_workouts;
