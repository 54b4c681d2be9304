pub mod add_entry_form;
pub mod meal_row;
pub mod meal_row_list;
pub mod workout_select;

pub use add_entry_form::AddEntryForm;
pub use meal_row_list::MealRowList;
pub use workout_select::WorkoutSelect;
