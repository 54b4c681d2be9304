use serde::{Deserialize, Serialize};
use std::fmt;
use chrono::NaiveDate;

/// Maximum number of ingredient suggestions shown under a meal row
pub const MAX_SUGGESTIONS: usize = 5;

/// Minimum query length (in characters, after trimming) before the catalog is searched
pub const MIN_SEARCH_CHARS: usize = 2;

/// A single food item inside an entry, as sent to the entries API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealRow {
    pub name: String,
    /// Parsed amount; NaN when the input was not numeric
    pub amount: f64,
    pub unit: String,
}

impl MealRow {
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount,
            unit: unit.into(),
        }
    }

    /// A row is complete when it has a name, a positive numeric amount and a unit
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && self.amount.is_finite()
            && self.amount > 0.0
            && !self.unit.trim().is_empty()
    }
}

/// One match returned by the ingredient catalog search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientSuggestion {
    pub id: i64,
    pub name: String,
}

/// Response of `GET /api/entries/ingredients/search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientSearchResponse {
    #[serde(default)]
    pub results: Vec<IngredientSuggestion>,
}

/// Response of `GET /api/entries/ingredients/{id}/information`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientInformation {
    /// Missing when the catalog has no unit data for the ingredient
    #[serde(rename = "possibleUnits", default)]
    pub possible_units: Option<Vec<String>>,
}

/// Workout choice offered by `GET /api/entries/workouts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutOption {
    pub value: String,
    pub label: String,
}

/// Request body for `POST /api/entries`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEntryRequest {
    pub meals: Vec<MealRow>,
    pub workout: String,
    /// ISO date (YYYY-MM-DD)
    pub date: String,
    /// Time of day (HH:MM)
    pub time: String,
}

/// Request body for `PUT /api/entries/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateEntryRequest {
    pub meals: Vec<MealRow>,
    pub workout: String,
    pub time: String,
}

/// A meal as stored by the backend, with its computed calories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryMeal {
    pub name: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub calories: Option<f64>,
}

impl EntryMeal {
    pub fn to_meal_row(&self) -> MealRow {
        MealRow::new(self.name.clone(), self.amount, self.unit.clone())
    }
}

/// Entry record returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "_id")]
    pub id: String,
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub meals: Vec<EntryMeal>,
    #[serde(default)]
    pub workout: String,
    #[serde(default)]
    pub calories: Option<f64>,
}

/// Error body the backend sends with failed writes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Placeholder shown for an empty coaching tip
pub const NO_TIP: &str = "No feedback";

/// Coaching tips grouped by topic; each may be missing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FeedbackTips {
    #[serde(default)]
    pub nutrition: Option<String>,
    #[serde(default)]
    pub exercise: Option<String>,
    #[serde(default)]
    pub general: Option<String>,
}

impl FeedbackTips {
    fn or_placeholder(tip: &Option<String>) -> &str {
        match tip.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => text,
            _ => NO_TIP,
        }
    }

    pub fn nutrition_text(&self) -> &str {
        Self::or_placeholder(&self.nutrition)
    }

    pub fn exercise_text(&self) -> &str {
        Self::or_placeholder(&self.exercise)
    }

    pub fn general_text(&self) -> &str {
        Self::or_placeholder(&self.general)
    }
}

/// Coach feedback addressed to one trainee, from
/// `GET /api/coach/feedback/by-trainee`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraineeFeedback {
    #[serde(rename = "_id")]
    pub id: String,
    /// RFC 3339 timestamp the coach wrote the feedback at
    #[serde(default)]
    pub datetime: String,
    #[serde(default)]
    pub tips: FeedbackTips,
    #[serde(rename = "readByTrainee", default)]
    pub read_by_trainee: bool,
}

/// Form field a validation error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryField {
    Meals,
    Workout,
    Date,
    Time,
}

/// Specific validation errors for entry forms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EntryValidationError {
    /// One aggregate error for the whole meal section
    MealsIncomplete,
    MissingWorkout,
    MissingDate,
    DateNotToday,
    MissingTime,
}

impl EntryValidationError {
    pub fn field(&self) -> EntryField {
        match self {
            EntryValidationError::MealsIncomplete => EntryField::Meals,
            EntryValidationError::MissingWorkout => EntryField::Workout,
            EntryValidationError::MissingDate | EntryValidationError::DateNotToday => EntryField::Date,
            EntryValidationError::MissingTime => EntryField::Time,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            EntryValidationError::MealsIncomplete => "Please complete all meal fields (name, amount, unit).",
            EntryValidationError::MissingWorkout => "Please select a workout.",
            EntryValidationError::MissingDate => "Date is required.",
            EntryValidationError::DateNotToday => "Date must be today.",
            EntryValidationError::MissingTime => "Time is required.",
        }
    }
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for EntryValidationError {}

/// Validation result for entry forms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EntryFormValidation {
    pub is_valid: bool,
    pub errors: Vec<EntryValidationError>,
}

impl EntryFormValidation {
    fn from_errors(errors: Vec<EntryValidationError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Message to show next to the given field, if any
    pub fn message_for(&self, field: EntryField) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|error| error.field() == field)
            .map(EntryValidationError::message)
    }
}

/// Checks a serialized meal list: non-empty and every row complete
pub fn validate_meals(rows: &[MealRow]) -> bool {
    !rows.is_empty() && rows.iter().all(MealRow::is_complete)
}

/// Everything the add-entry form collects before it posts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryDraft {
    pub meals: Vec<MealRow>,
    pub workout: String,
    pub date: String,
    pub time: String,
}

impl EntryDraft {
    /// Validates the draft; `today` is the date an entry may be logged for
    pub fn validate(&self, today: NaiveDate) -> EntryFormValidation {
        let mut errors = Vec::new();

        if !validate_meals(&self.meals) {
            errors.push(EntryValidationError::MealsIncomplete);
        }
        if self.workout.trim().is_empty() {
            errors.push(EntryValidationError::MissingWorkout);
        }
        if self.date.trim().is_empty() {
            errors.push(EntryValidationError::MissingDate);
        } else if self.date.trim() != today.format("%Y-%m-%d").to_string() {
            errors.push(EntryValidationError::DateNotToday);
        }
        if self.time.trim().is_empty() {
            errors.push(EntryValidationError::MissingTime);
        }

        EntryFormValidation::from_errors(errors)
    }

    pub fn into_request(self) -> CreateEntryRequest {
        CreateEntryRequest {
            meals: self.meals,
            workout: self.workout.trim().to_string(),
            date: self.date.trim().to_string(),
            time: self.time,
        }
    }
}

/// Fields the edit dialog sends back for an existing entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryEditDraft {
    pub meals: Vec<MealRow>,
    pub workout: String,
    pub time: String,
}

impl EntryEditDraft {
    pub fn validate(&self) -> EntryFormValidation {
        let mut errors = Vec::new();

        if !validate_meals(&self.meals) {
            errors.push(EntryValidationError::MealsIncomplete);
        }
        if self.workout.trim().is_empty() {
            errors.push(EntryValidationError::MissingWorkout);
        }
        if self.time.trim().is_empty() {
            errors.push(EntryValidationError::MissingTime);
        }

        EntryFormValidation::from_errors(errors)
    }

    pub fn into_request(self) -> UpdateEntryRequest {
        UpdateEntryRequest {
            meals: self.meals,
            workout: self.workout.trim().to_string(),
            time: self.time,
        }
    }
}
