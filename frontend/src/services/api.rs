use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{
    ApiErrorBody, CreateEntryRequest, Entry, IngredientInformation, IngredientSearchResponse,
    IngredientSuggestion, TraineeFeedback, UpdateEntryRequest, WorkoutOption,
};

use crate::config::AppConfig;
use crate::services::error::ApiError;
use crate::services::session::Session;

/// API client for the entries backend. Every request carries the session's
/// bearer token.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(config: &AppConfig, session: Session) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn ingredient_information_path(ingredient_id: i64) -> String {
        format!("/api/entries/ingredients/{}/information", ingredient_id)
    }

    fn entry_path(entry_id: &str) -> String {
        format!("/api/entries/{}", entry_id)
    }

    fn mark_read_path(feedback_id: &str) -> String {
        format!("/api/coach/feedback/{}/mark-read", feedback_id)
    }

    /// Search the ingredient catalog
    pub async fn search_ingredients(&self, query: &str) -> Result<Vec<IngredientSuggestion>, ApiError> {
        let url = self.endpoint("/api/entries/ingredients/search");

        match Request::get(&url)
            .header("Authorization", &self.session.authorization_header())
            .query([("query", query)])
            .send()
            .await
        {
            Ok(response) => {
                let data: IngredientSearchResponse = read_json(response).await?;
                Ok(data.results)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Units the catalog accepts for one ingredient
    pub async fn ingredient_units(&self, ingredient_id: i64) -> Result<Vec<String>, ApiError> {
        let url = self.endpoint(&Self::ingredient_information_path(ingredient_id));

        match Request::get(&url)
            .header("Authorization", &self.session.authorization_header())
            .send()
            .await
        {
            Ok(response) => {
                let data: IngredientInformation = read_json(response).await?;
                data.possible_units
                    .ok_or_else(|| ApiError::Decode("response has no possibleUnits".to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Workout choices for the entry forms
    pub async fn workouts(&self) -> Result<Vec<WorkoutOption>, ApiError> {
        let url = self.endpoint("/api/entries/workouts");

        match Request::get(&url)
            .header("Authorization", &self.session.authorization_header())
            .send()
            .await
        {
            Ok(response) => read_json(response).await,
            Err(e) => Err(e.into()),
        }
    }

    /// Entries logged by one trainee
    pub async fn list_entries(&self, trainee_id: &str) -> Result<Vec<Entry>, ApiError> {
        let url = self.endpoint("/api/entries");

        match Request::get(&url)
            .header("Authorization", &self.session.authorization_header())
            .query([("traineeId", trainee_id)])
            .send()
            .await
        {
            Ok(response) => read_json(response).await,
            Err(e) => Err(e.into()),
        }
    }

    pub async fn create_entry(&self, request: &CreateEntryRequest) -> Result<(), ApiError> {
        let url = self.endpoint("/api/entries");

        match Request::post(&url)
            .header("Authorization", &self.session.authorization_header())
            .json(request)?
            .send()
            .await
        {
            Ok(response) => expect_success(response).await,
            Err(e) => Err(e.into()),
        }
    }

    pub async fn update_entry(&self, entry_id: &str, request: &UpdateEntryRequest) -> Result<(), ApiError> {
        let url = self.endpoint(&Self::entry_path(entry_id));

        match Request::put(&url)
            .header("Authorization", &self.session.authorization_header())
            .json(request)?
            .send()
            .await
        {
            Ok(response) => expect_success(response).await,
            Err(e) => Err(e.into()),
        }
    }

    pub async fn delete_entry(&self, entry_id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&Self::entry_path(entry_id));

        match Request::delete(&url)
            .header("Authorization", &self.session.authorization_header())
            .send()
            .await
        {
            Ok(response) => expect_success(response).await,
            Err(e) => Err(e.into()),
        }
    }

    /// Coach feedback addressed to one trainee
    pub async fn trainee_feedback(&self, trainee_id: &str) -> Result<Vec<TraineeFeedback>, ApiError> {
        let url = self.endpoint("/api/coach/feedback/by-trainee");

        match Request::get(&url)
            .header("Authorization", &self.session.authorization_header())
            .query([("traineeId", trainee_id)])
            .send()
            .await
        {
            Ok(response) => read_json(response).await,
            Err(e) => Err(e.into()),
        }
    }

    pub async fn mark_feedback_read(&self, feedback_id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&Self::mark_read_path(feedback_id));

        match Request::patch(&url)
            .header("Authorization", &self.session.authorization_header())
            .send()
            .await
        {
            Ok(response) => expect_success(response).await,
            Err(e) => Err(e.into()),
        }
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    response.json::<T>().await.map_err(ApiError::from)
}

async fn expect_success(response: Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(error_from_response(response).await)
    }
}

async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    error_from_body(status, &text)
}

/// Prefer the backend's `{ error }` message, fall back to the raw body
fn error_from_body(status: u16, text: &str) -> ApiError {
    match serde_json::from_str::<ApiErrorBody>(text) {
        Ok(ApiErrorBody { error: Some(message) }) => ApiError::Rejected(message),
        _ => ApiError::Status {
            status,
            message: if text.trim().is_empty() {
                "Unknown error".to_string()
            } else {
                text.to_string()
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::feedback::{create_failure_message, update_failure_message};

    fn client() -> ApiClient {
        ApiClient::new(
            &AppConfig::with_base_url("http://localhost:3000/"),
            Session::new("abc.def.ghi", Some("dana".to_string())),
        )
    }

    #[test]
    fn test_endpoints_join_base_url() {
        let api = client();
        assert_eq!(
            api.endpoint("/api/entries/workouts"),
            "http://localhost:3000/api/entries/workouts"
        );
        assert_eq!(
            api.endpoint(&ApiClient::ingredient_information_path(1)),
            "http://localhost:3000/api/entries/ingredients/1/information"
        );
        assert_eq!(
            api.endpoint(&ApiClient::entry_path("65f0c0ffee")),
            "http://localhost:3000/api/entries/65f0c0ffee"
        );
    }

    #[test]
    fn test_feedback_endpoints() {
        let api = client();
        assert_eq!(
            api.endpoint(&ApiClient::mark_read_path("65f0c0ffee65f0c0ffee65f0")),
            "http://localhost:3000/api/coach/feedback/65f0c0ffee65f0c0ffee65f0/mark-read"
        );
    }

    #[test]
    fn test_error_body_with_message_is_rejection() {
        let error = error_from_body(400, r#"{"error":"Workout is not allowed"}"#);
        assert_eq!(error, ApiError::Rejected("Workout is not allowed".to_string()));
        assert_eq!(create_failure_message(&error), "Failed to save entry: Workout is not allowed");
    }

    #[test]
    fn test_error_body_without_message_keeps_raw_text() {
        let error = error_from_body(500, "{}");
        assert_eq!(error, ApiError::Status { status: 500, message: "{}".to_string() });
        assert_eq!(create_failure_message(&error), "Failed to save entry: Unknown error");
    }

    #[test]
    fn test_empty_error_body_is_unknown_error() {
        let error = error_from_body(502, "");
        assert_eq!(error, ApiError::Status { status: 502, message: "Unknown error".to_string() });
        assert_eq!(update_failure_message(&error), "Failed to update entry.");
    }

    #[test]
    fn test_client_keeps_session() {
        let api = client();
        assert_eq!(api.session().username(), Some("dana"));
    }
}
