use shared::WorkoutOption;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct WorkoutsState {
    pub options: Vec<WorkoutOption>,
    pub loading: bool,
    /// The list could not be fetched
    pub failed: bool,
}

/// How a stored workout maps onto the loaded options
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSelection {
    pub selected: String,
    /// Present when the stored workout is not among the options
    pub custom_option: Option<String>,
}

/// Match a stored workout against option labels, ignoring case and
/// surrounding whitespace
pub fn match_workout(options: &[WorkoutOption], current: &str) -> WorkoutSelection {
    let wanted = current.trim().to_lowercase();
    if wanted.is_empty() {
        return WorkoutSelection {
            selected: String::new(),
            custom_option: None,
        };
    }

    match options
        .iter()
        .find(|option| option.label.trim().to_lowercase() == wanted)
    {
        Some(option) => WorkoutSelection {
            selected: option.label.clone(),
            custom_option: None,
        },
        None => WorkoutSelection {
            selected: current.to_string(),
            custom_option: Some(current.to_string()),
        },
    }
}

#[hook]
pub fn use_workouts(api_client: &ApiClient) -> WorkoutsState {
    let options = use_state(Vec::<WorkoutOption>::new);
    let loading = use_state(|| true);
    let failed = use_state(|| false);

    use_effect_with(api_client.clone(), {
        let options = options.clone();
        let loading = loading.clone();
        let failed = failed.clone();
        move |api_client| {
            let api_client = api_client.clone();
            spawn_local(async move {
                loading.set(true);

                match api_client.workouts().await {
                    Ok(data) => {
                        options.set(data);
                        failed.set(false);
                    }
                    Err(e) => {
                        Logger::error_with_component("workouts", &format!("Failed to load workout options: {}", e));
                        failed.set(true);
                    }
                }

                loading.set(false);
            });
            || ()
        }
    });

    WorkoutsState {
        options: (*options).clone(),
        loading: *loading,
        failed: *failed,
    }
}
