use yew::prelude::*;

use crate::services::error::ApiError;

/// One aggregate message shown after a form submission
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub message: String,
    pub is_success: bool,
}

impl Feedback {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_success: true,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_success: false,
        }
    }
}

/// Tracks which feedback message is on screen so a delayed auto-hide only
/// clears the message it was started for
#[derive(Debug, Default)]
pub struct FeedbackTicker {
    current: u64,
}

impl FeedbackTicker {
    /// Register a newly shown message and return its id
    pub fn issue(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    pub fn is_current(&self, id: u64) -> bool {
        self.current == id
    }
}

/// Submit lifecycle of a dialog that closes itself after a success
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogPhase {
    #[default]
    Idle,
    Saving,
    /// Succeeded; waiting out the close delay
    Closing,
}

impl DialogPhase {
    pub fn after_request(succeeded: bool) -> Self {
        if succeeded {
            DialogPhase::Closing
        } else {
            DialogPhase::Idle
        }
    }

    /// Inputs and buttons are locked
    pub fn is_busy(self) -> bool {
        self != DialogPhase::Idle
    }
}

pub fn create_failure_message(error: &ApiError) -> String {
    if error.is_network() {
        "Error submitting the form. Please try again.".to_string()
    } else {
        format!(
            "Failed to save entry: {}",
            error.server_message().unwrap_or("Unknown error")
        )
    }
}

pub fn update_failure_message(error: &ApiError) -> String {
    if error.is_network() {
        "Update request failed.".to_string()
    } else {
        "Failed to update entry.".to_string()
    }
}

pub fn delete_failure_message(error: &ApiError) -> String {
    if error.is_network() {
        "Delete request failed.".to_string()
    } else {
        "Failed to delete entry.".to_string()
    }
}

#[derive(Properties, PartialEq)]
pub struct FeedbackMessageProps {
    pub feedback: Option<Feedback>,
}

#[function_component(FeedbackMessage)]
pub fn feedback_message(props: &FeedbackMessageProps) -> Html {
    match &props.feedback {
        Some(feedback) => {
            let class = if feedback.is_success {
                "form-feedback success"
            } else {
                "form-feedback error"
            };
            html! { <div class={class}>{&feedback.message}</div> }
        }
        None => html! {},
    }
}
