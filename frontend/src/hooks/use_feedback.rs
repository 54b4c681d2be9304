use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use shared::TraineeFeedback;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::feedback::{Feedback, FeedbackTicker};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const NOTICE_VISIBLE_MS: u32 = 4_000;

/// Feedback ids are 24-character hex object ids
pub fn is_valid_feedback_id(id: &str) -> bool {
    id.len() == 24 && id.chars().all(|c| c.is_ascii_hexdigit())
}

/// Coach feedback shown to the signed-in trainee
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedbackInbox {
    pub items: Vec<TraineeFeedback>,
    pub loading: bool,
    /// The list could not be fetched
    pub failed: bool,
}

impl FeedbackInbox {
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|item| !item.read_by_trainee).count()
    }
}

pub enum InboxAction {
    Loading,
    Loaded(Vec<TraineeFeedback>),
    Failed,
    /// The backend accepted the mark-read request
    MarkedRead(String),
    /// Hidden from this view only; nothing is deleted server side
    Dismissed(String),
}

impl Reducible for FeedbackInbox {
    type Action = InboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            InboxAction::Loading => {
                next.loading = true;
            }
            InboxAction::Loaded(items) => {
                next.items = items;
                next.loading = false;
                next.failed = false;
            }
            InboxAction::Failed => {
                next.loading = false;
                next.failed = true;
            }
            InboxAction::MarkedRead(id) => {
                if let Some(item) = next.items.iter_mut().find(|item| item.id == id) {
                    item.read_by_trainee = true;
                }
            }
            InboxAction::Dismissed(id) => {
                next.items.retain(|item| item.id != id);
            }
        }
        Rc::new(next)
    }
}

pub struct UseFeedbackResult {
    pub inbox: FeedbackInbox,
    /// The session carries no trainee id
    pub signed_out: bool,
    pub notice: Option<Feedback>,
    pub actions: FeedbackActions,
}

#[derive(Clone, PartialEq)]
pub struct FeedbackActions {
    pub mark_read: Callback<String>,
    pub dismiss: Callback<String>,
}

fn show_notice(
    notice: UseStateHandle<Option<Feedback>>,
    ticker: Rc<RefCell<FeedbackTicker>>,
    message: Feedback,
) {
    notice.set(Some(message));
    let shown = ticker.borrow_mut().issue();
    spawn_local(async move {
        TimeoutFuture::new(NOTICE_VISIBLE_MS).await;
        if ticker.borrow().is_current(shown) {
            notice.set(None);
        }
    });
}

#[hook]
pub fn use_feedback(api_client: &ApiClient) -> UseFeedbackResult {
    let inbox = use_reducer(|| FeedbackInbox {
        loading: true,
        ..FeedbackInbox::default()
    });
    let notice = use_state(|| Option::<Feedback>::None);
    let ticker = use_mut_ref(FeedbackTicker::default);
    let trainee_id = api_client.session().trainee_id();

    use_effect_with((api_client.clone(), trainee_id.clone()), {
        let inbox = inbox.dispatcher();
        move |(api_client, trainee_id)| {
            match trainee_id.clone() {
                Some(trainee_id) => {
                    let api_client = api_client.clone();
                    inbox.dispatch(InboxAction::Loading);
                    spawn_local(async move {
                        match api_client.trainee_feedback(&trainee_id).await {
                            Ok(items) => inbox.dispatch(InboxAction::Loaded(items)),
                            Err(e) => {
                                Logger::error_with_component("feedback", &format!("Error loading feedback list: {}", e));
                                inbox.dispatch(InboxAction::Failed);
                            }
                        }
                    });
                }
                None => inbox.dispatch(InboxAction::Loaded(Vec::new())),
            }
            || ()
        }
    });

    let mark_read = {
        let inbox = inbox.dispatcher();
        let notice = notice.clone();
        let ticker = ticker.clone();
        use_callback(api_client.clone(), move |feedback_id: String, api_client| {
            if !is_valid_feedback_id(&feedback_id) {
                Logger::error_with_component("feedback", &format!("Invalid feedback id: {}", feedback_id));
                show_notice(
                    notice.clone(),
                    ticker.clone(),
                    Feedback::error("Invalid feedback ID, cannot mark as read."),
                );
                return;
            }

            let api_client = api_client.clone();
            let inbox = inbox.clone();
            let notice = notice.clone();
            let ticker = ticker.clone();
            spawn_local(async move {
                match api_client.mark_feedback_read(&feedback_id).await {
                    Ok(()) => inbox.dispatch(InboxAction::MarkedRead(feedback_id)),
                    Err(e) => {
                        Logger::error_with_component("feedback", &format!("Failed to mark feedback as read: {}", e));
                        show_notice(notice, ticker, Feedback::error("Failed to mark feedback as read"));
                    }
                }
            });
        })
    };

    let dismiss = {
        let inbox = inbox.dispatcher();
        let notice = notice.clone();
        let ticker = ticker.clone();
        use_callback((), move |feedback_id: String, _| {
            inbox.dispatch(InboxAction::Dismissed(feedback_id));
            show_notice(
                notice.clone(),
                ticker.clone(),
                Feedback::success("Feedback marked as read and removed from your view."),
            );
        })
    };

    UseFeedbackResult {
        inbox: (*inbox).clone(),
        signed_out: trainee_id.is_none(),
        notice: (*notice).clone(),
        actions: FeedbackActions { mark_read, dismiss },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::FeedbackTips;

    fn item(id: &str, read: bool) -> TraineeFeedback {
        TraineeFeedback {
            id: id.to_string(),
            datetime: "2026-10-17T09:30:00.000Z".to_string(),
            tips: FeedbackTips::default(),
            read_by_trainee: read,
        }
    }

    fn loaded() -> Rc<FeedbackInbox> {
        Rc::new(FeedbackInbox::default()).reduce(InboxAction::Loaded(vec![
            item("65f0c0ffee65f0c0ffee65f0", false),
            item("65f0c0ffee65f0c0ffee65f1", true),
        ]))
    }

    #[test]
    fn test_loaded_items_keep_read_state() {
        let inbox = loaded();
        assert!(!inbox.loading);
        assert_eq!(inbox.unread_count(), 1);
        assert!(!inbox.items[0].read_by_trainee);
        assert!(inbox.items[1].read_by_trainee);
    }

    #[test]
    fn test_marked_read_flips_only_that_item() {
        let inbox = loaded().reduce(InboxAction::MarkedRead("65f0c0ffee65f0c0ffee65f0".to_string()));
        assert_eq!(inbox.unread_count(), 0);
        assert_eq!(inbox.items.len(), 2);

        let unchanged = loaded().reduce(InboxAction::MarkedRead("000000000000000000000000".to_string()));
        assert_eq!(unchanged.unread_count(), 1);
    }

    #[test]
    fn test_dismissed_item_leaves_view() {
        let inbox = loaded().reduce(InboxAction::Dismissed("65f0c0ffee65f0c0ffee65f1".to_string()));
        assert_eq!(inbox.items.len(), 1);
        assert_eq!(inbox.items[0].id, "65f0c0ffee65f0c0ffee65f0");
    }

    #[test]
    fn test_failed_load_keeps_previous_items() {
        let inbox = loaded().reduce(InboxAction::Loading).reduce(InboxAction::Failed);
        assert!(inbox.failed);
        assert!(!inbox.loading);
        assert_eq!(inbox.items.len(), 2);
    }

    #[test]
    fn test_feedback_id_shape() {
        assert!(is_valid_feedback_id("65f0c0ffee65f0c0ffee65f0"));
        assert!(!is_valid_feedback_id("65f0c0ffee"));
        assert!(!is_valid_feedback_id("zzzzzzzzzzzzzzzzzzzzzzzz"));
    }
}
