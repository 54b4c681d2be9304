use shared::TraineeFeedback;
use yew::prelude::*;

use crate::components::feedback::FeedbackMessage;
use crate::hooks::use_feedback::{use_feedback, FeedbackActions};
use crate::services::api::ApiClient;
use crate::services::date_utils::format_date_dmy;

#[derive(Properties, PartialEq)]
pub struct FeedbackListProps {
    pub api_client: ApiClient,
}

#[derive(Properties, PartialEq)]
struct FeedbackCardProps {
    item: TraineeFeedback,
    actions: FeedbackActions,
}

#[function_component(FeedbackCard)]
fn feedback_card(props: &FeedbackCardProps) -> Html {
    let item = &props.item;

    let on_mark_read = {
        let mark_read = props.actions.mark_read.clone();
        let id = item.id.clone();
        Callback::from(move |_: MouseEvent| mark_read.emit(id.clone()))
    };

    let on_dismiss = {
        let dismiss = props.actions.dismiss.clone();
        let id = item.id.clone();
        Callback::from(move |_: MouseEvent| dismiss.emit(id.clone()))
    };

    html! {
        <article class="feedback-card" data-id={item.id.clone()}>
            <h3>{format!("Feedback from {}", format_date_dmy(&item.datetime))}</h3>
            <p><strong>{"Nutrition: "}</strong>{item.tips.nutrition_text()}</p>
            <p><strong>{"Exercise: "}</strong>{item.tips.exercise_text()}</p>
            <p><strong>{"General: "}</strong>{item.tips.general_text()}</p>
            {if item.read_by_trainee {
                html! {
                    <div class="feedback-read">
                        <p class="text-success"><strong>{"Marked as read"}</strong></p>
                        <button type="button" class="btn btn-sm btn-secondary" onclick={on_dismiss}>
                            {"Remove from view"}
                        </button>
                    </div>
                }
            } else {
                html! {
                    <button type="button" class="btn btn-sm mark-read-btn" onclick={on_mark_read}>
                        {"Mark as read"}
                    </button>
                }
            }}
        </article>
    }
}

/// Coach feedback addressed to the signed-in trainee
#[function_component(FeedbackList)]
pub fn feedback_list(props: &FeedbackListProps) -> Html {
    let feedback = use_feedback(&props.api_client);
    let inbox = &feedback.inbox;

    let body = if feedback.signed_out {
        html! { <p>{"Invalid token: trainee ID missing."}</p> }
    } else if inbox.loading && inbox.items.is_empty() {
        html! { <p>{"Loading feedback..."}</p> }
    } else if inbox.failed {
        html! { <p>{"Error loading feedback."}</p> }
    } else if inbox.items.is_empty() {
        html! { <p>{"No feedback found for this trainee."}</p> }
    } else {
        html! {
            {for inbox.items.iter().map(|item| html! {
                <FeedbackCard
                    key={item.id.clone()}
                    item={item.clone()}
                    actions={feedback.actions.clone()}
                />
            })}
        }
    };

    html! {
        <section class="feedback-section">
            <h2>
                {"Coach feedback"}
                {if inbox.unread_count() > 0 {
                    html! { <span class="badge">{inbox.unread_count().to_string()}</span> }
                } else { html! {} }}
            </h2>
            <FeedbackMessage feedback={feedback.notice.clone()} />
            <div class="feedback-list">
                {body}
            </div>
        </section>
    }
}
