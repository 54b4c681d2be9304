use gloo::timers::future::TimeoutFuture;
use shared::Entry;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::feedback::{delete_failure_message, DialogPhase, Feedback, FeedbackMessage};
use crate::services::api::ApiClient;
use crate::services::date_utils::format_date_dmy;
use crate::services::logging::Logger;

const CLOSE_DELAY_MS: u32 = 2_000;

#[derive(Properties, PartialEq)]
pub struct DeleteConfirmModalProps {
    pub api_client: ApiClient,
    /// Entry to delete; the dialog is closed when `None`
    pub entry: Option<Entry>,
    pub on_success: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(DeleteConfirmModal)]
pub fn delete_confirm_modal(props: &DeleteConfirmModalProps) -> Html {
    let feedback = use_state(|| Option::<Feedback>::None);
    let phase = use_state(DialogPhase::default);

    // Reset state when a new entry is targeted
    use_effect_with(props.entry.as_ref().map(|entry| entry.id.clone()), {
        let feedback = feedback.clone();
        let phase = phase.clone();
        move |_| {
            feedback.set(None);
            phase.set(DialogPhase::Idle);
            || ()
        }
    });

    let on_submit = {
        let api_client = props.api_client.clone();
        let entry_id = props.entry.as_ref().map(|entry| entry.id.clone());
        let feedback = feedback.clone();
        let phase = phase.clone();
        let on_success = props.on_success.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if phase.is_busy() {
                return;
            }
            let Some(entry_id) = entry_id.clone() else {
                return;
            };

            feedback.set(None);
            phase.set(DialogPhase::Saving);

            let api_client = api_client.clone();
            let feedback = feedback.clone();
            let phase = phase.clone();
            let on_success = on_success.clone();
            let on_close = on_close.clone();

            spawn_local(async move {
                match api_client.delete_entry(&entry_id).await {
                    Ok(()) => {
                        feedback.set(Some(Feedback::success("Entry deleted successfully.")));
                        phase.set(DialogPhase::after_request(true));
                        on_success.emit(());
                        TimeoutFuture::new(CLOSE_DELAY_MS).await;
                        on_close.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component("entries", &format!("Delete error: {}", e));
                        feedback.set(Some(Feedback::error(delete_failure_message(&e))));
                        phase.set(DialogPhase::after_request(false));
                    }
                }
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let Some(entry) = &props.entry else {
        return html! {};
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal delete-confirm-modal">
                <form class="delete-confirm-form" onsubmit={on_submit}>
                    <h3>{"Delete entry"}</h3>
                    <p>
                        {format!("Delete the entry from {} at {}?", format_date_dmy(&entry.date), entry.time)}
                    </p>
                    <FeedbackMessage feedback={(*feedback).clone()} />
                    <div class="button-row">
                        <button type="submit" class="btn btn-danger" disabled={phase.is_busy()}>
                            {if *phase == DialogPhase::Saving { "Deleting..." } else { "Delete" }}
                        </button>
                        <button type="button" class="btn btn-secondary" onclick={on_cancel} disabled={phase.is_busy()}>
                            {"Cancel"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
