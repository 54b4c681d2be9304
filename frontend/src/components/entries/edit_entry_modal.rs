use gloo::timers::future::TimeoutFuture;
use shared::{Entry, EntryEditDraft, EntryField, EntryFormValidation, MealRow};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::feedback::{update_failure_message, DialogPhase, Feedback, FeedbackMessage};
use crate::components::forms::{MealRowList, WorkoutSelect};
use crate::hooks::use_meal_rows::use_meal_rows;
use crate::hooks::use_workouts::{match_workout, WorkoutsState};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const CLOSE_DELAY_MS: u32 = 2_000;

#[derive(Properties, PartialEq)]
pub struct EditEntryModalProps {
    pub api_client: ApiClient,
    /// Entry being edited; the dialog is closed when `None`
    pub entry: Option<Entry>,
    pub workouts: WorkoutsState,
    pub on_success: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(EditEntryModal)]
pub fn edit_entry_modal(props: &EditEntryModalProps) -> Html {
    let meal_rows = use_meal_rows(&props.api_client, false);

    let workout = use_state(String::new);
    let custom_workout = use_state(|| Option::<String>::None);
    let time = use_state(String::new);
    let validation = use_state(|| Option::<EntryFormValidation>::None);
    let feedback = use_state(|| Option::<Feedback>::None);
    let phase = use_state(DialogPhase::default);

    let entry_id = props.entry.as_ref().map(|entry| entry.id.clone());

    // Prefill the meal rows and time once per opened entry
    use_effect_with(entry_id.clone(), {
        let entry = props.entry.clone();
        let load = meal_rows.actions.load.clone();
        let time = time.clone();
        let validation = validation.clone();
        let feedback = feedback.clone();
        let phase = phase.clone();
        move |_| {
            validation.set(None);
            feedback.set(None);
            phase.set(DialogPhase::Idle);

            match entry {
                Some(entry) => {
                    let meals: Vec<MealRow> = entry.meals.iter().map(|meal| meal.to_meal_row()).collect();
                    time.set(entry.time.clone());
                    load.emit(meals);
                }
                None => {
                    time.set(String::new());
                    load.emit(Vec::new());
                }
            }
            || ()
        }
    });

    // Workout options may arrive after the dialog opened
    use_effect_with((entry_id, props.workouts.options.clone()), {
        let stored = props.entry.as_ref().map(|entry| entry.workout.clone()).unwrap_or_default();
        let workout = workout.clone();
        let custom_workout = custom_workout.clone();
        move |(_, options)| {
            let selection = match_workout(options, &stored);
            workout.set(selection.selected);
            custom_workout.set(selection.custom_option);
            || ()
        }
    });

    let on_workout_change = {
        let workout = workout.clone();
        Callback::from(move |value: String| workout.set(value))
    };

    let on_time_change = {
        let time = time.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            time.set(input.value());
        })
    };

    let on_submit = {
        let api_client = props.api_client.clone();
        let entry_id = props.entry.as_ref().map(|entry| entry.id.clone());
        let meals = meal_rows.meals.clone();
        let workout = workout.clone();
        let time = time.clone();
        let validation = validation.clone();
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

            validation.set(None);
            feedback.set(None);

            let draft = EntryEditDraft {
                meals: meals.clone(),
                workout: (*workout).clone(),
                time: (*time).clone(),
            };

            let result = draft.validate();
            if !result.is_valid {
                validation.set(Some(result));
                return;
            }

            phase.set(DialogPhase::Saving);

            let api_client = api_client.clone();
            let feedback = feedback.clone();
            let phase = phase.clone();
            let on_success = on_success.clone();
            let on_close = on_close.clone();

            spawn_local(async move {
                match api_client.update_entry(&entry_id, &draft.into_request()).await {
                    Ok(()) => {
                        feedback.set(Some(Feedback::success("Entry updated successfully.")));
                        phase.set(DialogPhase::after_request(true));
                        on_success.emit(());
                        // Stays locked until the dialog closes
                        TimeoutFuture::new(CLOSE_DELAY_MS).await;
                        on_close.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component("entries", &format!("Update error: {}", e));
                        feedback.set(Some(Feedback::error(update_failure_message(&e))));
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

    if props.entry.is_none() {
        return html! {};
    }

    let errors = (*validation).clone().unwrap_or_default();
    let field_error = |field: EntryField| errors.message_for(field).map(str::to_string);

    html! {
        <div class="modal-backdrop">
            <div class="modal edit-entry-modal">
                <form class="entry-form" onsubmit={on_submit}>
                    <h3>{"Edit entry"}</h3>

                    <MealRowList
                        rows={meal_rows.rows.clone()}
                        actions={meal_rows.actions.clone()}
                        error={field_error(EntryField::Meals)}
                        disabled={phase.is_busy()}
                    />

                    <WorkoutSelect
                        id="edit-workout"
                        options={props.workouts.options.clone()}
                        loading={props.workouts.loading}
                        failed={props.workouts.failed}
                        selected={(*workout).clone()}
                        on_change={on_workout_change}
                        use_labels=true
                        custom_option={(*custom_workout).clone()}
                        error={field_error(EntryField::Workout)}
                        disabled={phase.is_busy()}
                    />

                    <div class="form-group">
                        <label for="edit-time">{"Time"}</label>
                        <input
                            id="edit-time"
                            type="time"
                            class={if errors.message_for(EntryField::Time).is_some() { "form-control is-invalid" } else { "form-control" }}
                            value={(*time).clone()}
                            onchange={on_time_change}
                            disabled={phase.is_busy()}
                        />
                        {if let Some(error) = field_error(EntryField::Time) {
                            html! { <div class="field-error">{error}</div> }
                        } else { html! {} }}
                    </div>

                    <FeedbackMessage feedback={(*feedback).clone()} />

                    <div class="button-row">
                        <button type="submit" class="btn btn-primary" disabled={phase.is_busy()}>
                            {if *phase == DialogPhase::Saving { "Saving..." } else { "Save changes" }}
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
