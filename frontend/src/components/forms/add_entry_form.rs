use gloo::timers::future::TimeoutFuture;
use shared::{EntryDraft, EntryField, EntryFormValidation};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::{MealRowList, WorkoutSelect};
use crate::components::feedback::{create_failure_message, Feedback, FeedbackMessage, FeedbackTicker};
use crate::hooks::use_meal_rows::use_meal_rows;
use crate::hooks::use_workouts::WorkoutsState;
use crate::services::api::ApiClient;
use crate::services::date_utils;
use crate::services::logging::Logger;

const FEEDBACK_VISIBLE_MS: u32 = 5_000;

#[derive(Properties, PartialEq)]
pub struct AddEntryFormProps {
    pub api_client: ApiClient,
    pub workouts: WorkoutsState,
    /// Fired after the backend accepted a new entry
    pub on_saved: Callback<()>,
}

#[function_component(AddEntryForm)]
pub fn add_entry_form(props: &AddEntryFormProps) -> Html {
    let meal_rows = use_meal_rows(&props.api_client, true);

    let workout = use_state(String::new);
    let date = use_state(date_utils::today_iso);
    let time = use_state(String::new);
    let validation = use_state(|| Option::<EntryFormValidation>::None);
    let feedback = use_state(|| Option::<Feedback>::None);
    let submitting = use_state(|| false);
    let feedback_ticker = use_mut_ref(FeedbackTicker::default);

    let on_workout_change = {
        let workout = workout.clone();
        Callback::from(move |value: String| workout.set(value))
    };

    let on_date_change = {
        let date = date.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            date.set(input.value());
        })
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
        let on_saved = props.on_saved.clone();
        let meals = meal_rows.meals.clone();
        let reset_rows = meal_rows.actions.reset.clone();
        let workout = workout.clone();
        let date = date.clone();
        let time = time.clone();
        let validation = validation.clone();
        let feedback = feedback.clone();
        let submitting = submitting.clone();
        let feedback_ticker = feedback_ticker.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            validation.set(None);
            feedback.set(None);

            let draft = EntryDraft {
                meals: meals.clone(),
                workout: (*workout).clone(),
                date: (*date).clone(),
                time: (*time).clone(),
            };

            let result = draft.validate(date_utils::today_utc());
            if !result.is_valid {
                validation.set(Some(result));
                return;
            }

            submitting.set(true);

            let api_client = api_client.clone();
            let on_saved = on_saved.clone();
            let reset_rows = reset_rows.clone();
            let workout = workout.clone();
            let date = date.clone();
            let time = time.clone();
            let feedback = feedback.clone();
            let submitting = submitting.clone();
            let feedback_ticker = feedback_ticker.clone();

            spawn_local(async move {
                match api_client.create_entry(&draft.into_request()).await {
                    Ok(()) => {
                        Logger::info_with_component("add-entry", "Entry saved");
                        feedback.set(Some(Feedback::success("Entry saved successfully!")));
                        workout.set(String::new());
                        date.set(date_utils::today_iso());
                        time.set(String::new());
                        reset_rows.emit(());
                        on_saved.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component("add-entry", &format!("Failed to save entry: {}", e));
                        feedback.set(Some(Feedback::error(create_failure_message(&e))));
                    }
                }

                submitting.set(false);
                let shown = feedback_ticker.borrow_mut().issue();

                TimeoutFuture::new(FEEDBACK_VISIBLE_MS).await;
                if feedback_ticker.borrow().is_current(shown) {
                    feedback.set(None);
                }
            });
        })
    };

    let errors = (*validation).clone().unwrap_or_default();
    let field_error = |field: EntryField| errors.message_for(field).map(str::to_string);
    let input_class = |field: EntryField| {
        if errors.message_for(field).is_some() {
            "form-control is-invalid"
        } else {
            "form-control"
        }
    };

    html! {
        <section class="add-entry-section">
            <h2>{"Log today's entry"}</h2>

            <form class="entry-form" onsubmit={on_submit}>
                <MealRowList
                    rows={meal_rows.rows.clone()}
                    actions={meal_rows.actions.clone()}
                    error={field_error(EntryField::Meals)}
                    disabled={*submitting}
                />

                <WorkoutSelect
                    id="workout"
                    options={props.workouts.options.clone()}
                    loading={props.workouts.loading}
                    failed={props.workouts.failed}
                    selected={(*workout).clone()}
                    on_change={on_workout_change}
                    error={field_error(EntryField::Workout)}
                    disabled={*submitting}
                />

                <div class="form-group">
                    <label for="date">{"Date"}</label>
                    <input
                        id="date"
                        type="date"
                        class={input_class(EntryField::Date)}
                        value={(*date).clone()}
                        onchange={on_date_change}
                        disabled={*submitting}
                    />
                    {if let Some(error) = field_error(EntryField::Date) {
                        html! { <div class="field-error">{error}</div> }
                    } else { html! {} }}
                </div>

                <div class="form-group">
                    <label for="time">{"Time"}</label>
                    <input
                        id="time"
                        type="time"
                        class={input_class(EntryField::Time)}
                        value={(*time).clone()}
                        onchange={on_time_change}
                        disabled={*submitting}
                    />
                    {if let Some(error) = field_error(EntryField::Time) {
                        html! { <div class="field-error">{error}</div> }
                    } else { html! {} }}
                </div>

                <FeedbackMessage feedback={(*feedback).clone()} />

                <button type="submit" class="btn btn-primary" disabled={*submitting}>
                    {if *submitting { "Saving..." } else { "Save entry" }}
                </button>
            </form>
        </section>
    }
}
