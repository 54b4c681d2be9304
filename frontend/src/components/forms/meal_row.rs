use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_meal_rows::MealRowsActions;
use crate::services::meal_editor::MealRowState;

#[derive(Properties, PartialEq)]
pub struct MealRowProps {
    pub row: MealRowState,
    pub actions: MealRowsActions,
    pub disabled: bool,
}

/// One meal: name with autocomplete, amount, unit and a remove button
#[function_component(MealRowInput)]
pub fn meal_row_input(props: &MealRowProps) -> Html {
    let key = props.row.key();

    let on_name_input = {
        let search = props.actions.search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.emit((key, input.value()));
        })
    };

    let on_name_blur = {
        let clear_suggestions = props.actions.clear_suggestions.clone();
        Callback::from(move |_: FocusEvent| clear_suggestions.emit(key))
    };

    let on_amount_input = {
        let set_amount = props.actions.set_amount.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_amount.emit((key, input.value()));
        })
    };

    let on_unit_change = {
        let set_unit = props.actions.set_unit.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            set_unit.emit((key, select.value()));
        })
    };

    let on_remove = {
        let remove_row = props.actions.remove_row.clone();
        Callback::from(move |_: MouseEvent| remove_row.emit(key))
    };

    let unit_choices = props.row.unit_choices();

    html! {
        <div class="meal-wrapper" id={key.to_string()}>
            <div class="meal-name-wrapper">
                <input
                    type="text"
                    class="meal-input form-control"
                    placeholder="Type a meal..."
                    value={props.row.name.clone()}
                    oninput={on_name_input}
                    onblur={on_name_blur}
                    disabled={props.disabled}
                />
                {if !props.row.suggestions.is_empty() {
                    html! {
                        <ul class="suggestions-list">
                            {for props.row.suggestions.iter().map(|suggestion| {
                                // mousedown fires before the input's blur clears the list
                                let select_suggestion = props.actions.select_suggestion.clone();
                                let suggestion = suggestion.clone();
                                let name = suggestion.name.clone();
                                let onmousedown = Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    select_suggestion.emit((key, suggestion.clone()));
                                });
                                html! { <li {onmousedown}>{name}</li> }
                            })}
                        </ul>
                    }
                } else { html! {} }}
            </div>

            <input
                type="number"
                class="amount-input form-control"
                placeholder="Amount"
                min="0"
                step="any"
                value={props.row.amount.clone()}
                oninput={on_amount_input}
                disabled={props.disabled}
            />

            <select
                class="unit-select form-select"
                onchange={on_unit_change}
                disabled={props.disabled || !props.row.unit_select_enabled()}
            >
                {for unit_choices.into_iter().map(|choice| {
                    let selected = choice.value == props.row.unit;
                    html! {
                        <option value={choice.value} disabled={choice.disabled} {selected}>
                            {choice.label}
                        </option>
                    }
                })}
            </select>

            <button
                type="button"
                class="btn-close remove-meal-btn"
                aria-label="Remove"
                title="Remove"
                onclick={on_remove}
                disabled={props.disabled}
            />
        </div>
    }
}
