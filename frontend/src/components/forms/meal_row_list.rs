use yew::prelude::*;

use super::meal_row::MealRowInput;
use crate::hooks::use_meal_rows::MealRowsActions;
use crate::services::meal_editor::MealRowState;

#[derive(Properties, PartialEq)]
pub struct MealRowListProps {
    pub rows: Vec<MealRowState>,
    pub actions: MealRowsActions,
    /// Aggregate error for the whole meal section
    pub error: Option<String>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(MealRowList)]
pub fn meal_row_list(props: &MealRowListProps) -> Html {
    let on_add = {
        let add_row = props.actions.add_row.clone();
        Callback::from(move |_: MouseEvent| add_row.emit(()))
    };

    html! {
        <div class="form-group meal-group">
            <label>{"Meals"}</label>
            {for props.rows.iter().map(|row| html! {
                <MealRowInput
                    key={row.key().as_u64()}
                    row={row.clone()}
                    actions={props.actions.clone()}
                    disabled={props.disabled}
                />
            })}
            <button type="button" class="btn btn-secondary add-meal-btn" onclick={on_add} disabled={props.disabled}>
                {"+ Add meal"}
            </button>
            {if let Some(error) = &props.error {
                html! { <div class="field-error meal-error">{error}</div> }
            } else { html! {} }}
        </div>
    }
}
