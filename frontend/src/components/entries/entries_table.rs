use shared::{Entry, EntryMeal};
use yew::prelude::*;

use crate::services::date_utils::{format_calories, format_date_dmy};

#[derive(Properties, PartialEq)]
pub struct EntriesTableProps {
    pub entries: Vec<Entry>,
    pub loading: bool,
    pub signed_out: bool,
    pub on_edit: Callback<Entry>,
    pub on_delete: Callback<Entry>,
}

/// "Oats (303 kcal)"
pub fn meal_label(meal: &EntryMeal) -> String {
    format!("{} ({})", meal.name, format_calories(meal.calories))
}

#[function_component(EntriesTable)]
pub fn entries_table(props: &EntriesTableProps) -> Html {
    let body = if props.signed_out {
        html! { <tr><td colspan="6">{"You must be logged in."}</td></tr> }
    } else if props.loading && props.entries.is_empty() {
        html! { <tr><td colspan="6">{"Loading entries..."}</td></tr> }
    } else if props.entries.is_empty() {
        html! { <tr><td colspan="6">{"No entries found."}</td></tr> }
    } else {
        html! {
            {for props.entries.iter().map(|entry| {
                let on_edit = {
                    let on_edit = props.on_edit.clone();
                    let entry = entry.clone();
                    Callback::from(move |_: MouseEvent| on_edit.emit(entry.clone()))
                };
                let on_delete = {
                    let on_delete = props.on_delete.clone();
                    let entry = entry.clone();
                    Callback::from(move |_: MouseEvent| on_delete.emit(entry.clone()))
                };

                html! {
                    <tr key={entry.id.clone()}>
                        <td class="date">{format_date_dmy(&entry.date)}</td>
                        <td class="time">{&entry.time}</td>
                        <td class="meals">
                            {for entry.meals.iter().map(|meal| html! { <div>{meal_label(meal)}</div> })}
                        </td>
                        <td class="workout">{&entry.workout}</td>
                        <td class="calories">{format_calories(entry.calories)}</td>
                        <td class="actions">
                            <button type="button" class="edit-btn" onclick={on_edit}>{"Edit"}</button>
                            <button type="button" class="delete-btn" onclick={on_delete}>{"Delete"}</button>
                        </td>
                    </tr>
                }
            })}
        }
    };

    html! {
        <section class="entries-section">
            <h2>{"My entries"}</h2>
            <div class="table-container">
                <table class="entries-table">
                    <thead>
                        <tr>
                            <th>{"Date"}</th>
                            <th>{"Time"}</th>
                            <th>{"Meals"}</th>
                            <th>{"Workout"}</th>
                            <th>{"Calories"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {body}
                    </tbody>
                </table>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_label() {
        let meal = EntryMeal {
            name: "Oats".to_string(),
            amount: 80.0,
            unit: "gram".to_string(),
            calories: Some(303.2),
        };
        assert_eq!(meal_label(&meal), "Oats (303 kcal)");
    }
}
