use shared::WorkoutOption;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WorkoutSelectProps {
    pub id: AttrValue,
    pub options: Vec<WorkoutOption>,
    /// Options are still being fetched
    #[prop_or_default]
    pub loading: bool,
    pub failed: bool,
    pub selected: String,
    pub on_change: Callback<String>,
    /// Submit labels instead of values (the edit dialog stores labels)
    #[prop_or_default]
    pub use_labels: bool,
    /// Stored workout that is not among the options
    #[prop_or_default]
    pub custom_option: Option<String>,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub disabled: bool,
}

pub fn placeholder_label(loading: bool) -> &'static str {
    if loading {
        "Loading workouts..."
    } else {
        "Select workout"
    }
}

#[function_component(WorkoutSelect)]
pub fn workout_select(props: &WorkoutSelectProps) -> Html {
    let on_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    let class = if props.error.is_some() {
        "form-select is-invalid"
    } else {
        "form-select"
    };

    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{"Workout"}</label>
            <select id={props.id.clone()} class={class} onchange={on_change} disabled={props.disabled || props.loading}>
                <option value="" disabled=true selected={props.selected.is_empty()}>{placeholder_label(props.loading)}</option>
                {for props.options.iter().map(|option| {
                    let value = if props.use_labels { option.label.clone() } else { option.value.clone() };
                    let selected = value == props.selected;
                    html! { <option {value} {selected}>{&option.label}</option> }
                })}
                {if let Some(custom) = &props.custom_option {
                    html! { <option value={custom.clone()} selected={*custom == props.selected}>{custom}</option> }
                } else { html! {} }}
                {if props.failed {
                    html! { <option value="" disabled=true>{"Error loading workouts"}</option> }
                } else { html! {} }}
            </select>
            {if let Some(error) = &props.error {
                html! { <div class="field-error">{error}</div> }
            } else { html! {} }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_reflects_loading() {
        assert_eq!(placeholder_label(true), "Loading workouts...");
        assert_eq!(placeholder_label(false), "Select workout");
    }
}
