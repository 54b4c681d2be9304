use std::cell::RefCell;
use std::rc::Rc;

use shared::{IngredientSuggestion, MealRow};
use wasm_bindgen_futures::spawn_local;
use yew::functional::UseForceUpdateHandle;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::meal_editor::{MealRowEditor, MealRowState, RowKey, SearchTicket, UnitTicket};

pub struct UseMealRowsResult {
    /// Snapshot of the rows for rendering
    pub rows: Vec<MealRowState>,
    /// Rows as they would be submitted right now
    pub meals: Vec<MealRow>,
    pub actions: MealRowsActions,
}

#[derive(Clone, PartialEq)]
pub struct MealRowsActions {
    pub add_row: Callback<()>,
    pub remove_row: Callback<RowKey>,
    pub search: Callback<(RowKey, String)>,
    pub select_suggestion: Callback<(RowKey, IngredientSuggestion)>,
    pub set_amount: Callback<(RowKey, String)>,
    pub set_unit: Callback<(RowKey, String)>,
    pub clear_suggestions: Callback<RowKey>,
    pub reset: Callback<()>,
    pub load: Callback<Vec<MealRow>>,
}

/// Run a catalog search and apply it; a prefill match chains into a unit lookup
fn spawn_search(
    api_client: ApiClient,
    editor: Rc<RefCell<MealRowEditor>>,
    trigger: UseForceUpdateHandle,
    ticket: SearchTicket,
) {
    spawn_local(async move {
        let result = api_client.search_ingredients(&ticket.query).await;
        let follow_up = editor.borrow_mut().apply_search(&ticket, result);
        trigger.force_update();

        if let Some(unit_ticket) = follow_up {
            spawn_unit_lookup(api_client, editor, trigger, unit_ticket);
        }
    });
}

fn spawn_unit_lookup(
    api_client: ApiClient,
    editor: Rc<RefCell<MealRowEditor>>,
    trigger: UseForceUpdateHandle,
    ticket: UnitTicket,
) {
    spawn_local(async move {
        let result = api_client.ingredient_units(ticket.ingredient_id).await;
        if editor.borrow_mut().apply_units(&ticket, result) {
            trigger.force_update();
        }
    });
}

/// Meal-row editor bound to the component tree. `start_with_empty_row`
/// selects the add-entry starting state; the edit dialog starts empty and
/// calls `load`.
#[hook]
pub fn use_meal_rows(api_client: &ApiClient, start_with_empty_row: bool) -> UseMealRowsResult {
    let editor = use_mut_ref(move || {
        if start_with_empty_row {
            MealRowEditor::with_empty_row()
        } else {
            MealRowEditor::new()
        }
    });
    let trigger = use_force_update();

    let add_row = {
        let editor = editor.clone();
        let trigger = trigger.clone();
        use_callback((), move |_, _| {
            editor.borrow_mut().add_row(None);
            trigger.force_update();
        })
    };

    let remove_row = {
        let editor = editor.clone();
        let trigger = trigger.clone();
        use_callback((), move |key: RowKey, _| {
            if editor.borrow_mut().remove_row(key) {
                trigger.force_update();
            }
        })
    };

    let search = {
        let editor = editor.clone();
        let trigger = trigger.clone();
        use_callback(api_client.clone(), move |(key, text): (RowKey, String), api_client| {
            let ticket = editor.borrow_mut().search(key, &text);
            trigger.force_update();

            if let Some(ticket) = ticket {
                spawn_search(api_client.clone(), editor.clone(), trigger.clone(), ticket);
            }
        })
    };

    let select_suggestion = {
        let editor = editor.clone();
        let trigger = trigger.clone();
        use_callback(
            api_client.clone(),
            move |(key, suggestion): (RowKey, IngredientSuggestion), api_client| {
                let ticket = editor.borrow_mut().select_suggestion(key, &suggestion);
                trigger.force_update();

                if let Some(ticket) = ticket {
                    spawn_unit_lookup(api_client.clone(), editor.clone(), trigger.clone(), ticket);
                }
            },
        )
    };

    let set_amount = {
        let editor = editor.clone();
        let trigger = trigger.clone();
        use_callback((), move |(key, amount): (RowKey, String), _| {
            editor.borrow_mut().set_amount(key, &amount);
            trigger.force_update();
        })
    };

    let set_unit = {
        let editor = editor.clone();
        let trigger = trigger.clone();
        use_callback((), move |(key, unit): (RowKey, String), _| {
            editor.borrow_mut().set_unit(key, &unit);
            trigger.force_update();
        })
    };

    let clear_suggestions = {
        let editor = editor.clone();
        let trigger = trigger.clone();
        use_callback((), move |key: RowKey, _| {
            editor.borrow_mut().clear_suggestions(key);
            trigger.force_update();
        })
    };

    let reset = {
        let editor = editor.clone();
        let trigger = trigger.clone();
        use_callback((), move |_, _| {
            editor.borrow_mut().reset();
            trigger.force_update();
        })
    };

    let load = {
        let editor = editor.clone();
        let trigger = trigger.clone();
        use_callback(api_client.clone(), move |meals: Vec<MealRow>, api_client| {
            let tickets = editor.borrow_mut().load(&meals);
            trigger.force_update();

            for ticket in tickets {
                spawn_search(api_client.clone(), editor.clone(), trigger.clone(), ticket);
            }
        })
    };

    let (rows, meals) = {
        let editor = editor.borrow();
        (editor.rows().to_vec(), editor.serialize())
    };

    UseMealRowsResult {
        rows,
        meals,
        actions: MealRowsActions {
            add_row,
            remove_row,
            search,
            select_suggestion,
            set_amount,
            set_unit,
            clear_suggestions,
            reset,
            load,
        },
    }
}
