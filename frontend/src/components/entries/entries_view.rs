use shared::Entry;
use yew::prelude::*;

use super::{DeleteConfirmModal, EditEntryModal, EntriesTable};
use crate::hooks::use_entries::use_entries;
use crate::hooks::use_workouts::WorkoutsState;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct EntriesViewProps {
    pub api_client: ApiClient,
    pub workouts: WorkoutsState,
    /// Bumped by the add form after a successful save
    pub refresh_trigger: u32,
}

/// Entries table plus the edit and delete dialogs that act on it
#[function_component(EntriesView)]
pub fn entries_view(props: &EntriesViewProps) -> Html {
    let entries = use_entries(&props.api_client, props.refresh_trigger);

    let editing = use_state(|| Option::<Entry>::None);
    let deleting = use_state(|| Option::<Entry>::None);

    let on_edit = {
        let editing = editing.clone();
        Callback::from(move |entry: Entry| editing.set(Some(entry)))
    };

    let on_delete = {
        let deleting = deleting.clone();
        Callback::from(move |entry: Entry| deleting.set(Some(entry)))
    };

    let close_edit = {
        let editing = editing.clone();
        Callback::from(move |_: ()| editing.set(None))
    };

    let close_delete = {
        let deleting = deleting.clone();
        Callback::from(move |_: ()| deleting.set(None))
    };

    html! {
        <>
            <EntriesTable
                entries={entries.state.entries.clone()}
                loading={entries.state.loading}
                signed_out={entries.state.signed_out}
                {on_edit}
                {on_delete}
            />
            <EditEntryModal
                api_client={props.api_client.clone()}
                entry={(*editing).clone()}
                workouts={props.workouts.clone()}
                on_success={entries.actions.refresh_entries.clone()}
                on_close={close_edit}
            />
            <DeleteConfirmModal
                api_client={props.api_client.clone()}
                entry={(*deleting).clone()}
                on_success={entries.actions.refresh_entries.clone()}
                on_close={close_delete}
            />
        </>
    }
}
