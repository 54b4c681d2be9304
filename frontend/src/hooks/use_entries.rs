use shared::Entry;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct EntriesState {
    pub entries: Vec<Entry>,
    pub loading: bool,
    /// Set when the session carries no trainee id
    pub signed_out: bool,
}

pub struct UseEntriesResult {
    pub state: EntriesState,
    pub actions: UseEntriesActions,
}

#[derive(Clone, PartialEq)]
pub struct UseEntriesActions {
    pub refresh_entries: Callback<()>,
}

/// Entries of the signed-in trainee. Reloads whenever `refresh_trigger` changes.
#[hook]
pub fn use_entries(api_client: &ApiClient, refresh_trigger: u32) -> UseEntriesResult {
    let entries = use_state(Vec::<Entry>::new);
    let loading = use_state(|| true);
    let trainee_id = api_client.session().trainee_id();

    let refresh_entries = {
        let entries = entries.clone();
        let loading = loading.clone();

        use_callback(
            (api_client.clone(), trainee_id.clone()),
            move |_, (api_client, trainee_id)| {
                let Some(trainee_id) = trainee_id.clone() else {
                    loading.set(false);
                    return;
                };
                let api_client = api_client.clone();
                let entries = entries.clone();
                let loading = loading.clone();

                spawn_local(async move {
                    loading.set(true);

                    match api_client.list_entries(&trainee_id).await {
                        Ok(data) => {
                            entries.set(data);
                        }
                        Err(e) => {
                            Logger::error_with_component("entries", &format!("Load error: {}", e));
                        }
                    }

                    loading.set(false);
                });
            },
        )
    };

    use_effect_with(refresh_trigger, {
        let refresh_entries = refresh_entries.clone();
        move |_| {
            refresh_entries.emit(());
            || ()
        }
    });

    UseEntriesResult {
        state: EntriesState {
            entries: (*entries).clone(),
            loading: *loading,
            signed_out: trainee_id.is_none(),
        },
        actions: UseEntriesActions { refresh_entries },
    }
}
