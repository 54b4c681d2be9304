use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod services;

use components::entries::EntriesView;
use components::feedback_list::FeedbackList;
use components::forms::AddEntryForm;
use components::header::Header;
use config::AppConfig;
use hooks::use_workouts::use_workouts;
use services::api::ApiClient;
use services::logging::Logger;
use services::session::Session;

#[derive(Properties, PartialEq)]
struct SignedInContentProps {
    api_client: ApiClient,
    on_saved: Callback<()>,
    refresh_trigger: u32,
}

/// Screens that need a session; workout options are fetched once for all of them
#[function_component(SignedInContent)]
fn signed_in_content(props: &SignedInContentProps) -> Html {
    let workouts = use_workouts(&props.api_client);

    html! {
        <>
            <AddEntryForm
                api_client={props.api_client.clone()}
                workouts={workouts.clone()}
                on_saved={props.on_saved.clone()}
            />
            <EntriesView
                api_client={props.api_client.clone()}
                workouts={workouts}
                refresh_trigger={props.refresh_trigger}
            />
            <FeedbackList api_client={props.api_client.clone()} />
        </>
    }
}

#[function_component(App)]
fn app() -> Html {
    // Credentials are read once; everything below receives them explicitly
    let api_client = use_memo((), |_| {
        let session = Session::from_local_storage();
        if session.is_none() {
            Logger::warn_with_component("app", "No token in local storage");
        }
        session.map(|session| ApiClient::new(&AppConfig::from_env(), session))
    });

    // Bumped after a new entry is saved so the list reloads
    let refresh_trigger = use_state(|| 0u32);

    let on_saved = {
        let refresh_trigger = refresh_trigger.clone();
        Callback::from(move |_: ()| refresh_trigger.set(*refresh_trigger + 1))
    };

    let Some(api_client) = (*api_client).clone() else {
        return html! {
            <div class="app">
                <Header signed_in=false />
                <main class="main">
                    <div class="container">
                        <p class="signed-out">{"You must be logged in."}</p>
                    </div>
                </main>
            </div>
        };
    };

    html! {
        <div class="app">
            <Header signed_in=true username={api_client.session().username().map(str::to_string)} />
            <main class="main">
                <div class="container">
                    <SignedInContent {api_client} {on_saved} refresh_trigger={*refresh_trigger} />
                </div>
            </main>
        </div>
    }
}

fn main() {
    Logger::info_with_component("app", "Starting FitLog client");
    yew::Renderer::<App>::new().render();
}
