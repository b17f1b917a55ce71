//! Main application component.

use activity_board::{ActivityBoard, ActivityClient, BoardAction, BoardConfig, ListState};
use core_types::Participant;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{ActivityItem, Loading, MessageBox, SignupPanel};
use crate::surface::{PageState, YewSurface};
use crate::transport::GlooTransport;

/// Properties for the root component.
#[derive(Properties, PartialEq)]
pub struct AppProps {
    #[prop_or_default]
    pub config: BoardConfig,
}

/// Board wired to the browser: fetch transport and reducer-backed surface.
fn board(
    config: &BoardConfig,
    dispatcher: UseReducerDispatcher<PageState>,
) -> ActivityBoard<GlooTransport, YewSurface> {
    ActivityBoard::new(
        ActivityClient::new(GlooTransport::new(config.api_base.clone())),
        YewSurface::new(dispatcher),
        config.clone(),
    )
}

/// Main application component.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let state = use_reducer(PageState::default);

    // Initial load
    {
        let dispatcher = state.dispatcher();
        let config = props.config.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                board(&config, dispatcher).fetch_activities().await;
            });
        });
    }

    let on_email = {
        let dispatcher = state.dispatcher();
        Callback::from(move |email: String| dispatcher.dispatch(BoardAction::EditEmail(email)))
    };

    let on_activity = {
        let dispatcher = state.dispatcher();
        Callback::from(move |activity: String| {
            dispatcher.dispatch(BoardAction::SelectActivity(activity))
        })
    };

    let on_submit = {
        let dispatcher = state.dispatcher();
        let config = props.config.clone();
        let form = state.form.clone();

        Callback::from(move |()| {
            let board = board(&config, dispatcher.clone());
            let form = form.clone();
            spawn_local(async move {
                board.submit_signup(&form.email, &form.activity).await;
            });
        })
    };

    let on_remove = {
        let dispatcher = state.dispatcher();
        let config = props.config.clone();

        Callback::from(move |(activity, participant): (String, Participant)| {
            let board = board(&config, dispatcher.clone());
            spawn_local(async move {
                board.remove_participant(&activity, &participant).await;
            });
        })
    };

    let list = match &state.list {
        ListState::Loading => html! { <Loading /> },
        ListState::Failed(message) => html! { <p>{ message }</p> },
        ListState::Ready(view) if view.cards.is_empty() => html! {
            <p>{"No activities available."}</p>
        },
        ListState::Ready(view) => html! {
            <>
                { for view.cards.iter().map(|card| html! {
                    <ActivityItem
                        key={card.title.clone()}
                        card={card.clone()}
                        on_remove={on_remove.clone()}
                    />
                })}
            </>
        },
    };

    html! {
        <div class="app-container">
            <header>
                <h1>{"Mergington High School"}</h1>
                <h2>{"Extracurricular Activities"}</h2>
            </header>
            <main>
                <section id="activities-container">
                    <h3>{"Available Activities"}</h3>
                    <div id="activities-list">{ list }</div>
                </section>
                <section id="signup-container">
                    <h3>{"Sign Up for an Activity"}</h3>
                    <SignupPanel
                        form={state.form.clone()}
                        options={state.options.clone()}
                        {on_email}
                        {on_activity}
                        {on_submit}
                    />
                    <MessageBox banner={state.banner.clone()} />
                </section>
            </main>
        </div>
    }
}
