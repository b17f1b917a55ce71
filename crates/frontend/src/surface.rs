//! Yew-backed board surface.

use std::ops::Deref;
use std::rc::Rc;

use activity_board::{BoardAction, BoardState, BoardSurface, BoardView, MessageBanner};
use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Board state held by the page reducer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState(BoardState);

impl Deref for PageState {
    type Target = BoardState;

    fn deref(&self) -> &BoardState {
        &self.0
    }
}

impl Reducible for PageState {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: BoardAction) -> Rc<Self> {
        let mut next = (*self).clone();
        next.0.apply(action);
        Rc::new(next)
    }
}

/// Drives the page reducer and browser dialogs on behalf of the board.
pub struct YewSurface {
    dispatcher: UseReducerDispatcher<PageState>,
}

impl YewSurface {
    pub fn new(dispatcher: UseReducerDispatcher<PageState>) -> Self {
        Self { dispatcher }
    }
}

impl BoardSurface for YewSurface {
    fn show_board(&self, view: BoardView) {
        self.dispatcher.dispatch(BoardAction::Loaded(view));
    }

    fn show_load_failure(&self, message: &str) {
        self.dispatcher
            .dispatch(BoardAction::LoadFailed(message.to_string()));
    }

    fn show_message(&self, banner: MessageBanner) {
        self.dispatcher.dispatch(BoardAction::ShowMessage(banner));
    }

    fn schedule_message_hide(&self, delay_ms: u32) {
        let dispatcher = self.dispatcher.clone();
        Timeout::new(delay_ms, move || {
            dispatcher.dispatch(BoardAction::HideMessage);
        })
        .forget();
    }

    fn reset_form(&self) {
        self.dispatcher.dispatch(BoardAction::ResetForm);
    }

    fn remove_participant_row(&self, activity: &str, email: &str) {
        self.dispatcher.dispatch(BoardAction::RemoveParticipant {
            activity: activity.to_string(),
            email: email.to_string(),
        });
    }

    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        let shown = web_sys::window()
            .is_some_and(|window| window.alert_with_message(message).is_ok());
        if !shown {
            log::warn!("Could not show alert: {message}");
        }
    }
}
