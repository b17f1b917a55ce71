//! In-memory fakes shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use async_trait::async_trait;
use web_types::{ApiRequest, ApiResponse, Method};

use crate::banner::MessageBanner;
use crate::error::{BoardError, Result};
use crate::render::BoardView;
use crate::surface::BoardSurface;
use crate::transport::HttpTransport;

/// Transport that replays scripted responses and records requests.
#[derive(Default)]
pub struct FakeTransport {
    responses: RefCell<VecDeque<Result<ApiResponse>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, response: ApiResponse) {
        self.responses.borrow_mut().push_back(Ok(response));
    }

    pub fn push_ok(&self, body: &str) {
        self.push(ApiResponse::new(200, body));
    }

    pub fn push_err(&self, err: BoardError) {
        self.responses.borrow_mut().push_back(Err(err));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn count(&self, method: Method) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.method == method)
            .count()
    }
}

#[async_trait(?Send)]
impl HttpTransport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(BoardError::Transport("no scripted response".to_string())))
    }
}

/// Everything a board did to its surface, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Board(BoardView),
    LoadFailure(String),
    Message(MessageBanner),
    ScheduleHide(u32),
    ResetForm,
    RemoveRow { activity: String, email: String },
    Confirm(String),
    Alert(String),
}

/// Surface that records calls and answers confirmations with a fixed value.
pub struct RecordingSurface {
    events: RefCell<Vec<SurfaceEvent>>,
    confirm_answer: Cell<bool>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            events: RefCell::new(Vec::new()),
            confirm_answer: Cell::new(true),
        }
    }

    pub fn declining() -> Self {
        let surface = Self::new();
        surface.confirm_answer.set(false);
        surface
    }

    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events.borrow().clone()
    }

    pub fn messages(&self) -> Vec<MessageBanner> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                SurfaceEvent::Message(banner) => Some(banner.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn scheduled_hides(&self) -> Vec<u32> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                SurfaceEvent::ScheduleHide(ms) => Some(*ms),
                _ => None,
            })
            .collect()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                SurfaceEvent::Alert(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: SurfaceEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl BoardSurface for RecordingSurface {
    fn show_board(&self, view: BoardView) {
        self.record(SurfaceEvent::Board(view));
    }

    fn show_load_failure(&self, message: &str) {
        self.record(SurfaceEvent::LoadFailure(message.to_string()));
    }

    fn show_message(&self, banner: MessageBanner) {
        self.record(SurfaceEvent::Message(banner));
    }

    fn schedule_message_hide(&self, delay_ms: u32) {
        self.record(SurfaceEvent::ScheduleHide(delay_ms));
    }

    fn reset_form(&self) {
        self.record(SurfaceEvent::ResetForm);
    }

    fn remove_participant_row(&self, activity: &str, email: &str) {
        self.record(SurfaceEvent::RemoveRow {
            activity: activity.to_string(),
            email: email.to_string(),
        });
    }

    fn confirm(&self, prompt: &str) -> bool {
        self.record(SurfaceEvent::Confirm(prompt.to_string()));
        self.confirm_answer.get()
    }

    fn alert(&self, message: &str) {
        self.record(SurfaceEvent::Alert(message.to_string()));
    }
}
