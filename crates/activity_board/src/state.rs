//! Page state for the board and the actions that change it.

use crate::banner::MessageBanner;
use crate::render::{ActivityCard, BoardView, SelectOption};

/// What the activities list area currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListState {
    #[default]
    Loading,
    Ready(BoardView),
    Failed(String),
}

impl ListState {
    pub fn cards(&self) -> &[ActivityCard] {
        match self {
            ListState::Ready(view) => &view.cards,
            _ => &[],
        }
    }
}

/// Values of the signup form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub activity: String,
}

/// State behind the whole board page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    pub list: ListState,
    /// Activity select options, placeholder first
    pub options: Vec<SelectOption>,
    pub banner: MessageBanner,
    pub form: SignupForm,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            list: ListState::Loading,
            options: vec![SelectOption::placeholder()],
            banner: MessageBanner::Hidden,
            form: SignupForm::default(),
        }
    }
}

/// A change to the board page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardAction {
    /// Replace the list and select options wholesale.
    Loaded(BoardView),
    /// Replace the list with a fixed failure message.
    LoadFailed(String),
    RemoveParticipant { activity: String, email: String },
    ShowMessage(MessageBanner),
    HideMessage,
    ResetForm,
    EditEmail(String),
    SelectActivity(String),
}

impl BoardState {
    /// Apply one action.
    pub fn apply(&mut self, action: BoardAction) {
        match action {
            BoardAction::Loaded(view) => {
                self.options = view.options.clone();
                if !self.options.iter().any(|o| o.value == self.form.activity) {
                    self.form.activity.clear();
                }
                self.list = ListState::Ready(view);
            }
            BoardAction::LoadFailed(message) => {
                self.list = ListState::Failed(message);
            }
            BoardAction::RemoveParticipant { activity, email } => {
                if let ListState::Ready(view) = &mut self.list {
                    view.remove_participant(&activity, &email);
                }
            }
            BoardAction::ShowMessage(banner) => self.banner = banner,
            BoardAction::HideMessage => self.banner = MessageBanner::Hidden,
            BoardAction::ResetForm => self.form = SignupForm::default(),
            BoardAction::EditEmail(email) => self.form.email = email,
            BoardAction::SelectActivity(activity) => self.form.activity = activity,
        }
    }
}
