//! Rendering and sync logic for the activity sign-up board.
//!
//! The board fetches activities through an [`HttpTransport`], turns them
//! into a [`BoardView`] with a pure render function, and drives an injected
//! [`BoardSurface`] for everything visible: the activity list, the signup
//! form, the message banner and confirmation dialogs.

mod banner;
mod board;
mod client;
mod config;
mod error;
mod render;
mod state;
mod surface;
mod transport;

#[cfg(test)]
mod testing;

pub use banner::{DEFAULT_HIDE_DELAY_MS, MessageBanner};
pub use board::{ActivityBoard, RemovalOutcome};
pub use client::ActivityClient;
pub use config::BoardConfig;
pub use error::{BoardError, Result};
pub use render::{
    ActivityCard, BoardView, EMPTY_ROSTER_MESSAGE, LOAD_FAILURE_MESSAGE, ParticipantRow,
    ParticipantsSection, SELECT_PLACEHOLDER, SelectOption, render_board,
};
pub use state::{BoardAction, BoardState, ListState, SignupForm};
pub use surface::BoardSurface;
pub use transport::HttpTransport;
