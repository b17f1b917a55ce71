//! View handles the board drives.

use crate::banner::MessageBanner;
use crate::render::BoardView;

/// Everything the board can show or ask the user.
///
/// The frontend implements this over its page state; tests implement it
/// with a recorder.
pub trait BoardSurface {
    /// Replace the activity list and select options.
    fn show_board(&self, view: BoardView);

    /// Replace the activity list with a fixed failure message.
    fn show_load_failure(&self, message: &str);

    fn show_message(&self, banner: MessageBanner);

    /// Arm a timer that hides the message banner after `delay_ms`.
    ///
    /// Earlier timers stay armed.
    fn schedule_message_hide(&self, delay_ms: u32);

    fn reset_form(&self);

    fn remove_participant_row(&self, activity: &str, email: &str);

    /// Ask the user to confirm. Returns `true` to proceed.
    fn confirm(&self, prompt: &str) -> bool;

    fn alert(&self, message: &str);
}
