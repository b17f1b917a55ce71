//! Message banner shown after a signup attempt.

/// Default delay before a visible banner hides again.
pub const DEFAULT_HIDE_DELAY_MS: u32 = 5000;

/// State of the message banner.
///
/// Any signup result makes the banner visible; the hide timer returns it to
/// [`MessageBanner::Hidden`]. Timers are not cancelled by a newer result, so
/// the first timer to elapse hides whatever is showing at that moment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MessageBanner {
    #[default]
    Hidden,
    Success(String),
    Error(String),
}

impl MessageBanner {
    pub fn success(text: impl Into<String>) -> Self {
        MessageBanner::Success(text.into())
    }

    pub fn error(text: impl Into<String>) -> Self {
        MessageBanner::Error(text.into())
    }

    /// CSS class for the message element.
    pub fn class(&self) -> &'static str {
        match self {
            MessageBanner::Hidden => "hidden",
            MessageBanner::Success(_) => "success",
            MessageBanner::Error(_) => "error",
        }
    }

    pub fn text(&self) -> &str {
        match self {
            MessageBanner::Hidden => "",
            MessageBanner::Success(text) | MessageBanner::Error(text) => text,
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, MessageBanner::Hidden)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, MessageBanner::Error(_))
    }
}
