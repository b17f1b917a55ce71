//! Board configuration from the host page.

use activity_board::BoardConfig;

/// `<meta>` tag naming the activities API origin.
const API_BASE_META: &str = "activity-api-base";

/// Build the board config, taking the API origin from the page if set.
pub fn load() -> BoardConfig {
    let config = BoardConfig::default();

    match meta_content(API_BASE_META) {
        Some(api_base) => config.with_api_base(api_base),
        None => config,
    }
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()??;

    element
        .get_attribute("content")
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}
