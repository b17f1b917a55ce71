//! Loading placeholder component.

use yew::prelude::*;

/// Loading placeholder shown until the first fetch completes.
#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="loading">
            <div class="spinner"></div>
            <p>{"Loading activities..."}</p>
        </div>
    }
}
