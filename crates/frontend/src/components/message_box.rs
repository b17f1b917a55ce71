//! Signup result message component.

use activity_board::MessageBanner;
use yew::prelude::*;

/// Properties for MessageBox component.
#[derive(Properties, PartialEq)]
pub struct MessageBoxProps {
    pub banner: MessageBanner,
}

/// Message area below the signup form.
#[function_component(MessageBox)]
pub fn message_box(props: &MessageBoxProps) -> Html {
    html! {
        <div id="message" class={props.banner.class()}>
            { props.banner.text() }
        </div>
    }
}
