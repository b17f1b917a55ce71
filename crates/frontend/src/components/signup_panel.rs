//! Signup form component.

use activity_board::{SelectOption, SignupForm};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Properties for SignupPanel component.
#[derive(Properties, PartialEq)]
pub struct SignupPanelProps {
    pub form: SignupForm,
    /// Activity options, placeholder first
    pub options: Vec<SelectOption>,
    pub on_email: Callback<String>,
    pub on_activity: Callback<String>,
    pub on_submit: Callback<()>,
}

/// Signup form with an email input and an activity select.
#[function_component(SignupPanel)]
pub fn signup_panel(props: &SignupPanelProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let oninput = props.on_email.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.value()
    });

    let onchange = props.on_activity.reform(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        select.value()
    });

    html! {
        <form id="signup-form" {onsubmit}>
            <div class="form-group">
                <label for="email">{"Student Email:"}</label>
                <input
                    type="email"
                    id="email"
                    required=true
                    placeholder="your-email@mergington.edu"
                    value={props.form.email.clone()}
                    {oninput}
                />
            </div>
            <div class="form-group">
                <label for="activity">{"Select Activity:"}</label>
                <select id="activity" required=true {onchange}>
                    { for props.options.iter().map(|option| html! {
                        <option
                            value={option.value.clone()}
                            selected={option.value == props.form.activity}
                        >
                            { &option.label }
                        </option>
                    })}
                </select>
            </div>
            <button type="submit">{"Sign Up"}</button>
        </form>
    }
}
