//! Participant roster row component.

use activity_board::ParticipantRow;
use core_types::Participant;
use yew::prelude::*;

/// Properties for ParticipantItem component.
#[derive(Properties, PartialEq)]
pub struct ParticipantItemProps {
    pub row: ParticipantRow,
    /// Fired when the remove control is activated
    pub on_remove: Callback<Participant>,
}

/// One participant: avatar, name, optional joined date and role, remove control.
#[function_component(ParticipantItem)]
pub fn participant_item(props: &ParticipantItemProps) -> Html {
    let row = &props.row;

    let onclick = {
        let participant = row.participant.clone();
        props
            .on_remove
            .reform(move |_: MouseEvent| participant.clone())
    };

    html! {
        <li class="participant">
            <span class="avatar">{ &row.avatar }</span>
            <span class="participant-info">
                <span class="name">{ &row.name }</span>
                if let Some(joined) = &row.joined {
                    <span class="meta">{ joined }</span>
                }
            </span>
            if let Some(role) = &row.role {
                <span class="badge">{ role }</span>
            }
            <button
                type="button"
                class="remove-participant"
                title={format!("Unregister {}", row.name)}
                {onclick}
            >
                {"✕"}
            </button>
        </li>
    }
}
