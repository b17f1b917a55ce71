//! Activity card component.

use activity_board::{ActivityCard, EMPTY_ROSTER_MESSAGE, ParticipantsSection};
use core_types::Participant;
use yew::prelude::*;

use crate::components::ParticipantItem;

/// Properties for ActivityItem component.
#[derive(Properties, PartialEq)]
pub struct ActivityItemProps {
    pub card: ActivityCard,
    /// Fired with (activity name, participant) when a row asks for removal
    pub on_remove: Callback<(String, Participant)>,
}

/// Activity card: title, description, schedule, availability and roster.
#[function_component(ActivityItem)]
pub fn activity_item(props: &ActivityItemProps) -> Html {
    let card = &props.card;

    let on_remove = {
        let title = card.title.clone();
        props
            .on_remove
            .reform(move |participant: Participant| (title.clone(), participant))
    };

    let roster = match &card.participants {
        ParticipantsSection::Empty => html! {
            <div class="empty">{ EMPTY_ROSTER_MESSAGE }</div>
        },
        ParticipantsSection::List(rows) => html! {
            <ul class="participant-list">
                { for rows.iter().map(|row| html! {
                    <ParticipantItem row={row.clone()} on_remove={on_remove.clone()} />
                })}
            </ul>
        },
    };

    let availability_class = if card.spots_left > 0 {
        "availability"
    } else {
        "availability full"
    };

    html! {
        <div class="activity-card">
            <h4>{ &card.title }</h4>
            <p>{ &card.description }</p>
            <p class="schedule">{ card.schedule_line() }</p>
            <p class={availability_class}>{ card.availability_line() }</p>
            <div class="participants">
                <h5>{"Participants"}</h5>
                { roster }
            </div>
        </div>
    }
}
