//! Pure rendering of activities into a view description.
//!
//! Nothing here touches the DOM: [`render_board`] maps a fetch response to
//! plain data that the frontend turns into elements and tests inspect
//! directly.

use core_types::{Activities, Activity, Participant, capitalize_words};

/// Text shown in the list area when activities cannot be loaded.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load activities. Please try again later.";

/// Text shown in place of an empty roster.
pub const EMPTY_ROSTER_MESSAGE: &str = "No participants yet";

/// Label of the leading empty option in the activity select.
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

/// One option of the activity select control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn placeholder() -> Self {
        Self {
            value: String::new(),
            label: SELECT_PLACEHOLDER.to_string(),
        }
    }

    fn for_activity(name: &str) -> Self {
        Self {
            value: name.to_string(),
            label: name.to_string(),
        }
    }
}

/// One row of a participant roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRow {
    /// Initials shown in the avatar
    pub avatar: String,
    /// Capitalized display name
    pub name: String,
    /// "Joined · ..." annotation
    pub joined: Option<String>,
    /// Role badge text
    pub role: Option<String>,
    /// Removal key; rows without one cannot be unregistered
    pub email: Option<String>,
    /// The participant this row was rendered from
    pub participant: Participant,
}

impl ParticipantRow {
    pub fn from_participant(participant: &Participant) -> Self {
        let profile = participant.normalize();

        Self {
            avatar: profile.initials,
            name: capitalize_words(&profile.display_name),
            joined: participant.joined_at().map(|j| format!("Joined · {j}")),
            role: participant.role().map(str::to_string),
            email: profile.email,
            participant: participant.clone(),
        }
    }
}

/// Participants section of an activity card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantsSection {
    /// Empty-state marker, no list element
    Empty,
    List(Vec<ParticipantRow>),
}

impl ParticipantsSection {
    pub fn rows(&self) -> &[ParticipantRow] {
        match self {
            ParticipantsSection::Empty => &[],
            ParticipantsSection::List(rows) => rows,
        }
    }
}

/// A rendered activity card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub title: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: ParticipantsSection,
}

impl ActivityCard {
    pub fn from_activity(activity: &Activity) -> Self {
        let participants = if activity.participants.is_empty() {
            ParticipantsSection::Empty
        } else {
            ParticipantsSection::List(
                activity
                    .participants
                    .iter()
                    .map(ParticipantRow::from_participant)
                    .collect(),
            )
        };

        Self {
            title: activity.name.clone(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            participants,
        }
    }

    /// "Schedule: ..." line.
    pub fn schedule_line(&self) -> String {
        format!("Schedule: {}", self.schedule)
    }

    /// "Availability: N spots left" line.
    pub fn availability_line(&self) -> String {
        format!("Availability: {} spots left", self.spots_left)
    }

    /// Drop the row for `email`. Returns whether a row was removed.
    fn remove_participant(&mut self, email: &str) -> bool {
        let ParticipantsSection::List(rows) = &mut self.participants else {
            return false;
        };

        let before = rows.len();
        rows.retain(|row| row.email.as_deref() != Some(email));
        let removed = rows.len() != before;

        if rows.is_empty() {
            self.participants = ParticipantsSection::Empty;
        }
        removed
    }
}

/// Everything the board shows for one fetch response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardView {
    pub cards: Vec<ActivityCard>,
    /// Select options, placeholder first
    pub options: Vec<SelectOption>,
}

impl BoardView {
    pub fn card(&self, title: &str) -> Option<&ActivityCard> {
        self.cards.iter().find(|c| c.title == title)
    }

    /// Remove a participant row locally, ahead of the next resync.
    ///
    /// Only the row goes away; `spots_left` stays as rendered until the
    /// server's numbers come back.
    pub fn remove_participant(&mut self, activity: &str, email: &str) -> bool {
        self.cards
            .iter_mut()
            .find(|c| c.title == activity)
            .is_some_and(|card| card.remove_participant(email))
    }
}

/// Render a fetch response into cards and select options.
pub fn render_board(activities: &Activities) -> BoardView {
    let cards = activities.iter().map(ActivityCard::from_activity).collect();

    let options = std::iter::once(SelectOption::placeholder())
        .chain(activities.iter().map(|a| SelectOption::for_activity(&a.name)))
        .collect();

    BoardView { cards, options }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::ParticipantRecord;

    fn activity(name: &str, max: u32, participants: Vec<Participant>) -> Activity {
        Activity {
            name: name.to_string(),
            description: format!("{name} description"),
            schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
            max_participants: max,
            participants,
        }
    }

    fn emails(list: &[&str]) -> Vec<Participant> {
        list.iter().map(|e| Participant::Email(e.to_string())).collect()
    }

    #[test]
    fn test_spots_left_for_every_card() {
        let activities = Activities::new(vec![
            activity("Chess Club", 12, emails(&["a@x.edu", "b@x.edu"])),
            activity("Gym Class", 0, vec![]),
            activity("Tiny", 1, emails(&["a@x.edu", "b@x.edu", "c@x.edu"])),
        ]);

        let view = render_board(&activities);

        for (card, act) in view.cards.iter().zip(activities.iter()) {
            assert_eq!(
                card.spots_left,
                i64::from(act.max_participants) - act.participants.len() as i64
            );
        }
        assert_eq!(view.card("Tiny").unwrap().spots_left, -2);
        assert_eq!(
            view.card("Tiny").unwrap().availability_line(),
            "Availability: -2 spots left"
        );
    }

    #[test]
    fn test_empty_roster_renders_marker() {
        let view = render_board(&Activities::new(vec![activity("Gym Class", 30, vec![])]));

        let card = view.card("Gym Class").unwrap();
        assert_eq!(card.participants, ParticipantsSection::Empty);
        assert!(card.participants.rows().is_empty());
    }

    #[test]
    fn test_cards_follow_response_order() {
        let activities = Activities::new(vec![
            activity("Zeta", 5, vec![]),
            activity("Alpha", 5, vec![]),
        ]);

        let view = render_board(&activities);
        let titles: Vec<&str> = view.cards.iter().map(|c| c.title.as_str()).collect();

        assert_eq!(titles, vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_options_start_with_placeholder() {
        let activities = Activities::new(vec![
            activity("Chess Club", 12, vec![]),
            activity("Art Studio", 8, vec![]),
        ]);

        let view = render_board(&activities);

        assert_eq!(view.options.len(), 3);
        assert_eq!(view.options[0], SelectOption::placeholder());
        assert_eq!(view.options[0].value, "");
        assert_eq!(view.options[1].value, "Chess Club");
        assert_eq!(view.options[2].label, "Art Studio");
    }

    #[test]
    fn test_empty_response_still_has_placeholder() {
        let view = render_board(&Activities::default());

        assert!(view.cards.is_empty());
        assert_eq!(view.options, vec![SelectOption::placeholder()]);
    }

    #[test]
    fn test_participant_row_from_email() {
        let row = ParticipantRow::from_participant(&Participant::Email(
            "john.doe@example.com".to_string(),
        ));

        assert_eq!(row.avatar, "JD");
        assert_eq!(row.name, "John Doe");
        assert_eq!(row.joined, None);
        assert_eq!(row.role, None);
        assert_eq!(row.email.as_deref(), Some("john.doe@example.com"));
    }

    #[test]
    fn test_participant_row_from_record() {
        let row = ParticipantRow::from_participant(&Participant::Record(ParticipantRecord {
            email: Some("ana@example.com".to_string()),
            name: Some("ana li".to_string()),
            role: Some("Captain".to_string()),
            joined_at: Some("2024-09-01".to_string()),
        }));

        assert_eq!(row.avatar, "AL");
        assert_eq!(row.name, "Ana Li");
        assert_eq!(row.joined.as_deref(), Some("Joined · 2024-09-01"));
        assert_eq!(row.role.as_deref(), Some("Captain"));
    }

    #[test]
    fn test_schedule_line() {
        let card = ActivityCard::from_activity(&activity("Chess Club", 12, vec![]));

        assert_eq!(card.schedule_line(), "Schedule: Fridays, 3:30 PM - 5:00 PM");
    }

    #[test]
    fn test_remove_participant_row() {
        let mut view = render_board(&Activities::new(vec![activity(
            "Chess Club",
            12,
            emails(&["a@x.edu", "b@x.edu"]),
        )]));

        assert!(view.remove_participant("Chess Club", "a@x.edu"));
        let rows = view.card("Chess Club").unwrap().participants.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].email.as_deref(), Some("b@x.edu"));

        assert!(!view.remove_participant("Chess Club", "missing@x.edu"));
        assert!(!view.remove_participant("No Such Club", "b@x.edu"));

        assert!(view.remove_participant("Chess Club", "b@x.edu"));
        assert_eq!(
            view.card("Chess Club").unwrap().participants,
            ParticipantsSection::Empty
        );
    }
}
