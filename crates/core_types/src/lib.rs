//! Core types for the activity sign-up board.
//!
//! This crate defines the activity and participant model shared by the
//! board controller and the web frontend, along with the participant
//! normalization used when rendering rosters.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Display name used when a participant yields no readable text.
pub const DEFAULT_DISPLAY_NAME: &str = "Participant";

/// Structured participant record as sent by the activities API.
///
/// Every field is optional on the wire. A record without an email can be
/// displayed but not unregistered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantRecord {
    /// Email address, used as the removal key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Human readable name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-form role shown as a badge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Join timestamp, displayed verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<String>,
}

/// A person enrolled in an activity.
///
/// The API sends either a bare email string or a structured record. Any
/// other entry (`null`, a number) reads as an empty record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, from = "ParticipantEntry")]
pub enum Participant {
    Email(String),
    Record(ParticipantRecord),
}

/// Roster entry as it appears on the wire.
#[derive(Deserialize)]
#[serde(untagged)]
enum ParticipantEntry {
    Email(String),
    Record(ParticipantRecord),
    Unknown(serde::de::IgnoredAny),
}

impl From<ParticipantEntry> for Participant {
    fn from(entry: ParticipantEntry) -> Self {
        match entry {
            ParticipantEntry::Email(email) => Participant::Email(email),
            ParticipantEntry::Record(record) => Participant::Record(record),
            ParticipantEntry::Unknown(_) => Participant::Record(ParticipantRecord::default()),
        }
    }
}

/// Normalized participant data ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantProfile {
    pub display_name: String,
    pub initials: String,
    pub email: Option<String>,
}

impl Participant {
    /// Create a structured participant with just a name and email.
    pub fn record(email: impl Into<String>, name: impl Into<String>) -> Self {
        Participant::Record(ParticipantRecord {
            email: Some(email.into()),
            name: Some(name.into()),
            ..Default::default()
        })
    }

    /// Email address identifying this participant, if it has one.
    pub fn email(&self) -> Option<&str> {
        let email = match self {
            Participant::Email(email) => Some(email.as_str()),
            Participant::Record(record) => record.email.as_deref(),
        };
        email.map(str::trim).filter(|e| !e.is_empty())
    }

    pub fn role(&self) -> Option<&str> {
        match self {
            Participant::Email(_) => None,
            Participant::Record(record) => record.role.as_deref().filter(|r| !r.is_empty()),
        }
    }

    pub fn joined_at(&self) -> Option<&str> {
        match self {
            Participant::Email(_) => None,
            Participant::Record(record) => record.joined_at.as_deref().filter(|j| !j.is_empty()),
        }
    }

    /// Name to show for this participant.
    ///
    /// Prefers the record's name, then the email local part with dots
    /// turned into spaces, then [`DEFAULT_DISPLAY_NAME`].
    pub fn display_name(&self) -> String {
        let raw = match self {
            Participant::Email(email) => email_local_part(email),
            Participant::Record(record) => match record.name.as_deref() {
                Some(name) if !name.is_empty() => name.to_string(),
                _ => record
                    .email
                    .as_deref()
                    .map(email_local_part)
                    .unwrap_or_default(),
            },
        };

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            DEFAULT_DISPLAY_NAME.to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// Collapse either participant shape into display name, initials and email.
    pub fn normalize(&self) -> ParticipantProfile {
        let display_name = self.display_name();
        let initials = initials(&display_name);

        ParticipantProfile {
            display_name,
            initials,
            email: self.email().map(str::to_string),
        }
    }
}

/// Local part of an email address with dots replaced by spaces.
fn email_local_part(email: &str) -> String {
    email.split('@').next().unwrap_or("").replace('.', " ")
}

/// Uppercased first letters of up to two whitespace-separated tokens.
pub fn initials(name: &str) -> String {
    let initials: String = name
        .split_whitespace()
        .filter_map(|token| token.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();

    if initials.is_empty() {
        name.chars().take(2).flat_map(char::to_uppercase).collect()
    } else {
        initials
    }
}

/// Uppercase the first character of every word.
///
/// A word starts at an alphanumeric or `_` character that does not follow
/// another one, so `o'brien` becomes `O'Brien`.
pub fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        let is_word = c.is_alphanumeric() || c == '_';
        if is_word && !in_word {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        in_word = is_word;
    }

    out
}

/// A signup-able event with capacity and schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    /// Unique key within one fetch response
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Participants in server order
    pub participants: Vec<Participant>,
}

impl Activity {
    /// Remaining capacity. Negative when the activity is over-enrolled.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

/// Activity body as it appears under its name in the API mapping.
#[derive(Serialize, Deserialize)]
struct ActivityBody {
    #[serde(default)]
    description: String,
    #[serde(default)]
    schedule: String,
    #[serde(default)]
    max_participants: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    participants: Vec<Participant>,
}

/// `"participants": null` reads as an empty roster.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Participant>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Participant>>::deserialize(deserializer)?.unwrap_or_default())
}

impl ActivityBody {
    fn into_activity(self, name: String) -> Activity {
        Activity {
            name,
            description: self.description,
            schedule: self.schedule,
            max_participants: self.max_participants,
            participants: self.participants,
        }
    }
}

/// All activities from one fetch, in the order the server listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Activities(Vec<Activity>);

impl Activities {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self(activities)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up an activity by name.
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.iter().find(|a| a.name == name)
    }
}

impl<'a> IntoIterator for &'a Activities {
    type Item = &'a Activity;
    type IntoIter = std::slice::Iter<'a, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for Activities {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for activity in &self.0 {
            let body = ActivityBody {
                description: activity.description.clone(),
                schedule: activity.schedule.clone(),
                max_participants: activity.max_participants,
                participants: activity.participants.clone(),
            };
            map.serialize_entry(&activity.name, &body)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Activities {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ActivitiesVisitor;

        impl<'de> Visitor<'de> for ActivitiesVisitor {
            type Value = Activities;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Activities, M::Error> {
                let mut activities: Vec<Activity> =
                    Vec::with_capacity(access.size_hint().unwrap_or(0));

                while let Some((name, body)) = access.next_entry::<String, ActivityBody>()? {
                    // A repeated key keeps its first position with the last value.
                    match activities.iter_mut().find(|a| a.name == name) {
                        Some(existing) => *existing = body.into_activity(name),
                        None => activities.push(body.into_activity(name)),
                    }
                }

                Ok(Activities(activities))
            }
        }

        deserializer.deserialize_map(ActivitiesVisitor)
    }
}
