//! Reusable UI components.

mod activity_item;
mod loading;
mod message_box;
mod participant_item;
mod signup_panel;

pub use activity_item::ActivityItem;
pub use loading::Loading;
pub use message_box::MessageBox;
pub use participant_item::ParticipantItem;
pub use signup_panel::SignupPanel;
