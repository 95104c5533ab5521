//! Reusable view components shared across pages.

pub mod chat_panel;
pub mod collaborator_modal;
pub mod project_card;
