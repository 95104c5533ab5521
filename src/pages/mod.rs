//! Page-level views, one per screen.

pub mod home;
pub mod login;
pub mod playground;
pub mod project;
pub mod register;
