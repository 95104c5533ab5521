//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `projects`, `chat`, etc.) so
//! individual components can depend on small focused models. Each struct is
//! plain data provided through an `RwSignal` context; mutation helpers live
//! here so the transition logic is unit-testable off the browser.

pub mod ai;
pub mod chat;
pub mod project;
pub mod projects;
pub mod session;
