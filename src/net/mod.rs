//! Network layer: typed payloads, REST client, and the realtime channel.
//!
//! DESIGN
//! ======
//! Every external payload crosses this boundary through a serde schema in
//! [`types`]; malformed responses are rejected here instead of leaking ad hoc
//! nested-field access into the UI.

pub mod api;
pub mod channel;
pub mod types;
