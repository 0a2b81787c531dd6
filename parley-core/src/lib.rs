//! Conversation state machine for `Parley`.
//!
//! Everything here is synchronous and free of I/O: the roster, the
//! composer and its typing debounce, per-conversation timelines, and the
//! roster/conversation navigation. [`session::Session`] ties them together
//! behind a single action-based interface.

pub mod clock;
pub mod composer;
pub mod contact;
pub mod message;
pub mod navigation;
pub mod session;
pub mod timeline;
pub mod typing;
