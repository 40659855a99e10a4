//! Pipeline nodes.
//!
//! Each node consumes the [`ConversationState`](crate::ConversationState)
//! by value and returns an updated copy. [`classify`] always runs first;
//! exactly one of [`weather`] or [`joke`] runs after it and sets the
//! final answer.

pub mod classify;
pub mod joke;
pub mod weather;
