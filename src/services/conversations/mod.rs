//! Conversations service for the Conversations API.
//!
//! Lists, reads, starts, replies to and (un)archives conversations.

mod requests;
mod responses;
mod service;

pub use requests::*;
pub use responses::*;
pub use service::*;
