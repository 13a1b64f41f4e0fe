//! Messages service for the Conversations API.
//!
//! Sends messages outside of an existing conversation and looks messages up.

mod requests;
mod responses;
mod service;

pub use requests::*;
pub use responses::*;
pub use service::*;
