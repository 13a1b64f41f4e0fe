//! Tests for the Conversations API client.

#[cfg(test)]
mod client_tests;
