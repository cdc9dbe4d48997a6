#![deny(unsafe_code)]

/// Application shell and window chrome.
pub mod app;
/// Chat page: transcript state, input, and message list components.
pub mod chat;
