//! Shared types for the memchat workspace: the error enum, the
//! configuration tree, and structured trace events.

pub mod config;
pub mod error;
pub mod trace;
