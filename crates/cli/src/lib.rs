//! `memchat` command-line front end: argument parsing, config loading,
//! session wiring and the interactive loop.

pub mod bootstrap;
pub mod cli;
