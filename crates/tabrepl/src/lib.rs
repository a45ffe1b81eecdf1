//! Tabrepl - a command interpreter for small tables.
//!
//! This crate provides both a CLI application and a library for evaluating
//! tabrepl command lines (`mode`, `load_file`, `view`, `search`, `query`)
//! against an explicit [`session::Session`], with pluggable input and output.

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod commands;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod io;
pub mod line;
pub mod output;
pub mod repl;
pub mod session;

// Public CLI module (needed by binary)
pub mod cli;
