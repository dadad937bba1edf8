// src/lib.rs

#[macro_use]
pub mod macros;

pub mod analysis;
pub mod book;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod file;
pub mod log;
pub mod progress;
pub mod runner;
pub mod specs;
pub mod store;

pub use book::BookRecord;
