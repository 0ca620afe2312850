//! Car search with instant suggestions
//!
//! The suggestion engine, its debounced background search, the saved-vehicle
//! garage and the payment calculator, plus the terminal UI and CLI built on
//! top of them.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod garage;
pub mod payment;
pub mod search;
pub mod suggest;
pub mod theme;
pub mod widgets;


pub use error::CarfinderError;
