//! Weather lookup TUI
//!
//! Type a city, press Enter, get the current temperature, wind speed and
//! weather code from a backend weather endpoint. The library exposes the
//! store pieces and views so they can be tested without a terminal.

pub mod action;
pub mod api;
pub mod components;
pub mod conditions;
pub mod effect;
pub mod error;
pub mod reducer;
pub mod state;
