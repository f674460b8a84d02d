//! GUI module for the Omok game
//!
//! A thin egui/eframe front end over [`crate::GameEngine`]: it forwards
//! clicks and frame time to the engine and renders what comes back.

mod app;
mod board_view;
mod theme;

pub use app::{AppState, OmokApp};
