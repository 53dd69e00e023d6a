//! Grid snake: a deterministic game core plus a terminal front end.
//!
//! The core is [`game::GameState`] and its transition operations, driven by
//! an injected [`random::RandomSource`]. Everything under [`renderer`],
//! [`ui`], [`input`] and [`terminal_runtime`] only reads that state.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod random;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
