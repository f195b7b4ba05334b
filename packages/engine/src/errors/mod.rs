//! Error types for the game engine.

pub mod domain;

pub use domain::GameError;
