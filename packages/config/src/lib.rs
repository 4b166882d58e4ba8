// ABOUTME: Configuration for Resonance
// ABOUTME: Environment variable names and validated settings for the generative API

pub mod constants;
pub mod settings;

pub use settings::{ConfigError, GeminiSettings};
