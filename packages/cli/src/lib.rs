// ABOUTME: Library half of the resonance binary
// ABOUTME: Environment bootstrap, form assembly from flags and terminal rendering

pub mod config;
pub mod form;
pub mod render;
