// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across Resonance

// Generative API credentials and endpoint
pub const RESONANCE_GEMINI_API_KEY: &str = "RESONANCE_GEMINI_API_KEY";
pub const RESONANCE_GEMINI_BASE_URL: &str = "RESONANCE_GEMINI_BASE_URL";
pub const RESONANCE_GEMINI_API_VERSION: &str = "RESONANCE_GEMINI_API_VERSION";
pub const RESONANCE_GEMINI_MODEL: &str = "RESONANCE_GEMINI_MODEL";

// HTTP client timeouts
pub const RESONANCE_HTTP_REQUEST_TIMEOUT_SECS: &str = "RESONANCE_HTTP_REQUEST_TIMEOUT_SECS";
pub const RESONANCE_HTTP_CONNECT_TIMEOUT_SECS: &str = "RESONANCE_HTTP_CONNECT_TIMEOUT_SECS";

// Logging
pub const RUST_LOG: &str = "RUST_LOG";

// Public defaults. There is intentionally no default for the API key.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_API_VERSION: &str = "v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
