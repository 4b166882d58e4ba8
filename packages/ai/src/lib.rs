// ABOUTME: Generative API integration for Resonance
// ABOUTME: Gemini client, the GenerativeModel seam and strict structured-output parsing

pub mod error;
pub mod gemini;
pub mod model;
pub mod response;

pub use error::{GatewayError, GatewayResult, MalformedResponse};
pub use gemini::GeminiClient;
pub use model::{GenerationConfig, GenerativeModel};
pub use response::{parse_analysis, parse_social_analysis, parse_structured, strip_code_fences};
