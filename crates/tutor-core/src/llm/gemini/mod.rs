//! Gemini `generateContent` wire types and transport

mod request;
mod response;
mod sanitize;
mod transport;

pub use request::{
    Content, GenerateContentRequest, GenerationConfig, GoogleSearch, HarmCategory, Part,
    RequestOptions, SafetySetting, Tool, DEFAULT_SAFETY_THRESHOLD,
};
pub use response::{Candidate, GenerateContentResponse};
pub use sanitize::sanitize_provider_error_text;
pub use transport::{
    DEFAULT_BASE_URL, GeminiTransport, ModelTransport, TransportError, TransportReply,
};

#[cfg(test)]
pub use transport::MockModelTransport;
