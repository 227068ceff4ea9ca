//! Generative text backends.
//!
//! - [`base_llm`] - The [`TextGenerator`] capability trait
//! - [`providers`] - Concrete providers (Google Gemini)

pub mod base_llm;
pub mod providers;

pub use base_llm::TextGenerator;
pub use providers::gemini::GeminiGenerator;
