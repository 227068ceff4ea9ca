//! Text-generation provider implementations.
//!
//! Each provider implements [`TextGenerator`](crate::llms::base_llm::TextGenerator)
//! and handles authentication, request formatting and response parsing for
//! its service.
//!
//! | Provider | Module |
//! |----------|--------|
//! | Google Gemini / Vertex AI | [`gemini`] |

pub mod gemini;
