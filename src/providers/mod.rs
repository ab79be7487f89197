//! External generative content providers.

pub mod gemini;
