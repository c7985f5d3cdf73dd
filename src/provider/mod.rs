//! EdgeTTS tool provider: configuration-time credential validation.

mod error;
mod validator;

pub use error::CredentialError;
pub use validator::EdgeTtsProvider;
