pub mod catalog;
pub mod clients;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod prompt;

pub use clients::{GenerationGateway, GenerationError, TextGenerator};
pub use error::{BrainstormError, Result};
pub use prompt::build_prompt;
