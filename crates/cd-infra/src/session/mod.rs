//! Session persistence.

mod token_store;

pub use token_store::{FileTokenStore, DEFAULT_TOKEN_FILE};
