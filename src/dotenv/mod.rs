//! `.env` dotfile discovery and key lookup.
//!
//! The dotfile is found by walking upward from the module directory
//! ([`search`]) and read with a deliberately narrow line matcher
//! ([`parser`]) rather than a full dotenv grammar: only `NAME=value`
//! lines are recognised and everything else is skipped.

pub mod parser;
pub mod search;

pub use parser::{lookup, strip_quotes};
pub use search::find_env_file;
