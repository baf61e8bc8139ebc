//! Rule implementations for tscat.
//!
//! Each rule is a pure function over one loaded catalog (or one load
//! failure) and returns its own issue type.
//!
//! ## Module Structure
//!
//! - `helpers`: Entry iteration shared by the rules
//! - `unfinished`: Live entries still waiting for a translation
//! - `empty_translation`: Finished entries without any text
//! - `placeholders`: `%1` / `%n` markers that differ from the source
//! - `unknown_status`: Unrecognised `type` attributes
//! - `parse_error`: Files that could not be loaded

pub mod empty_translation;
pub mod helpers;
pub mod parse_error;
pub mod placeholders;
pub mod unfinished;
pub mod unknown_status;

pub use empty_translation::check_empty_translations;
pub use parse_error::parse_error_issue;
pub use placeholders::check_placeholders;
pub use unfinished::check_unfinished;
pub use unknown_status::check_unknown_status;
