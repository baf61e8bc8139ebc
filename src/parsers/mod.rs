//! File parsers for translation sources.
//!
//! - `ts`: Qt Linguist `.ts` XML parser (uses quick-xml events)

pub mod ts;
