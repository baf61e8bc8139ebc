//! tscat - catalog, checker and lookup tool for Qt Linguist translation files
//!
//! tscat loads `.ts` translation sources into a read-only [`catalog::Catalog`]
//! that answers lookups with the finished translation or falls back to the
//! source string. On top of the catalog it provides a checker CLI and an MCP
//! server for translation work.
//!
//! ## Module Structure
//!
//! - `catalog`: In-memory catalog, lookup and plural rules
//! - `cli`: Command-line interface layer
//! - `commands`: Check orchestration shared by the CLI and MCP server
//! - `config`: Configuration file loading and parsing
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation
//! - `parsers`: `.ts` document parser
//! - `rules`: Detection rules for translation files
//! - `scan`: Discovery and parallel loading of translation files
//! - `utils`: Shared utility functions
//! - `writer`: `.ts` and JSON serialization

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod issues;
pub mod mcp;
pub mod parsers;
pub mod rules;
pub mod scan;
pub mod utils;
pub mod writer;
