//! statblock - Statblock Importer
//!
//! Parses plaintext adversary and environment statblocks, as copied from a
//! web tool, into structured records for a document builder.
//!
//! # Features
//!
//! - Name, tier and type lines in modern and legacy layouts
//! - Difficulty, attack bonus and standard attack lines
//! - Inline and multi-line experiences
//! - Motives & Tactics, including the header-plus-continuation form
//! - Features with strict and fallback header forms
//! - Per-line diagnostics for text that could not be attributed

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod parser;
pub mod utils;

pub use error::ParseError;
pub use model::{Config, Feature, FeatureType, ParseReport, ParsedStatblock, ParserConfig};
pub use parser::{parse_statblock, StatblockParser};
