//! Core data models for statblock

mod config;
mod statblock;

pub use config::{Config, LogConfig, OutputConfig, ParserConfig};
pub use statblock::{
    AttackInfo, DamageType, Experience, Feature, FeatureType, HitPoints, ParseReport,
    ParseWarning, ParsedStatblock, StatblockKind,
};
