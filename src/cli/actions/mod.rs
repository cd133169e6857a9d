//! CLI actions

pub mod check;
pub mod export;
pub mod parse;
