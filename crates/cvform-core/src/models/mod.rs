//! Data models shared by the validator, extractor and report formatter.

pub mod config;
pub mod fields;
pub mod profile;
