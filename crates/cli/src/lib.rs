//! Terminal output helpers for the Atlas command-line tool
//!
//! Provides shared CLI functionality:
//! - Status messages
//! - Number, capital and duration formatting
//! - Aligned label/value rows
//! - A spinner for network fetches

#![warn(missing_docs)]

pub mod output;
pub mod progress;
