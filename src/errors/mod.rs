//! Error types and error handling for the compiler.
//!
//! This module defines the classified error type used throughout the
//! pipeline. It includes:
//!
//! - Specific error variants for every failure the pipeline can hit
//! - A behavior classification (fatal input/semantic errors vs.
//!   recoverable unsupported-feature conditions)
//! - Display formatting via thiserror

pub mod errors;
