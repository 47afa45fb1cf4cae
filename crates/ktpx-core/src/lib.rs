//! Core library for Indonesian KTP (identity card) OCR processing.
//!
//! This crate provides:
//! - Rule-based field extraction from raw OCR text (NIK, name, birthplace,
//!   birth date, address)
//! - A structured, serde-serializable record model where every field is
//!   independently optional
//! - Extraction configuration (name-window width, extra ignore words)
//!
//! The extractor is a pure function over a sequence of text lines: it never
//! fails, never touches I/O, and leaves a field unset when its anchor
//! pattern is not found.

pub mod error;
pub mod ktp;
pub mod models;

pub use error::{KtpxError, Result};
pub use ktp::{ExtractionResult, KtpExtractor, RuleBasedParser};
pub use models::config::{ExtractionConfig, KtpxConfig};
pub use models::record::KtpRecord;
