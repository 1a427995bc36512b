//! Error types for fret diagram conversion
//!
//! Only whole-document problems are errors. A malformed dot, marker or barre
//! inside an otherwise readable document degrades to its empty value and is
//! logged instead.

use thiserror::Error;

/// Fatal errors while reading a persisted diagram
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReadError {
    /// XML is malformed (not well-formed)
    #[error("Invalid XML: {0}")]
    InvalidXml(String),

    /// Root element is not the one the reader handles
    #[error("Expected <{expected}>, found <{found}>")]
    UnexpectedRoot { expected: String, found: String },

    /// Document version the reader does not understand
    #[error("Unsupported fret diagram version: {0}")]
    UnsupportedVersion(i32),

    /// File could not be read
    #[error("Failed to read '{path}': {message}")]
    Io { path: String, message: String },
}

/// Errors while writing a diagram
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("XML write failed: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML output is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Errors from strict compact-notation parsing
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompactError {
    #[error("Invalid character '{ch}' at position {position} (expected X, O, - or a digit)")]
    InvalidCharacter { ch: char, position: usize },

    #[error("Compact notation is empty")]
    Empty,
}
