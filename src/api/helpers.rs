//! Shared helpers for WASM API operations
//!
//! This module contains common patterns and utilities for serialization,
//! deserialization, error handling, and validation across all API operations.

use wasm_bindgen::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{FretDotType, FretMarkerType};

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| js_error(format!("{}: {}", error_context, e)))
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| js_error(format!("{}: {}", error_context, e)))
}

// ============================================================================
// Validation Helpers
// ============================================================================

/// Convert a dot type number (as sent by the palette) to the enum
pub fn dot_type_from_u8(value: u8) -> Result<FretDotType, String> {
    match value {
        0 => Ok(FretDotType::Normal),
        1 => Ok(FretDotType::Cross),
        2 => Ok(FretDotType::Square),
        3 => Ok(FretDotType::Triangle),
        _ => Err(format!("Invalid dot type: {} (must be 0-3)", value)),
    }
}

/// Convert a marker type number to the enum
pub fn marker_type_from_u8(value: u8) -> Result<FretMarkerType, String> {
    match value {
        0 => Ok(FretMarkerType::None),
        1 => Ok(FretMarkerType::Circle),
        2 => Ok(FretMarkerType::Cross),
        _ => Err(format!("Invalid marker type: {} (must be 0-2)", value)),
    }
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Log an error and convert it to a JsValue
pub fn js_error(msg: impl Into<String>) -> JsValue {
    let msg = msg.into();
    log::error!("{}", msg);
    JsValue::from_str(&msg)
}
