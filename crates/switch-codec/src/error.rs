//! Error types for the switch codec

use thiserror::Error;

/// Errors that can occur while translating reports and settings
///
/// None of these are fatal to the host: a report that fails to decode
/// is dropped, a write that fails to encode is suppressed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Endpoint id has no entry in the logical endpoint map
    #[error("Unknown endpoint id: {0}")]
    UnknownEndpoint(u8),

    /// Requested label is not in the enum table for this setting
    #[error("Unknown value '{value}' for {setting}")]
    UnknownEnumValue {
        setting: &'static str,
        value: String,
    },

    /// Reported enum index falls outside the table bounds
    #[error("Enum index {index} out of range for {setting} ({len} entries)")]
    EnumIndexOutOfRange {
        setting: &'static str,
        index: u16,
        len: usize,
    },

    /// Setting name is not part of this device's configuration surface
    #[error("Unknown setting: {0}")]
    UnknownSetting(String),
}
