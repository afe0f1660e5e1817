//! Enum tables mapping raw attribute values to setting labels
//!
//! A raw enum value on the wire is an index into an ordered label
//! list. The same table is used in both directions: decode turns an
//! index into a label, encode turns a label back into its index.

use crate::error::CodecError;
use serde::Serialize;

/// An ordered list of labels for one enum-typed setting
///
/// Position and label form a total bijection within `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnumTable {
    name: &'static str,
    labels: &'static [&'static str],
}

impl EnumTable {
    /// Create a table for the named setting
    #[must_use]
    pub const fn new(name: &'static str, labels: &'static [&'static str]) -> Self {
        Self { name, labels }
    }

    /// Setting name this table belongs to
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All labels in wire order
    #[must_use]
    pub fn labels(&self) -> &'static [&'static str] {
        self.labels
    }

    /// Look up the label for a raw wire value
    pub fn label(&self, index: u16) -> Result<&'static str, CodecError> {
        self.labels
            .get(usize::from(index))
            .copied()
            .ok_or(CodecError::EnumIndexOutOfRange {
                setting: self.name,
                index,
                len: self.labels.len(),
            })
    }

    /// Look up the raw wire value for a label
    pub fn index(&self, label: &str) -> Result<u8, CodecError> {
        self.labels
            .iter()
            .position(|&l| l == label)
            .map(|pos| pos as u8)
            .ok_or_else(|| CodecError::UnknownEnumValue {
                setting: self.name,
                value: label.to_string(),
            })
    }
}

/// The enum tables for one firmware variant
///
/// Injected into the codec at construction so that variants with
/// differing tables (earlier firmware lacks the `multifunction`
/// switch mode) do not interfere with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumTables {
    pub switch_mode: EnumTable,
    pub switch_actions: EnumTable,
    pub relay_mode: EnumTable,
    pub long_press_mode: EnumTable,
    pub operation_mode: EnumTable,
    pub interlock_mode: EnumTable,
}

impl EnumTables {
    /// Tables for the current firmware generation
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            switch_mode: EnumTable::new(
                "switch_mode",
                &["toggle", "momentary", "multifunction"],
            ),
            switch_actions: EnumTable::new("switch_actions", &["onOff", "offOn", "toggle"]),
            relay_mode: EnumTable::new(
                "relay_mode",
                &["unlinked", "front", "single", "double", "triple", "long"],
            ),
            long_press_mode: EnumTable::new(
                "long_press_mode",
                &["none", "levelCtrlUp", "levelCtrlDown"],
            ),
            operation_mode: EnumTable::new("operation_mode", &["server", "client"]),
            interlock_mode: EnumTable::new(
                "interlock_mode",
                &["none", "mutualExclusion", "opposite"],
            ),
        }
    }
}

/// Every action a button endpoint can report, in the order the
/// device registry advertises them
pub const ACTION_LABELS: [&str; 5] = ["single", "double", "triple", "hold", "release"];

/// Decode a `genMultistateInput` present value into a button action
///
/// Devices occasionally send transitional values outside this set;
/// those decode to `None` and produce no action.
#[must_use]
pub fn action_label(present_value: u16) -> Option<&'static str> {
    match present_value {
        0 => Some("release"),
        1 => Some("single"),
        2 => Some("double"),
        3 => Some("triple"),
        255 => Some("hold"),
        _ => None,
    }
}
