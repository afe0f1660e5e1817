//! Setting descriptors and wire-level request shapes
//!
//! Every configurable setting is described by a small data record:
//! which attribute carries it, how the value is typed on the wire,
//! and which enum table (if any) translates it. Encode, decode and
//! read paths all dispatch through these descriptors instead of
//! branching on setting names.

use crate::tables::{EnumTable, EnumTables};
use serde::Serialize;

/// Cluster carrying the switch configuration attributes
pub const CLUSTER_ON_OFF_SWITCH_CFG: &str = "genOnOffSwitchCfg";
/// Cluster carrying button action reports
pub const CLUSTER_MULTISTATE_INPUT: &str = "genMultistateInput";

/// Attribute name for multistate action values
pub const PRESENT_VALUE: &str = "presentValue";
/// Standard `genOnOffSwitchCfg` attribute name for switch actions
pub const SWITCH_ACTIONS: &str = "switchActions";

/// Manufacturer code accompanying every manufacturer-specific
/// attribute access (NXP/Jennic, the module vendor)
pub const JENNIC_MANUFACTURER_CODE: u16 = 0x1037;

/// Manufacturer-specific attribute ids on `genOnOffSwitchCfg`
pub mod attrs {
    pub const SWITCH_MODE: u16 = 0xFF00;
    pub const RELAY_MODE: u16 = 0xFF01;
    pub const MAX_PAUSE: u16 = 0xFF02;
    pub const MIN_LONG_PRESS: u16 = 0xFF03;
    pub const LONG_PRESS_MODE: u16 = 0xFF04;
    pub const OPERATION_MODE: u16 = 0xFF05;
    pub const INTERLOCK_MODE: u16 = 0xFF06;
}

/// ZCL data types this codec writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum WireType {
    Uint16 = 0x21,
    Enum8 = 0x30,
}

/// Reference to one attribute within the cluster namespace
///
/// Standard attributes go by their ZCL mnemonic; manufacturer-specific
/// ones by their private 16-bit id, which must be paired with the
/// manufacturer code on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttributeId {
    Standard(&'static str),
    Manufacturer(u16),
}

impl AttributeId {
    /// Whether this attribute requires the manufacturer code
    #[must_use]
    pub fn is_manufacturer_specific(&self) -> bool {
        matches!(self, AttributeId::Manufacturer(_))
    }
}

/// The closed set of configurable settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Setting {
    SwitchMode,
    SwitchActions,
    RelayMode,
    MaxPause,
    MinLongPress,
    LongPressMode,
    OperationMode,
    InterlockMode,
}

impl Setting {
    /// Setting key as published to the host
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Setting::SwitchMode => "switch_mode",
            Setting::SwitchActions => "switch_actions",
            Setting::RelayMode => "relay_mode",
            Setting::MaxPause => "max_pause",
            Setting::MinLongPress => "min_long_press",
            Setting::LongPressMode => "long_press_mode",
            Setting::OperationMode => "operation_mode",
            Setting::InterlockMode => "interlock_mode",
        }
    }
}

/// How one setting maps onto the wire
#[derive(Debug, Clone, Copy)]
pub struct SettingDescriptor {
    pub setting: Setting,
    pub attribute: AttributeId,
    /// Explicit wire type for manufacturer-specific writes; `None`
    /// for the standard path, where the stack infers the type
    pub wire_type: Option<WireType>,
    /// Enum table for label-typed settings; `None` for numeric ones
    pub table: Option<EnumTable>,
}

impl SettingDescriptor {
    /// The descriptor set for the current firmware generation,
    /// bound to the given variant's enum tables
    #[must_use]
    pub fn standard_set(tables: &EnumTables) -> Vec<SettingDescriptor> {
        vec![
            SettingDescriptor {
                setting: Setting::SwitchMode,
                attribute: AttributeId::Manufacturer(attrs::SWITCH_MODE),
                wire_type: Some(WireType::Enum8),
                table: Some(tables.switch_mode),
            },
            SettingDescriptor {
                setting: Setting::SwitchActions,
                attribute: AttributeId::Standard(SWITCH_ACTIONS),
                wire_type: None,
                table: Some(tables.switch_actions),
            },
            SettingDescriptor {
                setting: Setting::RelayMode,
                attribute: AttributeId::Manufacturer(attrs::RELAY_MODE),
                wire_type: Some(WireType::Enum8),
                table: Some(tables.relay_mode),
            },
            SettingDescriptor {
                setting: Setting::MaxPause,
                attribute: AttributeId::Manufacturer(attrs::MAX_PAUSE),
                wire_type: Some(WireType::Uint16),
                table: None,
            },
            SettingDescriptor {
                setting: Setting::MinLongPress,
                attribute: AttributeId::Manufacturer(attrs::MIN_LONG_PRESS),
                wire_type: Some(WireType::Uint16),
                table: None,
            },
            SettingDescriptor {
                setting: Setting::LongPressMode,
                attribute: AttributeId::Manufacturer(attrs::LONG_PRESS_MODE),
                wire_type: Some(WireType::Enum8),
                table: Some(tables.long_press_mode),
            },
            SettingDescriptor {
                setting: Setting::OperationMode,
                attribute: AttributeId::Manufacturer(attrs::OPERATION_MODE),
                wire_type: Some(WireType::Enum8),
                table: Some(tables.operation_mode),
            },
            SettingDescriptor {
                setting: Setting::InterlockMode,
                attribute: AttributeId::Manufacturer(attrs::INTERLOCK_MODE),
                wire_type: Some(WireType::Enum8),
                table: Some(tables.interlock_mode),
            },
        ]
    }
}

/// A decoded or to-be-encoded setting value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    /// Enum label, e.g. `"momentary"`
    Label(String),
    /// Raw unsigned value, e.g. a pause in milliseconds
    Number(u16),
}

impl From<&str> for SettingValue {
    fn from(label: &str) -> Self {
        SettingValue::Label(label.to_string())
    }
}

impl From<u16> for SettingValue {
    fn from(value: u16) -> Self {
        SettingValue::Number(value)
    }
}

/// One attribute write the host must send
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterWrite {
    pub cluster: &'static str,
    pub attribute: AttributeId,
    pub value: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wire_type: Option<WireType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer_code: Option<u16>,
}

/// One attribute read the host must send
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterRead {
    pub cluster: &'static str,
    pub attributes: Vec<AttributeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer_code: Option<u16>,
}

/// A read the host should schedule after dispatching the primary
/// write, without awaiting the write's acknowledgment first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeferredRead {
    pub endpoint_id: u8,
    pub read: ClusterRead,
}
