//! Bidirectional attribute codec for the Hello Zigbee Switch firmware
//!
//! Translates between raw `genOnOffSwitchCfg`/`genMultistateInput`
//! attribute values and named per-endpoint settings. The codec is
//! pure: decoding produces state entries, encoding produces the
//! cluster requests the host must send. All Zigbee I/O, MQTT
//! bridging and scheduling stay with the host framework.

pub mod codec;
pub mod decode;
pub mod encode;
pub mod endpoint;
pub mod error;
pub mod setting;
pub mod tables;

pub use codec::SwitchCodec;
pub use decode::{AttributeKey, AttributeReport};
pub use encode::EncodeResult;
pub use endpoint::{EndpointMap, InterlockPairs};
pub use error::CodecError;
pub use setting::{
    AttributeId, ClusterRead, ClusterWrite, DeferredRead, Setting, SettingDescriptor,
    SettingValue, WireType,
};
pub use tables::{EnumTable, EnumTables};
