//! Device-definition registry for the Hello Zigbee Switch firmware
//!
//! Maps firmware identifiers to a codec plus the endpoint map,
//! interlock pairing and exposed-setting schemas the host framework
//! needs to integrate one device variant.

pub mod definition;
pub mod schema;
pub mod variants;

pub use definition::{DeviceDefinition, OtaProvider};
pub use schema::{SchemaKind, SettingSchema};
pub use variants::{definitions, find};
