//! Device-definition entries consumed by the host framework

use crate::schema::SettingSchema;
use switch_codec::{EndpointMap, InterlockPairs, SwitchCodec};

/// Firmware update capability, supplied by the host
///
/// The registry only records that a variant supports OTA; image
/// parsing and transfer stay entirely on the host side.
pub trait OtaProvider {
    /// Whether a newer image than the running one is available
    fn is_update_available(&self, current_version: u32) -> bool;

    /// Start an update to the latest available image
    fn update_to_latest(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// One firmware variant: its codec bundled with the identifiers and
/// schemas the host needs to wire it up
#[derive(Debug, Clone)]
pub struct DeviceDefinition {
    /// Zigbee model strings this definition matches
    pub zigbee_models: Vec<&'static str>,
    /// Hardware model the firmware targets
    pub model: &'static str,
    pub vendor: &'static str,
    pub description: &'static str,
    /// The variant's codec, carrying its endpoint map, interlock
    /// pairing and enum tables
    pub codec: SwitchCodec,
    /// Settings surfaced to the UI/config layer
    pub exposes: Vec<SettingSchema>,
    /// Whether the host's OTA provider applies to this variant
    pub supports_ota: bool,
}

impl DeviceDefinition {
    /// Whether this definition matches a reported Zigbee model string
    #[must_use]
    pub fn matches(&self, zigbee_model: &str) -> bool {
        self.zigbee_models.contains(&zigbee_model)
    }

    /// The variant's logical endpoint map
    #[must_use]
    pub fn endpoints(&self) -> &EndpointMap {
        self.codec.endpoints()
    }

    /// The variant's interlock pairing
    #[must_use]
    pub fn interlock_pairs(&self) -> &InterlockPairs {
        self.codec.interlock()
    }
}
