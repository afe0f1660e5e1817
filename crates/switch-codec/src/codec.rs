//! The per-variant codec instance

use crate::endpoint::{EndpointMap, InterlockPairs};
use crate::setting::{SettingDescriptor, JENNIC_MANUFACTURER_CODE};
use crate::tables::EnumTables;

/// Bidirectional attribute codec for one firmware variant
///
/// Holds the variant's enum tables (as setting descriptors), its
/// logical endpoint map and its interlock pairing. All operations
/// are synchronous pure computations; the host performs the actual
/// Zigbee I/O from the request values they return.
#[derive(Debug, Clone)]
pub struct SwitchCodec {
    pub(crate) descriptors: Vec<SettingDescriptor>,
    pub(crate) endpoints: EndpointMap,
    pub(crate) interlock: InterlockPairs,
    pub(crate) manufacturer_code: u16,
}

impl SwitchCodec {
    /// Build a codec from a variant's tables, endpoint map and
    /// interlock pairing
    #[must_use]
    pub fn new(tables: EnumTables, endpoints: EndpointMap, interlock: InterlockPairs) -> Self {
        Self {
            descriptors: SettingDescriptor::standard_set(&tables),
            endpoints,
            interlock,
            manufacturer_code: JENNIC_MANUFACTURER_CODE,
        }
    }

    /// The logical endpoint map this codec was built with
    #[must_use]
    pub fn endpoints(&self) -> &EndpointMap {
        &self.endpoints
    }

    /// The interlock pairing this codec was built with
    #[must_use]
    pub fn interlock(&self) -> &InterlockPairs {
        &self.interlock
    }

    /// Descriptors for every setting this variant exposes
    #[must_use]
    pub fn descriptors(&self) -> &[SettingDescriptor] {
        &self.descriptors
    }

    pub(crate) fn descriptor(&self, setting_name: &str) -> Option<&SettingDescriptor> {
        self.descriptors
            .iter()
            .find(|d| d.setting.name() == setting_name)
    }
}
