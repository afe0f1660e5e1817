//! Outbound setting encoding
//!
//! Turns a setting change requested by the host into the cluster
//! write it must send, plus any follow-up reads. The codec never
//! performs the I/O itself; the host dispatches the returned
//! requests.

use crate::codec::SwitchCodec;
use crate::error::CodecError;
use crate::setting::{
    ClusterRead, ClusterWrite, DeferredRead, Setting, SettingValue, CLUSTER_ON_OFF_SWITCH_CFG,
};

/// Requests produced by encoding one setting change
///
/// `follow_ups` must be scheduled after the writes are dispatched,
/// without awaiting their acknowledgment first: an interlocked
/// device answers the primary write with an autonomous state-change
/// report for the paired endpoint, and awaiting the write before
/// issuing the read would deadlock that exchange.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EncodeResult {
    pub writes: Vec<ClusterWrite>,
    pub follow_ups: Vec<DeferredRead>,
}

impl SwitchCodec {
    /// Encode a setting change addressed to one endpoint
    ///
    /// Unknown setting names produce no writes and a warning, so a
    /// stale key from the UI never fails the overall request. An
    /// enum value missing from the table fails with
    /// [`CodecError::UnknownEnumValue`] and the write is suppressed.
    pub fn encode(
        &self,
        setting_name: &str,
        value: &SettingValue,
        endpoint_id: u8,
    ) -> Result<EncodeResult, CodecError> {
        let Some(descriptor) = self.descriptor(setting_name) else {
            tracing::warn!(setting = setting_name, "unrecognized setting, nothing written");
            return Ok(EncodeResult::default());
        };

        let raw = match (descriptor.table, value) {
            (Some(table), SettingValue::Label(label)) => u16::from(table.index(label)?),
            (Some(_), SettingValue::Number(n)) => {
                return Err(CodecError::UnknownEnumValue {
                    setting: descriptor.setting.name(),
                    value: n.to_string(),
                });
            }
            (None, SettingValue::Number(n)) => *n,
            (None, SettingValue::Label(label)) => {
                label.parse().map_err(|_| CodecError::UnknownEnumValue {
                    setting: descriptor.setting.name(),
                    value: label.clone(),
                })?
            }
        };

        let mut result = EncodeResult::default();
        result.writes.push(ClusterWrite {
            cluster: CLUSTER_ON_OFF_SWITCH_CFG,
            attribute: descriptor.attribute,
            value: raw,
            wire_type: descriptor.wire_type,
            manufacturer_code: descriptor
                .attribute
                .is_manufacturer_specific()
                .then_some(self.manufacturer_code),
        });

        // The device pushes an interlock change to the paired
        // endpoint on its own; schedule a read of the partner so the
        // host's view of it stays consistent.
        if descriptor.setting == Setting::InterlockMode {
            let ep_name = self.endpoints.resolve(endpoint_id)?;
            if let Some(partner_id) = self
                .interlock
                .partner_of(ep_name)
                .and_then(|partner| self.endpoints.id_of(partner))
            {
                result.follow_ups.push(DeferredRead {
                    endpoint_id: partner_id,
                    read: ClusterRead {
                        cluster: CLUSTER_ON_OFF_SWITCH_CFG,
                        attributes: vec![descriptor.attribute],
                        manufacturer_code: Some(self.manufacturer_code),
                    },
                });
            }
        }

        Ok(result)
    }

    /// The read refreshing one setting's current value
    ///
    /// Standard attributes are read without a manufacturer code,
    /// manufacturer-specific ones with it.
    pub fn describe_read(&self, setting_name: &str) -> Result<ClusterRead, CodecError> {
        let descriptor = self
            .descriptor(setting_name)
            .ok_or_else(|| CodecError::UnknownSetting(setting_name.to_string()))?;

        Ok(ClusterRead {
            cluster: CLUSTER_ON_OFF_SWITCH_CFG,
            attributes: vec![descriptor.attribute],
            manufacturer_code: descriptor
                .attribute
                .is_manufacturer_specific()
                .then_some(self.manufacturer_code),
        })
    }

    /// The batch refresh issued when a switch endpoint is configured:
    /// one standard read plus one manufacturer-specific block read
    ///
    /// The two reads are independent and may be issued concurrently;
    /// both must complete for the refresh to count as successful.
    /// `interlock_mode` is excluded because not every endpoint
    /// carries it; it is refreshed per-setting instead.
    #[must_use]
    pub fn configure_reads(&self) -> Vec<ClusterRead> {
        let standard: Vec<_> = self
            .descriptors
            .iter()
            .filter(|d| !d.attribute.is_manufacturer_specific())
            .map(|d| d.attribute)
            .collect();

        let manufacturer: Vec<_> = self
            .descriptors
            .iter()
            .filter(|d| {
                d.attribute.is_manufacturer_specific() && d.setting != Setting::InterlockMode
            })
            .map(|d| d.attribute)
            .collect();

        vec![
            ClusterRead {
                cluster: CLUSTER_ON_OFF_SWITCH_CFG,
                attributes: standard,
                manufacturer_code: None,
            },
            ClusterRead {
                cluster: CLUSTER_ON_OFF_SWITCH_CFG,
                attributes: manufacturer,
                manufacturer_code: Some(self.manufacturer_code),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::{EndpointMap, InterlockPairs};
    use crate::setting::{AttributeId, WireType, JENNIC_MANUFACTURER_CODE};
    use crate::tables::EnumTables;

    fn two_gang_codec() -> SwitchCodec {
        SwitchCodec::new(
            EnumTables::standard(),
            EndpointMap::new([("common", 1), ("left", 2), ("right", 3), ("both", 4)]),
            InterlockPairs::pair("left", "right"),
        )
    }

    #[test]
    fn test_encode_enum_setting() {
        let codec = two_gang_codec();
        let result = codec
            .encode("switch_mode", &"momentary".into(), 2)
            .unwrap();

        assert_eq!(result.writes.len(), 1);
        assert!(result.follow_ups.is_empty());

        let write = &result.writes[0];
        assert_eq!(write.cluster, "genOnOffSwitchCfg");
        assert_eq!(write.attribute, AttributeId::Manufacturer(65280));
        assert_eq!(write.value, 1);
        assert_eq!(write.wire_type, Some(WireType::Enum8));
        assert_eq!(write.manufacturer_code, Some(JENNIC_MANUFACTURER_CODE));
    }

    #[test]
    fn test_encode_switch_actions_standard_path() {
        let codec = two_gang_codec();
        let result = codec
            .encode("switch_actions", &"toggle".into(), 2)
            .unwrap();

        let write = &result.writes[0];
        assert_eq!(write.attribute, AttributeId::Standard("switchActions"));
        assert_eq!(write.value, 2);
        assert_eq!(write.wire_type, None);
        assert_eq!(write.manufacturer_code, None);
    }

    #[test]
    fn test_encode_numeric_setting() {
        let codec = two_gang_codec();
        let result = codec.encode("max_pause", &250u16.into(), 2).unwrap();

        let write = &result.writes[0];
        assert_eq!(write.attribute, AttributeId::Manufacturer(65282));
        assert_eq!(write.value, 250);
        assert_eq!(write.wire_type, Some(WireType::Uint16));
        assert_eq!(write.manufacturer_code, Some(JENNIC_MANUFACTURER_CODE));
    }

    #[test]
    fn test_encode_unknown_enum_value() {
        let codec = two_gang_codec();
        let err = codec
            .encode("relay_mode", &"sideways".into(), 2)
            .unwrap_err();
        assert_eq!(
            err,
            CodecError::UnknownEnumValue {
                setting: "relay_mode",
                value: "sideways".to_string(),
            }
        );
    }

    #[test]
    fn test_encode_unknown_setting_is_tolerated() {
        let codec = two_gang_codec();
        let result = codec.encode("brightness", &42u16.into(), 2).unwrap();
        assert!(result.writes.is_empty());
        assert!(result.follow_ups.is_empty());
    }

    #[test]
    fn test_encode_interlock_with_partner() {
        let codec = two_gang_codec();
        let result = codec
            .encode("interlock_mode", &"mutualExclusion".into(), 2)
            .unwrap();

        assert_eq!(result.writes.len(), 1);
        assert_eq!(result.writes[0].attribute, AttributeId::Manufacturer(65286));
        assert_eq!(result.writes[0].value, 1);

        // One deferred read of the same attribute on the partner
        assert_eq!(result.follow_ups.len(), 1);
        let follow_up = &result.follow_ups[0];
        assert_eq!(follow_up.endpoint_id, 3);
        assert_eq!(
            follow_up.read.attributes,
            vec![AttributeId::Manufacturer(65286)]
        );
        assert_eq!(
            follow_up.read.manufacturer_code,
            Some(JENNIC_MANUFACTURER_CODE)
        );
    }

    #[test]
    fn test_encode_interlock_without_partner() {
        let codec = SwitchCodec::new(
            EnumTables::standard(),
            EndpointMap::new([("common", 1), ("button", 2)]),
            InterlockPairs::none(),
        );
        let result = codec
            .encode("interlock_mode", &"opposite".into(), 2)
            .unwrap();

        assert_eq!(result.writes.len(), 1);
        assert!(result.follow_ups.is_empty());
    }

    #[test]
    fn test_describe_read_manufacturer_specific() {
        let codec = two_gang_codec();
        let read = codec.describe_read("operation_mode").unwrap();

        assert_eq!(read.cluster, "genOnOffSwitchCfg");
        assert_eq!(read.attributes, vec![AttributeId::Manufacturer(65285)]);
        assert_eq!(read.manufacturer_code, Some(JENNIC_MANUFACTURER_CODE));
    }

    #[test]
    fn test_describe_read_standard() {
        let codec = two_gang_codec();
        let read = codec.describe_read("switch_actions").unwrap();

        assert_eq!(read.attributes, vec![AttributeId::Standard("switchActions")]);
        assert_eq!(read.manufacturer_code, None);
    }

    #[test]
    fn test_describe_read_unknown_setting() {
        let codec = two_gang_codec();
        assert_eq!(
            codec.describe_read("brightness"),
            Err(CodecError::UnknownSetting("brightness".to_string()))
        );
    }

    #[test]
    fn test_configure_reads() {
        let codec = two_gang_codec();
        let reads = codec.configure_reads();
        assert_eq!(reads.len(), 2);

        assert_eq!(
            reads[0].attributes,
            vec![AttributeId::Standard("switchActions")]
        );
        assert_eq!(reads[0].manufacturer_code, None);

        // Manufacturer block covers 0xFF00-0xFF05; interlock_mode is
        // refreshed per-setting only
        assert_eq!(
            reads[1].attributes,
            vec![
                AttributeId::Manufacturer(65280),
                AttributeId::Manufacturer(65281),
                AttributeId::Manufacturer(65282),
                AttributeId::Manufacturer(65283),
                AttributeId::Manufacturer(65284),
                AttributeId::Manufacturer(65285),
            ]
        );
        assert_eq!(reads[1].manufacturer_code, Some(JENNIC_MANUFACTURER_CODE));
    }

    #[test]
    fn test_encode_then_decode_roundtrip() {
        let codec = two_gang_codec();
        let result = codec.encode("relay_mode", &"double".into(), 2).unwrap();
        let raw = result.writes[0].value;

        let report = crate::decode::AttributeReport::new(
            "genOnOffSwitchCfg",
            2,
            [(65281u16, raw)],
        );
        let state = codec.decode(&report).unwrap();
        assert_eq!(state["relay_mode_left"], "double".into());
    }
}
