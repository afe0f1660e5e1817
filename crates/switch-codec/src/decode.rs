//! Inbound attribute decoding
//!
//! Turns raw attribute reports into endpoint-qualified state entries,
//! e.g. attribute 0xFF00 = 1 arriving on endpoint 2 becomes
//! `switch_mode_left = "momentary"`.

use crate::codec::SwitchCodec;
use crate::error::CodecError;
use crate::setting::{
    AttributeId, SettingValue, CLUSTER_MULTISTATE_INPUT, CLUSTER_ON_OFF_SWITCH_CFG, PRESENT_VALUE,
};
use crate::tables::action_label;
use std::collections::{BTreeMap, HashMap};

/// Key of one attribute inside a report: standard attributes arrive
/// under their ZCL mnemonic, manufacturer-specific ones under their
/// numeric id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeKey {
    Id(u16),
    Name(String),
}

impl From<u16> for AttributeKey {
    fn from(id: u16) -> Self {
        AttributeKey::Id(id)
    }
}

impl From<&str> for AttributeKey {
    fn from(name: &str) -> Self {
        AttributeKey::Name(name.to_string())
    }
}

/// An incoming attribute report handed over by the host
#[derive(Debug, Clone)]
pub struct AttributeReport {
    /// Cluster the report arrived on
    pub cluster: String,
    /// Zigbee endpoint it came from
    pub endpoint_id: u8,
    /// Raw attribute values, keyed by id or mnemonic
    pub attributes: HashMap<AttributeKey, u16>,
}

impl AttributeReport {
    /// Build a report from `(key, raw value)` pairs
    pub fn new<I, K>(cluster: &str, endpoint_id: u8, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, u16)>,
        K: Into<AttributeKey>,
    {
        Self {
            cluster: cluster.to_string(),
            endpoint_id,
            attributes: attributes
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        }
    }
}

impl SwitchCodec {
    /// Decode an attribute report into endpoint-qualified state entries
    ///
    /// Reports from clusters this codec does not handle decode to an
    /// empty map. An unresolvable source endpoint fails with
    /// [`CodecError::UnknownEndpoint`] and the whole report should be
    /// dropped by the host.
    pub fn decode(
        &self,
        report: &AttributeReport,
    ) -> Result<BTreeMap<String, SettingValue>, CodecError> {
        match report.cluster.as_str() {
            CLUSTER_ON_OFF_SWITCH_CFG => self.decode_switch_cfg(report),
            CLUSTER_MULTISTATE_INPUT => self.decode_multistate(report),
            other => {
                tracing::debug!(cluster = other, "ignoring report from unhandled cluster");
                Ok(BTreeMap::new())
            }
        }
    }

    /// Setting-change reports: one entry per recognized attribute
    /// present in the report, absent attributes emit nothing
    fn decode_switch_cfg(
        &self,
        report: &AttributeReport,
    ) -> Result<BTreeMap<String, SettingValue>, CodecError> {
        let ep_name = self.endpoints.resolve(report.endpoint_id)?;
        let mut state = BTreeMap::new();

        for descriptor in &self.descriptors {
            let key = match descriptor.attribute {
                AttributeId::Manufacturer(id) => AttributeKey::Id(id),
                AttributeId::Standard(name) => AttributeKey::Name(name.to_string()),
            };
            let Some(&raw) = report.attributes.get(&key) else {
                continue;
            };

            let value = match descriptor.table {
                Some(table) => match table.label(raw) {
                    Ok(label) => SettingValue::Label(label.to_string()),
                    Err(err) => {
                        // Out-of-range index: treat the attribute as
                        // absent rather than failing the report
                        tracing::warn!(%err, endpoint = ep_name, "skipping attribute");
                        continue;
                    }
                },
                None => SettingValue::Number(raw),
            };

            state.insert(format!("{}_{}", descriptor.setting.name(), ep_name), value);
        }

        Ok(state)
    }

    /// Button-action reports: a single endpoint-suffixed `action`
    /// entry, or nothing for transitional present values
    fn decode_multistate(
        &self,
        report: &AttributeReport,
    ) -> Result<BTreeMap<String, SettingValue>, CodecError> {
        let ep_name = self.endpoints.resolve(report.endpoint_id)?;
        let mut state = BTreeMap::new();

        if let Some(&value) = report.attributes.get(&AttributeKey::from(PRESENT_VALUE)) {
            match action_label(value) {
                Some(action) => {
                    state.insert(
                        "action".to_string(),
                        SettingValue::Label(format!("{action}_{ep_name}")),
                    );
                }
                None => {
                    tracing::debug!(value, "unmapped presentValue, no action emitted");
                }
            }
        }

        Ok(state)
    }
}
