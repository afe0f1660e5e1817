//! Exposed-setting schemas surfaced to the UI/config layer
//!
//! Schemas are generated from the codec's own tables so that what a
//! dashboard offers always matches what the codec can encode. They
//! are presentation only; the codec never consults them.

use serde::Serialize;
use switch_codec::tables::ACTION_LABELS;
use switch_codec::{Setting, SwitchCodec};

/// Value shape of one exposed setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaKind {
    Enum,
    Numeric,
    Binary,
}

/// One setting as surfaced to the UI/config layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingSchema {
    pub name: String,
    pub kind: SchemaKind,
    /// Enum labels or binary states, in selection order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<String>>,
    /// Logical endpoint the setting is scoped to; `None` for
    /// device-level settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

/// Schemas for one switch endpoint: on/off state, operation mode,
/// the shared button settings, and interlock mode where the variant
/// supports it
pub fn switch_endpoint_schemas(
    codec: &SwitchCodec,
    endpoint: &str,
    with_interlock: bool,
) -> Vec<SettingSchema> {
    let mut schemas = vec![
        binary_state_schema(endpoint),
        enum_schema(codec, Setting::OperationMode, endpoint),
    ];
    schemas.extend(shared_settings_schemas(codec, endpoint));
    if with_interlock {
        schemas.push(enum_schema(codec, Setting::InterlockMode, endpoint));
    }
    schemas
}

/// The button settings every endpoint carries, including the "both
/// buttons" pseudo-endpoint that has no relay state of its own
pub fn shared_settings_schemas(codec: &SwitchCodec, endpoint: &str) -> Vec<SettingSchema> {
    vec![
        enum_schema(codec, Setting::SwitchMode, endpoint),
        enum_schema(codec, Setting::SwitchActions, endpoint),
        enum_schema(codec, Setting::RelayMode, endpoint),
        enum_schema(codec, Setting::LongPressMode, endpoint),
        numeric_schema(Setting::MaxPause, endpoint),
        numeric_schema(Setting::MinLongPress, endpoint),
    ]
}

/// Device-level action enum listing every `<action>_<endpoint>`
/// combination the firmware can report
pub fn action_schema(endpoints: &[&str]) -> SettingSchema {
    SettingSchema {
        name: "action".to_string(),
        kind: SchemaKind::Enum,
        allowed_values: Some(action_values(endpoints)),
        endpoint: None,
    }
}

/// All `<action>_<endpoint>` combinations for the given endpoints
pub fn action_values(endpoints: &[&str]) -> Vec<String> {
    endpoints
        .iter()
        .flat_map(|ep| ACTION_LABELS.iter().map(move |action| format!("{action}_{ep}")))
        .collect()
}

/// Device temperature reading, exposed at device level
pub fn device_temperature_schema() -> SettingSchema {
    SettingSchema {
        name: "device_temperature".to_string(),
        kind: SchemaKind::Numeric,
        allowed_values: None,
        endpoint: None,
    }
}

fn binary_state_schema(endpoint: &str) -> SettingSchema {
    SettingSchema {
        name: "state".to_string(),
        kind: SchemaKind::Binary,
        allowed_values: Some(vec![
            "ON".to_string(),
            "OFF".to_string(),
            "TOGGLE".to_string(),
        ]),
        endpoint: Some(endpoint.to_string()),
    }
}

fn enum_schema(codec: &SwitchCodec, setting: Setting, endpoint: &str) -> SettingSchema {
    let allowed_values = codec
        .descriptors()
        .iter()
        .find(|d| d.setting == setting)
        .and_then(|d| d.table)
        .map(|table| table.labels().iter().map(ToString::to_string).collect());

    SettingSchema {
        name: setting.name().to_string(),
        kind: SchemaKind::Enum,
        allowed_values,
        endpoint: Some(endpoint.to_string()),
    }
}

fn numeric_schema(setting: Setting, endpoint: &str) -> SettingSchema {
    SettingSchema {
        name: setting.name().to_string(),
        kind: SchemaKind::Numeric,
        allowed_values: None,
        endpoint: Some(endpoint.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use switch_codec::{EndpointMap, EnumTables, InterlockPairs, SwitchCodec};

    fn codec() -> SwitchCodec {
        SwitchCodec::new(
            EnumTables::standard(),
            EndpointMap::new([("common", 1), ("left", 2), ("right", 3), ("both", 4)]),
            InterlockPairs::pair("left", "right"),
        )
    }

    #[test]
    fn test_interlock_only_when_enabled() {
        let codec = codec();
        let with = switch_endpoint_schemas(&codec, "left", true);
        let without = switch_endpoint_schemas(&codec, "left", false);

        assert!(with.iter().any(|s| s.name == "interlock_mode"));
        assert!(!without.iter().any(|s| s.name == "interlock_mode"));
        assert_eq!(with.len(), without.len() + 1);
    }

    #[test]
    fn test_enum_schema_labels_come_from_tables() {
        let codec = codec();
        let schemas = switch_endpoint_schemas(&codec, "left", true);
        let switch_mode = schemas.iter().find(|s| s.name == "switch_mode").unwrap();

        assert_eq!(switch_mode.kind, SchemaKind::Enum);
        assert_eq!(
            switch_mode.allowed_values.as_deref().unwrap(),
            ["toggle", "momentary", "multifunction"]
        );
        assert_eq!(switch_mode.endpoint.as_deref(), Some("left"));
    }

    #[test]
    fn test_shared_settings_have_no_state() {
        let codec = codec();
        let schemas = shared_settings_schemas(&codec, "both");
        assert!(!schemas.iter().any(|s| s.name == "state"));
        assert!(!schemas.iter().any(|s| s.name == "operation_mode"));
    }

    #[test]
    fn test_action_values_cross_product() {
        let values = action_values(&["left", "right"]);
        assert_eq!(values.len(), 10);
        assert!(values.contains(&"single_left".to_string()));
        assert!(values.contains(&"release_right".to_string()));
    }

    #[test]
    fn test_schema_json_shape() {
        let schema = device_temperature_schema();
        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "device_temperature", "kind": "numeric"})
        );
    }
}
