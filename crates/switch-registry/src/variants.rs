//! The supported firmware variants
//!
//! Each variant composes the shared codec with its own endpoint map
//! and interlock pairing. Two-gang hardware gets interlocked
//! left/right endpoints plus a "both buttons" pseudo-endpoint;
//! single-gang hardware gets one button endpoint and no interlock.

use crate::definition::DeviceDefinition;
use crate::schema::{
    action_schema, device_temperature_schema, shared_settings_schemas, switch_endpoint_schemas,
};
use switch_codec::{EndpointMap, EnumTables, InterlockPairs, SwitchCodec};

/// All device definitions, in registration order
#[must_use]
pub fn definitions() -> Vec<DeviceDefinition> {
    vec![
        two_gang_variant(
            "hello.zigbee.E75-2G4M10S",
            "E75-2G4M10S",
            "Hello Zigbee Switch based on E75-2G4M10S module",
        ),
        single_gang_variant(
            "hello.zigbee.QBKG11LM",
            "QBKG11LM",
            "Hello Zigbee Switch firmware for Aqara QBKG11LM",
        ),
        two_gang_variant(
            "hello.zigbee.QBKG12LM",
            "QBKG12LM",
            "Hello Zigbee Switch firmware for Aqara QBKG12LM",
        ),
    ]
}

/// Find the definition matching a reported Zigbee model string
#[must_use]
pub fn find(zigbee_model: &str) -> Option<DeviceDefinition> {
    definitions().into_iter().find(|d| d.matches(zigbee_model))
}

fn two_gang_variant(
    zigbee_model: &'static str,
    model: &'static str,
    description: &'static str,
) -> DeviceDefinition {
    let codec = SwitchCodec::new(
        EnumTables::standard(),
        EndpointMap::new([("common", 1), ("left", 2), ("right", 3), ("both", 4)]),
        InterlockPairs::pair("left", "right"),
    );

    let mut exposes = vec![action_schema(&["left", "right", "both"])];
    exposes.extend(switch_endpoint_schemas(&codec, "left", true));
    exposes.extend(switch_endpoint_schemas(&codec, "right", true));
    exposes.extend(shared_settings_schemas(&codec, "both"));
    exposes.push(device_temperature_schema());

    DeviceDefinition {
        zigbee_models: vec![zigbee_model],
        model,
        vendor: "DIY",
        description,
        codec,
        exposes,
        supports_ota: true,
    }
}

fn single_gang_variant(
    zigbee_model: &'static str,
    model: &'static str,
    description: &'static str,
) -> DeviceDefinition {
    let codec = SwitchCodec::new(
        EnumTables::standard(),
        EndpointMap::new([("common", 1), ("button", 2)]),
        InterlockPairs::none(),
    );

    let mut exposes = vec![action_schema(&["button"])];
    exposes.extend(switch_endpoint_schemas(&codec, "button", false));
    exposes.push(device_temperature_schema());

    DeviceDefinition {
        zigbee_models: vec![zigbee_model],
        model,
        vendor: "DIY",
        description,
        codec,
        exposes,
        supports_ota: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use switch_codec::{AttributeReport, SettingValue};

    #[test]
    fn test_registry_lookup() {
        for model in [
            "hello.zigbee.E75-2G4M10S",
            "hello.zigbee.QBKG11LM",
            "hello.zigbee.QBKG12LM",
        ] {
            let definition = find(model).expect(model);
            assert!(definition.matches(model));
        }
        assert!(find("hello.zigbee.UNKNOWN").is_none());
    }

    #[test]
    fn test_two_gang_endpoints_and_interlock() {
        let definition = find("hello.zigbee.E75-2G4M10S").unwrap();
        let endpoints = definition.endpoints();

        assert_eq!(endpoints.id_of("common"), Some(1));
        assert_eq!(endpoints.id_of("left"), Some(2));
        assert_eq!(endpoints.id_of("right"), Some(3));
        assert_eq!(endpoints.id_of("both"), Some(4));
        assert_eq!(definition.interlock_pairs().partner_of("left"), Some("right"));
    }

    #[test]
    fn test_single_gang_has_no_interlock() {
        let definition = find("hello.zigbee.QBKG11LM").unwrap();

        assert_eq!(definition.endpoints().id_of("button"), Some(2));
        assert!(definition.interlock_pairs().partner_of("button").is_none());
        assert!(!definition.exposes.iter().any(|s| s.name == "interlock_mode"));
    }

    #[test]
    fn test_two_gang_exposes_interlock_on_switch_endpoints_only() {
        let definition = find("hello.zigbee.QBKG12LM").unwrap();
        let interlock_endpoints: Vec<_> = definition
            .exposes
            .iter()
            .filter(|s| s.name == "interlock_mode")
            .map(|s| s.endpoint.clone().unwrap())
            .collect();

        assert_eq!(interlock_endpoints, ["left", "right"]);
    }

    #[test]
    fn test_definition_codec_decodes_for_its_endpoints() {
        let definition = find("hello.zigbee.QBKG11LM").unwrap();
        let report = AttributeReport::new("genOnOffSwitchCfg", 2, [(65280u16, 1u16)]);
        let state = definition.codec.decode(&report).unwrap();

        assert_eq!(
            state["switch_mode_button"],
            SettingValue::Label("momentary".to_string())
        );
    }

    #[test]
    fn test_action_expose_covers_all_endpoints() {
        let definition = find("hello.zigbee.E75-2G4M10S").unwrap();
        let action = definition.exposes.iter().find(|s| s.name == "action").unwrap();
        let values = action.allowed_values.as_ref().unwrap();

        assert_eq!(values.len(), 15);
        assert!(values.contains(&"hold_both".to_string()));
    }
}
