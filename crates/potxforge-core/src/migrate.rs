//! Schema upgrades for stored configurations.
//!
//! Each step is a pure function over the raw JSON document. A document
//! without a `version` field is treated as version 1.

use serde_json::{Map, Value};

use crate::error::{ConfigError, Result};
use crate::layout::catalog_ids;
use crate::typography::TypographyRole;

/// Schema version written by this build
pub const CURRENT_VERSION: u64 = 3;

/// Font the `code` role is seeded with when upgrading to v3
const MONOSPACE_FONT_ID: &str = "space-mono-regular";

/// Read the schema version of a raw document
pub fn document_version(doc: &Value) -> Result<u64> {
    let root = doc
        .as_object()
        .ok_or_else(|| ConfigError::malformed("configuration root must be an object"))?;
    match root.get("version") {
        None | Some(Value::Null) => Ok(1),
        Some(v) => v
            .as_u64()
            .filter(|n| *n >= 1)
            .ok_or_else(|| ConfigError::malformed(format!("invalid version field: {v}"))),
    }
}

/// Bring a raw document up to [`CURRENT_VERSION`]
pub fn upgrade(doc: Value) -> Result<Value> {
    let from = document_version(&doc)?;
    upgrade_from(doc, from)
}

/// Apply every upgrade step after `from`
pub fn upgrade_from(mut doc: Value, from: u64) -> Result<Value> {
    if from > CURRENT_VERSION {
        return Err(ConfigError::UnsupportedVersion {
            found: from,
            supported: CURRENT_VERSION,
        });
    }

    let root = doc
        .as_object_mut()
        .ok_or_else(|| ConfigError::malformed("configuration root must be an object"))?;

    for step in from..CURRENT_VERSION {
        match step {
            1 => v1_to_v2(root),
            2 => v2_to_v3(root)?,
            _ => {}
        }
        log::debug!("Upgraded configuration to schema v{}", step + 1);
    }

    root.insert("version".to_string(), Value::from(CURRENT_VERSION));
    Ok(doc)
}

/// v2 added guides and layout selection, and renamed the slide size values
fn v1_to_v2(root: &mut Map<String, Value>) {
    root.entry("guides").or_insert_with(|| Value::Array(Vec::new()));
    root.entry("selectedLayouts").or_insert_with(|| {
        Value::Array(catalog_ids().into_iter().map(Value::String).collect())
    });

    if let Some(size) = root.get_mut("slideSize") {
        let renamed = match size.as_str() {
            Some("16x9") => Some("16:9"),
            Some("a4") | Some("A4") => Some("A4-landscape"),
            _ => None,
        };
        if let Some(renamed) = renamed {
            *size = Value::String(renamed.to_string());
        }
    }
}

/// v3 extended typography from seven roles to sixteen
fn v2_to_v3(root: &mut Map<String, Value>) -> Result<()> {
    let Some(typography) = root.get_mut("typography") else {
        return Ok(());
    };
    let roles = typography
        .as_object_mut()
        .ok_or_else(|| ConfigError::malformed("typography must be an object"))?;

    for role in TypographyRole::ALL {
        let Some((parent, ratio)) = role.seed() else {
            continue;
        };
        if roles.contains_key(role.as_str()) {
            continue;
        }
        let Some(mut seeded) = roles.get(parent.as_str()).cloned() else {
            continue;
        };
        if let Some(style) = seeded.as_object_mut() {
            if let Some(size) = style.get("fontSize").and_then(Value::as_f64) {
                style.insert("fontSize".to_string(), Value::from(scale_size(size, ratio)));
            }
            if role == TypographyRole::Code {
                style.insert(
                    "fontId".to_string(),
                    Value::String(MONOSPACE_FONT_ID.to_string()),
                );
            }
            if role == TypographyRole::Label {
                style.insert(
                    "textTransform".to_string(),
                    Value::String("uppercase".to_string()),
                );
            }
            style.remove("bullet");
        }
        roles.insert(role.as_str().to_string(), seeded);
    }
    Ok(())
}

/// Scaled size rounded to half points
fn scale_size(size: f64, ratio: f64) -> f64 {
    (size * ratio * 2.0).round() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_version_is_v1() {
        assert_eq!(document_version(&json!({})).unwrap(), 1);
        assert_eq!(document_version(&json!({ "version": 2 })).unwrap(), 2);
        assert!(document_version(&json!({ "version": "two" })).is_err());
        assert!(document_version(&json!([])).is_err());
    }

    #[test]
    fn test_v1_gains_guides_and_layouts() {
        let doc = upgrade(json!({ "name": "Old", "slideSize": "16x9" })).unwrap();
        assert_eq!(doc["version"], 3);
        assert_eq!(doc["guides"], json!([]));
        assert_eq!(doc["selectedLayouts"].as_array().unwrap().len(), 11);
        assert_eq!(doc["slideSize"], "16:9");
    }

    #[test]
    fn test_v1_a4_rename() {
        let doc = upgrade(json!({ "slideSize": "a4" })).unwrap();
        assert_eq!(doc["slideSize"], "A4-landscape");
    }

    #[test]
    fn test_v1_keeps_existing_selection() {
        let doc = upgrade(json!({ "selectedLayouts": ["blank"] })).unwrap();
        assert_eq!(doc["selectedLayouts"], json!(["blank"]));
    }

    #[test]
    fn test_v2_seeds_extended_roles() {
        let doc = upgrade(json!({
            "version": 2,
            "typography": {
                "heading": { "fontId": "calibre-bold", "fontSize": 40, "color": "#003F2D" },
                "bodyLarge": { "fontId": "calibre-regular", "fontSize": 20, "color": "#003F2D" },
                "bodySmall": {
                    "fontId": "calibre-regular",
                    "fontSize": 14,
                    "color": "#435254",
                    "bullet": { "char": "•", "indent": 24 }
                }
            }
        }))
        .unwrap();

        let t = &doc["typography"];
        assert_eq!(t["display"]["fontSize"], 60.0);
        assert_eq!(t["display"]["fontId"], "calibre-bold");
        assert_eq!(t["heading2"]["fontSize"], 32.0);
        assert_eq!(t["heading4"]["fontSize"], 20.0);
        assert_eq!(t["body"]["fontSize"], 18.0);
        assert_eq!(t["code"]["fontId"], MONOSPACE_FONT_ID);
        assert_eq!(t["label"]["textTransform"], "uppercase");
        assert!(t["caption"].get("bullet").is_none());
        // legacy roles are untouched
        assert_eq!(t["heading"]["fontSize"], 40);
    }

    #[test]
    fn test_v2_existing_extended_role_is_kept() {
        let doc = upgrade(json!({
            "version": 2,
            "typography": {
                "heading": { "fontId": "a", "fontSize": 40, "color": "#000000" },
                "display": { "fontId": "b", "fontSize": 72, "color": "#000000" }
            }
        }))
        .unwrap();
        assert_eq!(doc["typography"]["display"]["fontSize"], 72);
    }

    #[test]
    fn test_current_version_is_untouched() {
        let input = json!({ "version": 3, "name": "Now", "guides": [] });
        let doc = upgrade(input.clone()).unwrap();
        assert_eq!(doc, input);
    }

    #[test]
    fn test_future_version_is_rejected() {
        let err = upgrade(json!({ "version": 4 })).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnsupportedVersion {
                found: 4,
                supported: 3
            }
        ));
    }

    #[test]
    fn test_upgrade_is_idempotent() {
        let once = upgrade(json!({ "name": "x" })).unwrap();
        let twice = upgrade(once.clone()).unwrap();
        assert_eq!(once, twice);
    }
}
