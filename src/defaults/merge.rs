// Copyright (c) 2025 - Cowboy AI, Inc.
//! Template overlay

use serde_json::Value;

/// Overlay `overlay` onto `base`
///
/// Objects merge key by key, recursively. Any other value, lists included,
/// replaces what was there.
pub fn merge_values(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_map.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (base, overlay) => *base = overlay.clone(),
    }
}
