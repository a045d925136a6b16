//! Collector: form model back into a nested configuration document.
//!
//! Walks every widget in form order and assigns its coerced value into a
//! freshly allocated document. The previously fetched document is never
//! touched; repeated collects are independent and idempotent.

use serde_json::{Map, Number, Value};

use super::{Coercion, Control, FormModel};
use crate::path::{FieldPath, Segment};

/// Builds a fresh nested document from current widget state.
#[must_use]
pub fn collect(model: &FormModel) -> Value {
    let mut doc = Value::Object(Map::new());

    for widget in model.widgets() {
        match &widget.control {
            Control::Text { value, coerce, .. } => {
                assign(&mut doc, &widget.path, coerce_scalar(value, *coerce));
            }
            Control::Toggle { checked } => {
                assign(&mut doc, &widget.path, Value::Bool(*checked));
            }
            Control::Range { min, max, coerce } => {
                // The two inputs are independent `_MIN`/`_MAX` bindings; each
                // settles into its half of the pair regardless of visit order.
                assign_range_part(&mut doc, &widget.min_path(), 0, coerce_scalar(min, *coerce));
                assign_range_part(&mut doc, &widget.max_path(), 1, coerce_scalar(max, *coerce));
            }
            Control::CommaList { value, numeric } => {
                let items = value
                    .split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(|item| {
                        if *numeric {
                            parse_integer(item)
                        } else {
                            Value::String(item.to_string())
                        }
                    })
                    .collect();
                assign(&mut doc, &widget.path, Value::Array(items));
            }
            Control::Tags { chips, numeric, .. } => {
                // Only committed chips count; an uncommitted draft is dropped.
                let items = chips
                    .iter()
                    .map(|chip| {
                        if *numeric {
                            // A chip that no longer parses stays a string
                            // rather than silently becoming null.
                            chip.trim()
                                .parse::<i64>()
                                .map_or_else(|_| Value::String(chip.clone()), Into::into)
                        } else {
                            Value::String(chip.clone())
                        }
                    })
                    .collect();
                assign(&mut doc, &widget.path, Value::Array(items));
            }
            Control::Network { entries } => {
                // Entries are stored in catalog order, so the collected
                // subset is catalog-ordered too.
                let selected = entries
                    .iter()
                    .filter(|entry| entry.checked)
                    .map(|entry| Value::String(entry.name.to_string()))
                    .collect();
                assign(&mut doc, &widget.path, Value::Array(selected));
            }
            Control::Select { options, selected } => {
                let value = options
                    .get(selected.unwrap_or(0))
                    .map_or(Value::Null, |option| Value::String(option.clone()));
                assign(&mut doc, &widget.path, value);
            }
        }
    }

    doc
}

/// Parses a scalar per its recorded coercion type. Unparsable numeric
/// content collects as null, matching the original editor's behavior of
/// serializing NaN.
///
/// Float-hinted content parses through [`Number`] so integer-shaped input
/// stays an integer JSON number: `"1"` collects as `1`, `"0.5"` as `0.5`.
fn coerce_scalar(text: &str, coerce: Coercion) -> Value {
    match coerce {
        Coercion::Text => Value::String(text.to_string()),
        Coercion::Integer => parse_integer(text),
        Coercion::Float => text
            .trim()
            .parse::<Number>()
            .map_or(Value::Null, Value::Number),
    }
}

fn parse_integer(text: &str) -> Value {
    text.trim()
        .parse::<i64>()
        .map_or(Value::Null, Into::into)
}

/// Writes `value` at `path`, creating intermediate mappings and padding
/// arrays with nulls as needed.
fn assign(doc: &mut Value, path: &FieldPath, value: Value) {
    *slot_mut(doc, path.segments()) = value;
}

/// Writes one half of a range pair. The path carries the synthetic
/// `_MIN`/`_MAX` suffix; the base key receives a `[0, 0]` placeholder on
/// first encounter, then each half overwrites its index, so the order the
/// two parts arrive in does not matter.
fn assign_range_part(doc: &mut Value, suffixed: &FieldPath, index: usize, value: Value) {
    let mut segments = suffixed.segments().to_vec();
    if let Some(Segment::Key(key)) = segments.last_mut() {
        if let Some(base) = key.strip_suffix("_MIN").or_else(|| key.strip_suffix("_MAX")) {
            *key = base.to_string();
        }
    }

    let slot = slot_mut(doc, &segments);
    let is_pair = matches!(slot, Value::Array(items) if items.len() == 2);
    if !is_pair {
        *slot = Value::Array(vec![0.into(), 0.into()]);
    }
    if let Value::Array(items) = slot {
        items[index] = value;
    }
}

/// Returns the mutable slot at `segments`, creating the container chain on
/// the way down: keys force mappings into existence, indices force arrays.
fn slot_mut<'a>(doc: &'a mut Value, segments: &[Segment]) -> &'a mut Value {
    let mut current = doc;
    for segment in segments {
        current = match segment {
            Segment::Key(key) => {
                if !current.is_object() {
                    *current = Value::Object(Map::new());
                }
                let Value::Object(map) = current else {
                    unreachable!()
                };
                map.entry(key.clone()).or_insert(Value::Null)
            }
            Segment::Index(index) => {
                if !current.is_array() {
                    *current = Value::Array(Vec::new());
                }
                let Value::Array(items) = current else {
                    unreachable!()
                };
                while items.len() <= *index {
                    items.push(Value::Null);
                }
                &mut items[*index]
            }
        };
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{render, Card, CardItem, Section, Widget};
    use serde_json::json;

    fn widget_mut<'a>(model: &'a mut FormModel, path: &str) -> &'a mut Widget {
        model
            .widgets_mut()
            .find(|w| w.path.encode() == path)
            .unwrap_or_else(|| panic!("no widget at {path}"))
    }

    #[test]
    fn test_range_reassembles_pair() {
        let doc = json!({"SETTINGS": {"ACCOUNTS_RANGE": [3, 7]}});
        let collected = collect(&render(&doc));
        assert_eq!(collected["SETTINGS"]["ACCOUNTS_RANGE"], json!([3, 7]));
    }

    #[test]
    fn test_range_parts_settle_in_either_order() {
        let mut doc = Value::Object(Map::new());
        let max = FieldPath::key("SETTINGS").child("ACCOUNTS_RANGE_MAX");
        let min = FieldPath::key("SETTINGS").child("ACCOUNTS_RANGE_MIN");
        assign_range_part(&mut doc, &max, 1, 7.into());
        assign_range_part(&mut doc, &min, 0, 3.into());
        assert_eq!(doc["SETTINGS"]["ACCOUNTS_RANGE"], json!([3, 7]));
    }

    #[test]
    fn test_unparsable_integer_collects_as_null() {
        let mut model = render(&json!({"SETTINGS": {"THREADS": 5}}));
        if let Control::Text { value, .. } = &mut widget_mut(&mut model, "SETTINGS.THREADS").control
        {
            *value = "not a number".to_string();
        }
        let collected = collect(&model);
        assert_eq!(collected["SETTINGS"]["THREADS"], Value::Null);
    }

    #[test]
    fn test_comma_list_splits_trims_and_parses() {
        let widget = Widget {
            path: FieldPath::key("FLOW").child("TASKS"),
            label: "Tasks".to_string(),
            control: Control::CommaList {
                value: "1, 2,  3".to_string(),
                numeric: true,
            },
        };
        let model = FormModel {
            sections: vec![Section {
                id: "flow",
                title: "Flow",
                icon: "exchange-alt",
                visible: true,
                cards: vec![Card {
                    title: "Flow Settings".to_string(),
                    icon: "exchange-alt".to_string(),
                    items: vec![CardItem::Field(widget)],
                }],
            }],
        };
        let collected = collect(&model);
        assert_eq!(collected["FLOW"]["TASKS"], json!([1, 2, 3]));
    }

    #[test]
    fn test_float_field_keeps_number_shape() {
        let doc = json!({"CRUSTY_SWAP": {
            "AMOUNT_TO_REFUEL": [1, 2],
            "MINIMUM_BALANCE_TO_REFUEL": 1,
            "BRIDGE_ALL_MAX_AMOUNT": 0.5,
        }});
        let collected = collect(&render(&doc));
        assert_eq!(collected["CRUSTY_SWAP"]["AMOUNT_TO_REFUEL"], json!([1, 2]));
        assert_eq!(collected["CRUSTY_SWAP"]["MINIMUM_BALANCE_TO_REFUEL"], json!(1));
        assert_eq!(collected["CRUSTY_SWAP"]["BRIDGE_ALL_MAX_AMOUNT"], json!(0.5));
    }

    #[test]
    fn test_network_collects_in_catalog_order_not_check_order() {
        let mut model = render(&json!({"CRUSTY_SWAP": {"NETWORKS_TO_REFUEL_FROM": ["Base"]}}));
        // Check Arbitrum after Base was already selected.
        widget_mut(&mut model, "CRUSTY_SWAP.NETWORKS_TO_REFUEL_FROM").toggle_network(0);
        let collected = collect(&model);
        assert_eq!(
            collected["CRUSTY_SWAP"]["NETWORKS_TO_REFUEL_FROM"],
            json!(["Arbitrum", "Base"])
        );
    }

    #[test]
    fn test_select_without_selection_collects_first_option() {
        let model = render(&json!({"EXCHANGES": {"name": "BINANCE"}}));
        let collected = collect(&model);
        assert_eq!(collected["EXCHANGES"]["name"], json!("OKX"));
    }

    #[test]
    fn test_collect_is_fresh_per_call() {
        let model = render(&json!({"OTHERS": {"SKIP_SSL_VERIFICATION": true}}));
        let first = collect(&model);
        let second = collect(&model);
        assert_eq!(first, second);
    }
}
