//! Widget factory and renderer: configuration document to form model.
//!
//! Each constructor is a pure function of its inputs; none reads or writes
//! the document. The renderer walks the category schema in display order
//! and fully replaces prior form content on every call.

use serde_json::Value;

use super::{
    format_field_name, Card, CardItem, Coercion, Control, FormModel, NetworkEntry, Section, Widget,
};
use crate::constants::NETWORK_CATALOG;
use crate::path::FieldPath;
use crate::schema::{self, CardDef, CategoryDef, CategoryLayout, FieldKind, FieldSpec};

/// Builds the full form model for a configuration document.
///
/// Every category of the schema becomes a section; a category whose key is
/// absent from the document renders as an empty, titled section. Only the
/// first section starts visible.
#[must_use]
pub fn render(doc: &Value) -> FormModel {
    let sections = schema::CATEGORIES
        .iter()
        .enumerate()
        .map(|(i, category)| {
            let cards = doc
                .get(category.key)
                .map_or_else(Vec::new, |value| render_category(category, value));
            Section {
                id: category.id,
                title: category.title,
                icon: category.icon,
                visible: i == 0,
                cards,
            }
        })
        .collect();
    FormModel { sections }
}

fn render_category(category: &CategoryDef, value: &Value) -> Vec<Card> {
    match category.layout {
        CategoryLayout::Cards(defs) => defs
            .iter()
            .map(|def| render_card(def, category.key, value))
            .collect(),
        CategoryLayout::TagListPerKey { title, icon } => {
            let mut items = Vec::new();
            if let Some(map) = value.as_object() {
                for (key, entry) in map {
                    let path = FieldPath::key(category.key).child(key);
                    items.push(CardItem::Field(tags(key, entry, path, false)));
                }
            }
            vec![Card {
                title: title.to_string(),
                icon: icon.to_string(),
                items,
            }]
        }
        CategoryLayout::Exchange => render_exchange(category.key, value),
    }
}

fn render_card(def: &CardDef, category_key: &str, category: &Value) -> Card {
    let items = def
        .fields
        .iter()
        .map(|spec| {
            let value = category.get(spec.key).unwrap_or(&Value::Null);
            let path = FieldPath::key(category_key).child(spec.key);
            CardItem::Field(field_widget(spec, value, path))
        })
        .collect();
    Card {
        title: def.title.to_string(),
        icon: def.icon.to_string(),
        items,
    }
}

/// Exchange details card plus one titled group per withdrawal record, each
/// sub-field path embedding the record's list index.
fn render_exchange(category_key: &str, category: &Value) -> Vec<Card> {
    let details = Card {
        title: "Exchange Details".to_string(),
        icon: "info-circle".to_string(),
        items: schema::EXCHANGE_DETAIL_FIELDS
            .iter()
            .map(|spec| {
                let value = category.get(spec.key).unwrap_or(&Value::Null);
                let path = FieldPath::key(category_key).child(spec.key);
                CardItem::Field(field_widget(spec, value, path))
            })
            .collect(),
    };

    let mut cards = vec![details];

    if let Some(withdrawals) = category.get("withdrawals").and_then(Value::as_array) {
        let mut items = Vec::new();
        for (index, record) in withdrawals.iter().enumerate() {
            let currency = record
                .get("currency")
                .and_then(Value::as_str)
                .unwrap_or("N/A");
            items.push(CardItem::GroupLabel(format!(
                "Withdrawal {} ({currency})",
                index + 1
            )));
            for spec in schema::WITHDRAWAL_FIELDS {
                let value = record.get(spec.key).unwrap_or(&Value::Null);
                let path = FieldPath::key(category_key)
                    .child("withdrawals")
                    .index(index)
                    .child(spec.key);
                items.push(CardItem::Field(field_widget(spec, value, path)));
            }
        }
        cards.push(Card {
            title: "Withdrawals".to_string(),
            icon: "money-bill-wave".to_string(),
            items,
        });
    }

    cards
}

/// Constructs the widget for one field per its presentation hint.
fn field_widget(spec: &FieldSpec, value: &Value, path: FieldPath) -> Widget {
    match spec.kind {
        FieldKind::Checkbox => checkbox(spec.key, value, path),
        FieldKind::Network => network(spec.key, value, path),
        FieldKind::Tags => tags(spec.key, value, path, false),
        FieldKind::SpaceTags => tags(spec.key, value, path, true),
        FieldKind::Select(options) => select(spec.key, value, options, path),
        FieldKind::Auto => auto(spec.key, value, path, false),
        FieldKind::Float => auto(spec.key, value, path, true),
    }
}

/// The default treatment for unhinted fields: booleans become toggles,
/// two-element numeric pairs become ranges, other arrays comma lists,
/// everything else a text field.
fn auto(key: &str, value: &Value, path: FieldPath, float: bool) -> Widget {
    if value.is_boolean() {
        checkbox(key, value, path)
    } else if is_range_pair(value) {
        range(key, value, path, float)
    } else if value.is_array() {
        comma_list(key, value, path)
    } else {
        text(key, value, path, float)
    }
}

/// A two-element pair of numbers (or numeric strings) renders as a range.
fn is_range_pair(value: &Value) -> bool {
    value.as_array().is_some_and(|items| {
        items.len() == 2
            && items
                .iter()
                .all(|item| item.is_number() || item.is_string())
    })
}

/// Scalar display form: strings verbatim, numbers and booleans formatted,
/// null as the empty string.
fn scalar_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn text(key: &str, value: &Value, path: FieldPath, float: bool) -> Widget {
    let coerce = if value.is_number() {
        if float {
            Coercion::Float
        } else {
            Coercion::Integer
        }
    } else {
        Coercion::Text
    };

    // Secret rendering applies to string fields only; numeric content takes
    // the number treatment even when the key looks secret-ish.
    let lower = key.to_lowercase();
    let secret = coerce == Coercion::Text
        && (lower.contains("key") || lower.contains("token") || lower.contains("passphrase"));

    Widget {
        path,
        label: format_field_name(key),
        control: Control::Text {
            value: scalar_display(value),
            coerce,
            secret,
        },
    }
}

fn checkbox(key: &str, value: &Value, path: FieldPath) -> Widget {
    Widget {
        path,
        label: format_field_name(key),
        control: Control::Toggle {
            checked: value.as_bool().unwrap_or(false),
        },
    }
}

fn range(key: &str, value: &Value, path: FieldPath, float: bool) -> Widget {
    let (min, max) = value.as_array().map_or_else(
        || (String::new(), String::new()),
        |items| {
            (
                items.first().map(scalar_display).unwrap_or_default(),
                items.get(1).map(scalar_display).unwrap_or_default(),
            )
        },
    );
    Widget {
        path,
        label: format_field_name(key),
        control: Control::Range {
            min,
            max,
            coerce: if float {
                Coercion::Float
            } else {
                Coercion::Integer
            },
        },
    }
}

fn comma_list(key: &str, value: &Value, path: FieldPath) -> Widget {
    let (joined, numeric) = value.as_array().map_or_else(
        || (String::new(), false),
        |items| {
            let joined = items
                .iter()
                .map(scalar_display)
                .collect::<Vec<_>>()
                .join(", ");
            let numeric = items.first().is_some_and(Value::is_number);
            (joined, numeric)
        },
    );
    Widget {
        path,
        label: format_field_name(key),
        control: Control::CommaList {
            value: joined,
            numeric,
        },
    }
}

fn tags(key: &str, value: &Value, path: FieldPath, space_delimited: bool) -> Widget {
    // A non-array value becomes a single chip.
    let items: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        Value::Null => Vec::new(),
        other => vec![other],
    };
    let numeric = items.first().is_some_and(|item| item.is_number());
    Widget {
        path,
        label: format_field_name(key),
        control: Control::Tags {
            chips: items.into_iter().map(scalar_display).collect(),
            draft: String::new(),
            space_delimited,
            numeric,
        },
    }
}

fn network(key: &str, value: &Value, path: FieldPath) -> Widget {
    let selected: Vec<&str> = value
        .as_array()
        .map(|items| items.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();
    let entries = NETWORK_CATALOG
        .iter()
        .map(|&name| NetworkEntry {
            name,
            checked: selected.contains(&name),
        })
        .collect();
    Widget {
        path,
        label: format_field_name(key),
        control: Control::Network { entries },
    }
}

fn select(key: &str, value: &Value, options: &[&str], path: FieldPath) -> Widget {
    let selected = value
        .as_str()
        .and_then(|current| options.iter().position(|&option| option == current));
    Widget {
        path,
        label: format_field_name(key),
        control: Control::Select {
            options: options.iter().map(ToString::to_string).collect(),
            selected,
        },
    }
}
