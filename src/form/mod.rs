//! In-memory form model the presentation layer binds to.
//!
//! The model replaces the DOM of a browser editor: every editable control is
//! a [`Widget`] bound to exactly one [`FieldPath`] and one coercion rule.
//! Rendering builds a fresh model from the fetched document; user edits
//! mutate widget state in place; collection reads the model back into a
//! fresh document. Nothing here touches the network or the terminal.

pub mod collect;
pub mod render;

pub use collect::collect;
pub use render::render;

use crate::path::FieldPath;

/// Scalar parsing rule applied when reading a widget's content back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Keep as string
    Text,
    /// Parse as integer
    Integer,
    /// Parse as float
    Float,
}

/// One entry of a network-selection widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkEntry {
    /// Catalog network name
    pub name: &'static str,
    /// Whether the entry is currently selected
    pub checked: bool,
}

/// Editable state of a widget, one variant per presentation kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    /// Free text; numeric content coerces back per `coerce`
    Text {
        /// Current content
        value: String,
        /// Scalar parsing rule
        coerce: Coercion,
        /// Render obscured (API keys, tokens, passphrases)
        secret: bool,
    },
    /// Boolean toggle
    Toggle {
        /// Checked state
        checked: bool,
    },
    /// Two sibling numeric inputs reassembled into an ordered pair
    Range {
        /// Minimum input content
        min: String,
        /// Maximum input content
        max: String,
        /// Parsing rule for both inputs
        coerce: Coercion,
    },
    /// Single comma-joined string split back into a list
    CommaList {
        /// Current content
        value: String,
        /// Parse elements as integers
        numeric: bool,
    },
    /// Removable chips plus a trailing entry control
    Tags {
        /// Committed chips, in insertion order
        chips: Vec<String>,
        /// Uncommitted entry text
        draft: String,
        /// Space also commits the draft
        space_delimited: bool,
        /// Parse chips as integers on collection
        numeric: bool,
    },
    /// Fixed-catalog subset selection
    Network {
        /// One entry per catalog network, in catalog order
        entries: Vec<NetworkEntry>,
    },
    /// Single choice from a finite option list
    Select {
        /// Available options
        options: Vec<String>,
        /// Selected option index; `None` when the current value is not in
        /// the option list (collection then falls back to the first option)
        selected: Option<usize>,
    },
}

/// A rendered control bound to one field path and one coercion rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    /// Position of the bound value in the document
    pub path: FieldPath,
    /// Human-readable label
    pub label: String,
    /// Editable state
    pub control: Control,
}

impl Widget {
    /// Synthetic path of the minimum input of a range widget.
    #[must_use]
    pub fn min_path(&self) -> FieldPath {
        self.path.with_suffix("_MIN")
    }

    /// Synthetic path of the maximum input of a range widget.
    #[must_use]
    pub fn max_path(&self) -> FieldPath {
        self.path.with_suffix("_MAX")
    }

    /// Commits the tag draft as a new chip and clears it.
    ///
    /// Whitespace-only drafts are discarded. No-op for other widget kinds.
    pub fn commit_draft(&mut self) {
        if let Control::Tags { chips, draft, .. } = &mut self.control {
            let text = draft.trim();
            if !text.is_empty() {
                chips.push(text.to_string());
            }
            draft.clear();
        }
    }

    /// Removes the chip at `index`, leaving all other chips in place.
    pub fn remove_chip(&mut self, index: usize) {
        if let Control::Tags { chips, .. } = &mut self.control {
            if index < chips.len() {
                chips.remove(index);
            }
        }
    }

    /// Flips a toggle widget's checked state.
    pub fn toggle(&mut self) {
        if let Control::Toggle { checked } = &mut self.control {
            *checked = !*checked;
        }
    }

    /// Flips the network entry at `index`.
    pub fn toggle_network(&mut self, index: usize) {
        if let Control::Network { entries } = &mut self.control {
            if let Some(entry) = entries.get_mut(index) {
                entry.checked = !entry.checked;
            }
        }
    }

    /// Moves a select widget's choice by `delta`, clamped to the option
    /// list. A select with no pre-selection starts from the first option.
    pub fn cycle_select(&mut self, delta: isize) {
        if let Control::Select { options, selected } = &mut self.control {
            if options.is_empty() {
                return;
            }
            let current = selected.unwrap_or(0) as isize;
            let last = options.len() as isize - 1;
            *selected = Some(current.saturating_add(delta).clamp(0, last) as usize);
        }
    }
}

/// A row of a card: either an editable widget or a group heading
/// (withdrawal records render as titled groups).
#[derive(Debug, Clone, PartialEq)]
pub enum CardItem {
    /// Editable widget
    Field(Widget),
    /// Non-editable group heading
    GroupLabel(String),
}

/// A visual card grouping widgets inside a section.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// Card title
    pub title: String,
    /// Icon identifier
    pub icon: String,
    /// Rows in display order
    pub items: Vec<CardItem>,
}

impl Card {
    /// Widgets of this card, in display order.
    pub fn widgets(&self) -> impl Iterator<Item = &Widget> {
        self.items.iter().filter_map(|item| match item {
            CardItem::Field(widget) => Some(widget),
            CardItem::GroupLabel(_) => None,
        })
    }
}

/// One titled section per top-level category.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Stable section id
    pub id: &'static str,
    /// Display title
    pub title: &'static str,
    /// Icon identifier
    pub icon: &'static str,
    /// Whether the section is currently shown
    pub visible: bool,
    /// Cards of the section; empty when the category key was absent
    pub cards: Vec<Card>,
}

/// The whole rendered form: nine sections in display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormModel {
    /// Sections in category display order
    pub sections: Vec<Section>,
}

impl FormModel {
    /// All widgets in document order (sections, then cards, then rows).
    pub fn widgets(&self) -> impl Iterator<Item = &Widget> {
        self.sections
            .iter()
            .flat_map(|s| s.cards.iter())
            .flat_map(Card::widgets)
    }

    /// Mutable access to all widgets in document order.
    pub fn widgets_mut(&mut self) -> impl Iterator<Item = &mut Widget> {
        self.sections
            .iter_mut()
            .flat_map(|s| s.cards.iter_mut())
            .flat_map(|c| {
                c.items.iter_mut().filter_map(|item| match item {
                    CardItem::Field(widget) => Some(widget),
                    CardItem::GroupLabel(_) => None,
                })
            })
    }

    /// Shows exactly the section at `index`, hiding all others.
    ///
    /// Visibility toggling, not re-rendering: widget state is untouched.
    pub fn show_section(&mut self, index: usize) {
        for (i, section) in self.sections.iter_mut().enumerate() {
            section.visible = i == index;
        }
    }

    /// Index of the currently visible section.
    #[must_use]
    pub fn visible_section(&self) -> usize {
        self.sections.iter().position(|s| s.visible).unwrap_or(0)
    }
}

/// Formats a document key as a display label: underscores become spaces,
/// the first letter is capitalized, the rest lowercased.
#[must_use]
pub fn format_field_name(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_widget(chips: &[&str], space: bool) -> Widget {
        Widget {
            path: FieldPath::key("RPCS").child("ZEROG"),
            label: "Zerog".to_string(),
            control: Control::Tags {
                chips: chips.iter().map(ToString::to_string).collect(),
                draft: String::new(),
                space_delimited: space,
                numeric: false,
            },
        }
    }

    #[test]
    fn test_format_field_name() {
        assert_eq!(format_field_name("THREADS"), "Threads");
        assert_eq!(
            format_field_name("PAUSE_BETWEEN_ATTEMPTS"),
            "Pause between attempts"
        );
        assert_eq!(format_field_name("apiKey"), "Apikey");
    }

    #[test]
    fn test_commit_draft_trims_and_clears() {
        let mut widget = tag_widget(&["a"], false);
        if let Control::Tags { draft, .. } = &mut widget.control {
            *draft = "  b  ".to_string();
        }
        widget.commit_draft();
        if let Control::Tags { chips, draft, .. } = &widget.control {
            assert_eq!(chips, &["a", "b"]);
            assert!(draft.is_empty());
        } else {
            unreachable!();
        }
    }

    #[test]
    fn test_commit_empty_draft_is_noop() {
        let mut widget = tag_widget(&["a"], true);
        if let Control::Tags { draft, .. } = &mut widget.control {
            *draft = "   ".to_string();
        }
        widget.commit_draft();
        if let Control::Tags { chips, .. } = &widget.control {
            assert_eq!(chips, &["a"]);
        }
    }

    #[test]
    fn test_remove_chip_deletes_only_itself() {
        let mut widget = tag_widget(&["a", "b", "c"], false);
        widget.remove_chip(1);
        if let Control::Tags { chips, .. } = &widget.control {
            assert_eq!(chips, &["a", "c"]);
        }
        widget.remove_chip(10); // out of range is ignored
        if let Control::Tags { chips, .. } = &widget.control {
            assert_eq!(chips.len(), 2);
        }
    }

    #[test]
    fn test_show_section_is_exclusive() {
        let section = |id| Section {
            id,
            title: "T",
            icon: "i",
            visible: false,
            cards: Vec::new(),
        };
        let mut model = FormModel {
            sections: vec![section("a"), section("b"), section("c")],
        };
        model.show_section(1);
        assert_eq!(model.visible_section(), 1);
        model.show_section(2);
        let visible: Vec<bool> = model.sections.iter().map(|s| s.visible).collect();
        assert_eq!(visible, [false, false, true]);
    }

    #[test]
    fn test_cycle_select_clamps_and_defaults_to_first() {
        let mut widget = Widget {
            path: FieldPath::key("EXCHANGES").child("name"),
            label: "Name".to_string(),
            control: Control::Select {
                options: vec!["OKX".to_string(), "BITGET".to_string()],
                selected: None,
            },
        };
        widget.cycle_select(1);
        assert!(matches!(
            widget.control,
            Control::Select { selected: Some(1), .. }
        ));
        widget.cycle_select(5);
        assert!(matches!(
            widget.control,
            Control::Select { selected: Some(1), .. }
        ));
        widget.cycle_select(-5);
        assert!(matches!(
            widget.control,
            Control::Select { selected: Some(0), .. }
        ));
    }
}
