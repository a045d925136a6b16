//! Declarative category schema for the configuration editor.
//!
//! The schema is the single source of truth for what the editor shows:
//! the nine top-level categories in display order, the cards inside each
//! category, and the per-field presentation hints. Both the renderer and
//! (through the widgets it produces) the collector consume this table, so
//! the two can never drift apart.

/// Presentation hint determining widget shape and coercion for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Infer from the value: booleans become toggles, two-element numeric
    /// pairs become ranges, other arrays become comma lists, everything
    /// else a text field (numeric values coerce back to integers).
    Auto,
    /// Like `Auto`, but numeric content coerces back to floats.
    Float,
    /// Boolean toggle.
    Checkbox,
    /// Removable chips with a text entry; Enter commits a new chip.
    Tags,
    /// Chips committed by Enter or Space.
    SpaceTags,
    /// One toggle per entry of the fixed network catalog.
    Network,
    /// Single choice from a fixed option list.
    Select(&'static [&'static str]),
}

/// One field of a card: document key plus presentation hint.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Key inside the category's mapping
    pub key: &'static str,
    /// Presentation hint
    pub kind: FieldKind,
}

const fn field(key: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { key, kind }
}

/// A visual card grouping several fields inside a category.
#[derive(Debug, Clone, Copy)]
pub struct CardDef {
    /// Card title
    pub title: &'static str,
    /// Icon identifier (Font Awesome name, kept for API parity)
    pub icon: &'static str,
    /// Ordered fields shown on the card
    pub fields: &'static [FieldSpec],
}

/// How a category's fields are laid out.
#[derive(Debug, Clone, Copy)]
pub enum CategoryLayout {
    /// Curated cards with explicit field lists
    Cards(&'static [CardDef]),
    /// One card where every key of the category becomes a tag list
    TagListPerKey {
        /// Card title
        title: &'static str,
        /// Card icon
        icon: &'static str,
    },
    /// Exchange details card plus one group per withdrawal-rule record
    Exchange,
}

/// A top-level category of the configuration document.
#[derive(Debug, Clone, Copy)]
pub struct CategoryDef {
    /// Stable identifier used for section ids
    pub id: &'static str,
    /// Key of the category in the document
    pub key: &'static str,
    /// Display title
    pub title: &'static str,
    /// Icon identifier
    pub icon: &'static str,
    /// Field layout
    pub layout: CategoryLayout,
}

/// Options for the exchange name select.
pub const EXCHANGE_OPTIONS: &[&str] = &["OKX", "BITGET"];

/// Fields of the exchange details card.
pub const EXCHANGE_DETAIL_FIELDS: &[FieldSpec] = &[
    field("name", FieldKind::Select(EXCHANGE_OPTIONS)),
    field("apiKey", FieldKind::Auto),
    field("secretKey", FieldKind::Auto),
    field("passphrase", FieldKind::Auto),
];

/// Fields of one withdrawal-rule record, in display order.
pub const WITHDRAWAL_FIELDS: &[FieldSpec] = &[
    field("currency", FieldKind::Auto),
    field("networks", FieldKind::Network),
    field("min_amount", FieldKind::Float),
    field("max_amount", FieldKind::Float),
    field("max_balance", FieldKind::Float),
    field("wait_for_funds", FieldKind::Checkbox),
    field("max_wait_time", FieldKind::Auto),
    field("retries", FieldKind::Auto),
];

const SETTINGS_CARDS: &[CardDef] = &[
    CardDef {
        title: "Basic Settings",
        icon: "sliders-h",
        fields: &[
            field("THREADS", FieldKind::Auto),
            field("ATTEMPTS", FieldKind::Auto),
            field("SHUFFLE_WALLETS", FieldKind::Auto),
            field("WAIT_FOR_TRANSACTION_CONFIRMATION_IN_SECONDS", FieldKind::Auto),
        ],
    },
    CardDef {
        title: "Account Settings",
        icon: "users",
        fields: &[
            field("ACCOUNTS_RANGE", FieldKind::Auto),
            field("EXACT_ACCOUNTS_TO_USE", FieldKind::SpaceTags),
        ],
    },
    CardDef {
        title: "Timing Settings",
        icon: "clock",
        fields: &[
            field("PAUSE_BETWEEN_ATTEMPTS", FieldKind::Auto),
            field("PAUSE_BETWEEN_SWAPS", FieldKind::Auto),
            field("RANDOM_PAUSE_BETWEEN_ACCOUNTS", FieldKind::Auto),
            field("RANDOM_PAUSE_BETWEEN_ACTIONS", FieldKind::Auto),
            field("RANDOM_INITIALIZATION_PAUSE", FieldKind::Auto),
        ],
    },
    CardDef {
        title: "Telegram Settings",
        icon: "paper-plane",
        fields: &[
            field("SEND_TELEGRAM_LOGS", FieldKind::Auto),
            field("TELEGRAM_BOT_TOKEN", FieldKind::Auto),
            field("TELEGRAM_USERS_IDS", FieldKind::SpaceTags),
        ],
    },
];

const FLOW_CARDS: &[CardDef] = &[CardDef {
    title: "Flow Settings",
    icon: "exchange-alt",
    fields: &[field("SKIP_FAILED_TASKS", FieldKind::Checkbox)],
}];

const SWAPS_CARDS: &[CardDef] = &[CardDef {
    title: "Zero Exchange Swaps Settings",
    icon: "sync",
    fields: &[
        field("BALANCE_PERCENT_TO_SWAP", FieldKind::Auto),
        field("NUMBER_OF_SWAPS", FieldKind::Auto),
    ],
}];

const CAPTCHA_CARDS: &[CardDef] = &[CardDef {
    title: "Captcha Settings",
    icon: "robot",
    fields: &[
        field("SOLVIUM_API_KEY", FieldKind::Auto),
        field("NOCAPTCHA_API_KEY", FieldKind::Auto),
        field("USE_NOCAPTCHA", FieldKind::Checkbox),
    ],
}];

const PUZZLEMANIA_CARDS: &[CardDef] = &[CardDef {
    title: "Puzzlemania Settings",
    icon: "puzzle-piece",
    fields: &[
        field("USE_REFERRAL_CODE", FieldKind::Checkbox),
        field("INVITES_PER_REFERRAL_CODE", FieldKind::Auto),
        field("COLLECT_REFERRAL_CODE", FieldKind::Checkbox),
    ],
}];

const CRUSTY_SWAP_CARDS: &[CardDef] = &[CardDef {
    title: "Crusty Swap Settings",
    icon: "gas-pump",
    fields: &[
        field("NETWORKS_TO_REFUEL_FROM", FieldKind::Network),
        field("AMOUNT_TO_REFUEL", FieldKind::Float),
        field("MINIMUM_BALANCE_TO_REFUEL", FieldKind::Float),
        field("WAIT_FOR_FUNDS_TO_ARRIVE", FieldKind::Checkbox),
        field("MAX_WAIT_TIME", FieldKind::Auto),
        field("BRIDGE_ALL", FieldKind::Checkbox),
        field("BRIDGE_ALL_MAX_AMOUNT", FieldKind::Float),
    ],
}];

const OTHERS_CARDS: &[CardDef] = &[CardDef {
    title: "Other Settings",
    icon: "ellipsis-h",
    fields: &[
        field("SKIP_SSL_VERIFICATION", FieldKind::Checkbox),
        field("USE_PROXY_FOR_RPC", FieldKind::Checkbox),
    ],
}];

/// The nine categories of the editor, in display order.
///
/// Only the first category starts visible; switching tabs toggles section
/// visibility without re-rendering.
pub const CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        id: "settings",
        key: "SETTINGS",
        title: "Settings",
        icon: "cog",
        layout: CategoryLayout::Cards(SETTINGS_CARDS),
    },
    CategoryDef {
        id: "flow",
        key: "FLOW",
        title: "Flow",
        icon: "exchange-alt",
        layout: CategoryLayout::Cards(FLOW_CARDS),
    },
    CategoryDef {
        id: "swaps",
        key: "ZERO_EXCHANGE_SWAPS",
        title: "Zero Exchange Swaps",
        icon: "sync",
        layout: CategoryLayout::Cards(SWAPS_CARDS),
    },
    CategoryDef {
        id: "captcha",
        key: "CAPTCHA",
        title: "Captcha",
        icon: "robot",
        layout: CategoryLayout::Cards(CAPTCHA_CARDS),
    },
    CategoryDef {
        id: "rpcs",
        key: "RPCS",
        title: "RPCs",
        icon: "network-wired",
        layout: CategoryLayout::TagListPerKey {
            title: "RPC Settings",
            icon: "network-wired",
        },
    },
    CategoryDef {
        id: "puzzlemania",
        key: "PUZZLEMANIA",
        title: "Puzzlemania",
        icon: "puzzle-piece",
        layout: CategoryLayout::Cards(PUZZLEMANIA_CARDS),
    },
    CategoryDef {
        id: "crustyswap",
        key: "CRUSTY_SWAP",
        title: "Crusty Swap",
        icon: "gas-pump",
        layout: CategoryLayout::Cards(CRUSTY_SWAP_CARDS),
    },
    CategoryDef {
        id: "exchanges",
        key: "EXCHANGES",
        title: "Exchanges",
        icon: "university",
        layout: CategoryLayout::Exchange,
    },
    CategoryDef {
        id: "others",
        key: "OTHERS",
        title: "Others",
        icon: "ellipsis-h",
        layout: CategoryLayout::Cards(OTHERS_CARDS),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nine_categories_in_display_order() {
        let ids: Vec<&str> = CATEGORIES.iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            [
                "settings",
                "flow",
                "swaps",
                "captcha",
                "rpcs",
                "puzzlemania",
                "crustyswap",
                "exchanges",
                "others"
            ]
        );
    }

    #[test]
    fn test_category_keys_unique() {
        let mut keys: Vec<&str> = CATEGORIES.iter().map(|c| c.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), CATEGORIES.len());
    }

    #[test]
    fn test_withdrawal_fields_order() {
        let keys: Vec<&str> = WITHDRAWAL_FIELDS.iter().map(|f| f.key).collect();
        assert_eq!(
            keys,
            [
                "currency",
                "networks",
                "min_amount",
                "max_amount",
                "max_balance",
                "wait_for_funds",
                "max_wait_time",
                "retries"
            ]
        );
    }
}
