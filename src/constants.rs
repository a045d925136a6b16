//! Application-wide constants.

use std::time::Duration;

/// Application name
pub const APP_NAME: &str = "Confpanel";

/// Default address of the configuration API server
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3001";

/// Fixed catalog of networks selectable in network-selection fields.
///
/// Network widgets render one toggle per catalog entry, and collection
/// always emits checked entries in catalog order, not check order.
pub const NETWORK_CATALOG: [&str; 3] = ["Arbitrum", "Optimism", "Base"];

/// How long a notification stays on screen before auto-dismissing.
pub const NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(3);
