use joblist_core::{DEFAULT_PER_PAGE, MAX_PER_PAGE};

/// Job service configuration.
///
/// Controls list pagination defaults and the page-size ceiling enforced at
/// the transport boundary.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Page size used when a list request omits `per_page`.
    pub default_per_page: u32,
    /// Largest `per_page` a list request may ask for.
    pub max_per_page: u32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_per_page: DEFAULT_PER_PAGE,
            max_per_page: MAX_PER_PAGE,
        }
    }
}
