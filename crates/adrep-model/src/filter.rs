use serde::{Deserialize, Serialize};

/// The current set of active view filters.
///
/// `None` / `false` means the corresponding filter is inactive. The state is
/// the only mutable piece of a session; every change triggers a full
/// recomputation of the derived view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Campaign equality filter.
    pub campaign: Option<String>,
    /// Ad-group equality filter. Ad-group choices are campaign-scoped.
    pub ad_group: Option<String>,
    /// Case-insensitive substring match on the asset name.
    pub asset_query: Option<String>,
    /// Gate assets on their latest-day impression count.
    pub min_impressions: bool,
}

/// A partial filter update, applied by the session's `set_filter`.
///
/// Fields left as `None` keep their current value. An empty string clears
/// the corresponding filter. Changing the campaign resets the ad-group and
/// asset filters (cascading reset).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterUpdate {
    pub campaign: Option<String>,
    pub ad_group: Option<String>,
    pub asset_query: Option<String>,
    pub min_impressions: Option<bool>,
}

impl FilterUpdate {
    /// Convenience constructor for a campaign selection.
    pub fn campaign(value: impl Into<String>) -> Self {
        Self {
            campaign: Some(value.into()),
            ..Self::default()
        }
    }
}
