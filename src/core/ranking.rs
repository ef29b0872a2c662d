use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use crate::models::domain::{Destination, TravelStyle};

/// Field a recommendation list is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    EcoScore,
    Rating,
}

impl SortKey {
    /// Eco-friendly travellers see the most sustainable destinations first
    pub fn for_style(style: TravelStyle) -> Self {
        match style {
            TravelStyle::EcoFriendly => SortKey::EcoScore,
            TravelStyle::Budget | TravelStyle::Luxury => SortKey::Rating,
        }
    }

    /// Descending comparison on this key
    #[inline]
    pub fn compare(&self, a: &Destination, b: &Destination) -> Ordering {
        match self {
            SortKey::EcoScore => b.eco_score.cmp(&a.eco_score),
            SortKey::Rating => b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal),
        }
    }
}

/// Sort destinations descending by `key`
///
/// The sort is stable so ties keep dataset order.
pub fn rank(destinations: &mut [&Destination], key: SortKey) {
    destinations.sort_by(|a, b| key.compare(a, b));
}
