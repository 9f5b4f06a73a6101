use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MarketError;
use crate::models::Property;

pub type Comparator = fn(&Property, &Property) -> Ordering;

/// Ordering applied to search results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    PriceLow,
    PriceHigh,
    #[default]
    Newest,
    Oldest,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Newest,
        SortKey::Oldest,
        SortKey::PriceLow,
        SortKey::PriceHigh,
    ];

    /// Comparator for this key. Equal keys compare `Equal`; callers sort stably.
    pub fn comparator(self) -> Comparator {
        match self {
            SortKey::PriceLow => rent_ascending,
            SortKey::PriceHigh => rent_descending,
            SortKey::Newest => created_descending,
            SortKey::Oldest => created_ascending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Newest => "Newest First",
            SortKey::Oldest => "Oldest First",
        }
    }
}

fn rent_ascending(a: &Property, b: &Property) -> Ordering {
    a.rent.cmp(&b.rent)
}

fn rent_descending(a: &Property, b: &Property) -> Ordering {
    b.rent.cmp(&a.rent)
}

fn created_ascending(a: &Property, b: &Property) -> Ordering {
    a.created_at.cmp(&b.created_at)
}

fn created_descending(a: &Property, b: &Property) -> Ordering {
    b.created_at.cmp(&a.created_at)
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| MarketError::InvalidSortKey(s.to_string()))
    }
}
