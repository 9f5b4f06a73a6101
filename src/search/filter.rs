use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{MarketError, Result};
use crate::models::{Property, PropertyType};

/// Upper rent bound of the listing page's default filters
pub const DEFAULT_MAX_RENT: u32 = 10_000;

/// User-chosen constraints narrowing the property collection.
///
/// Every empty set means "no constraint". Rent bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    /// Case-insensitive substring matched against "city state zip"
    pub location: String,
    pub min_rent: u32,
    pub max_rent: u32,
    pub property_type: BTreeSet<PropertyType>,
    /// Accepted bedroom counts, matched exactly
    pub bedrooms: BTreeSet<u32>,
    /// Accepted bathroom counts, matched exactly
    pub bathrooms: BTreeSet<u32>,
    /// Every listed amenity must be present on the property
    pub amenities: BTreeSet<String>,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            location: String::new(),
            min_rent: 0,
            max_rent: DEFAULT_MAX_RENT,
            property_type: BTreeSet::new(),
            bedrooms: BTreeSet::new(),
            bathrooms: BTreeSet::new(),
            amenities: BTreeSet::new(),
        }
    }
}

impl FilterSpec {
    /// A spec that accepts every property, whatever its rent
    pub fn any() -> Self {
        Self {
            max_rent: u32::MAX,
            ..Self::default()
        }
    }

    /// Restore the default filters
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Reports an inverted rent range. `matches` does not call this; an inverted
    /// range just matches nothing.
    pub fn validate(&self) -> Result<()> {
        if self.min_rent > self.max_rent {
            return Err(MarketError::InvalidFilterRange {
                min: self.min_rent,
                max: self.max_rent,
            });
        }
        Ok(())
    }

    /// Set the minimum rent from the leading integer of free text; no digits means 0.
    pub fn set_min_rent_input(&mut self, input: &str) {
        self.min_rent = leading_integer(input).unwrap_or(0);
    }

    /// Set the maximum rent from the leading integer of free text; no digits (or 0)
    /// means the default cap.
    pub fn set_max_rent_input(&mut self, input: &str) {
        self.max_rent = match leading_integer(input) {
            None | Some(0) => DEFAULT_MAX_RENT,
            Some(max) => max,
        };
    }

    pub fn toggle_property_type(&mut self, property_type: PropertyType) {
        toggle(&mut self.property_type, property_type);
    }

    pub fn toggle_bedrooms(&mut self, count: u32) {
        toggle(&mut self.bedrooms, count);
    }

    pub fn toggle_bathrooms(&mut self, count: u32) {
        toggle(&mut self.bathrooms, count);
    }

    pub fn toggle_amenity(&mut self, amenity: &str) {
        if !self.amenities.remove(amenity) {
            self.amenities.insert(amenity.to_string());
        }
    }

    /// Whether `property` passes every constraint of this spec.
    ///
    /// Bedroom and bathroom sets are exact-membership tests: `{2}` rejects a
    /// three-bedroom property even though listing controls label the option "2+".
    pub fn matches(&self, property: &Property) -> bool {
        if !self.location.is_empty() {
            let query = self.location.to_lowercase();
            let haystack = property.location.search_text().to_lowercase();
            if !haystack.contains(&query) {
                return false;
            }
        }

        if property.rent < self.min_rent || property.rent > self.max_rent {
            return false;
        }

        if !self.property_type.is_empty() && !self.property_type.contains(&property.property_type) {
            return false;
        }

        if !self.bedrooms.is_empty() && !self.bedrooms.contains(&property.bedrooms) {
            return false;
        }

        if !self.bathrooms.is_empty() && !self.bathrooms.contains(&property.bathrooms) {
            return false;
        }

        self.amenities.is_subset(&property.amenities)
    }
}

/// Integer at the start of `input` after whitespace and an optional sign.
/// Negative values clamp to 0, oversized ones to `u32::MAX`.
fn leading_integer(input: &str) -> Option<u32> {
    let input = input.trim_start();
    let (negative, rest) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };

    let digits: Vec<u32> = rest.chars().map_while(|c| c.to_digit(10)).collect();
    if digits.is_empty() {
        return None;
    }
    if negative {
        return Some(0);
    }
    Some(
        digits
            .into_iter()
            .fold(0u32, |acc, digit| acc.saturating_mul(10).saturating_add(digit)),
    )
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if set.contains(&value) {
        set.remove(&value);
    } else {
        set.insert(value);
    }
}
