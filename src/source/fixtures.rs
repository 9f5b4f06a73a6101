use chrono::{DateTime, TimeZone, Utc};

use crate::models::{
    Availability, Coordinates, Inquiry, InquiryStatus, Location, OwnerContact, Property, PropertyType,
};

/// Amenities offered as filter options on the listing page
pub const COMMON_AMENITIES: [&str; 12] = [
    "Air Conditioning",
    "Balcony",
    "Dishwasher",
    "Elevator",
    "Gym",
    "Laundry",
    "Parking",
    "Pet Friendly",
    "Pool",
    "Doorman",
    "Furnished",
    "Garden",
];

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

fn amenities(names: &[&str]) -> std::collections::BTreeSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

struct Listing<'a> {
    id: &'a str,
    title: &'a str,
    property_type: PropertyType,
    rent: u32,
    address: &'a str,
    city: &'a str,
    zip_code: &'a str,
    bedrooms: u32,
    bathrooms: u32,
    area: u32,
    amenities: &'a [&'a str],
    owner: (&'a str, &'a str),
    availability: Availability,
    created_at: DateTime<Utc>,
}

impl Listing<'_> {
    fn build(self) -> Property {
        let (owner_id, owner_name) = self.owner;
        let slug = owner_name.to_lowercase().replace(' ', ".");
        Property {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: format!(
                "{} in {}. {} bedroom(s), {} bathroom(s), {} sq ft.",
                self.title, self.city, self.bedrooms, self.bathrooms, self.area
            ),
            property_type: self.property_type,
            rent: self.rent,
            location: Location {
                address: self.address.to_string(),
                city: self.city.to_string(),
                state: "NY".to_string(),
                zip_code: self.zip_code.to_string(),
                coordinates: Some(Coordinates {
                    lat: 40.7128,
                    lng: -74.0060,
                }),
            },
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            area: self.area,
            amenities: amenities(self.amenities),
            images: vec![
                format!("https://images.example.com/{}/1.jpg", self.id),
                format!("https://images.example.com/{}/2.jpg", self.id),
                format!("https://images.example.com/{}/3.jpg", self.id),
            ],
            owner_id: owner_id.to_string(),
            owner_name: owner_name.to_string(),
            owner_contact: OwnerContact {
                email: format!("{slug}@example.com"),
                phone: "(555) 123-4567".to_string(),
            },
            availability: self.availability,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// Static listings the marketplace ships with
pub fn mock_properties() -> Vec<Property> {
    vec![
        Listing {
            id: "1",
            title: "Modern Downtown Apartment",
            property_type: PropertyType::Apartment,
            rent: 2500,
            address: "123 Main Street",
            city: "New York",
            zip_code: "10001",
            bedrooms: 2,
            bathrooms: 2,
            area: 1200,
            amenities: &["Air Conditioning", "Dishwasher", "Gym", "Laundry", "Elevator"],
            owner: ("2", "Sarah Johnson"),
            availability: Availability::Available,
            created_at: date(2024, 1, 15),
        }
        .build(),
        Listing {
            id: "2",
            title: "Cozy Brooklyn Studio",
            property_type: PropertyType::Studio,
            rent: 1800,
            address: "456 Bedford Avenue",
            city: "Brooklyn",
            zip_code: "11211",
            bedrooms: 0,
            bathrooms: 1,
            area: 550,
            amenities: &["Laundry", "Pet Friendly", "Furnished"],
            owner: ("3", "Mike Chen"),
            availability: Availability::Available,
            created_at: date(2024, 2, 3),
        }
        .build(),
        Listing {
            id: "3",
            title: "Spacious Family House",
            property_type: PropertyType::House,
            rent: 4200,
            address: "789 Oak Lane",
            city: "Queens",
            zip_code: "11375",
            bedrooms: 4,
            bathrooms: 3,
            area: 2400,
            amenities: &["Parking", "Garden", "Dishwasher", "Laundry", "Pet Friendly"],
            owner: ("2", "Sarah Johnson"),
            availability: Availability::Pending,
            created_at: date(2023, 12, 20),
        }
        .build(),
        Listing {
            id: "4",
            title: "Private Room Near Campus",
            property_type: PropertyType::Room,
            rent: 950,
            address: "22 University Place",
            city: "New York",
            zip_code: "10003",
            bedrooms: 1,
            bathrooms: 1,
            area: 300,
            amenities: &["Furnished", "Laundry"],
            owner: ("3", "Mike Chen"),
            availability: Availability::Available,
            created_at: date(2024, 3, 1),
        }
        .build(),
        Listing {
            id: "5",
            title: "Luxury Brooklyn Loft",
            property_type: PropertyType::Apartment,
            rent: 3600,
            address: "90 Water Street",
            city: "Brooklyn",
            zip_code: "11201",
            bedrooms: 3,
            bathrooms: 2,
            area: 1650,
            amenities: &["Air Conditioning", "Doorman", "Elevator", "Gym", "Pool", "Balcony"],
            owner: ("2", "Sarah Johnson"),
            availability: Availability::Rented,
            created_at: date(2024, 2, 18),
        }
        .build(),
        Listing {
            id: "6",
            title: "Harlem Garden Apartment",
            property_type: PropertyType::Apartment,
            rent: 2100,
            address: "310 West 135th Street",
            city: "New York",
            zip_code: "10030",
            bedrooms: 1,
            bathrooms: 1,
            area: 780,
            amenities: &["Garden", "Pet Friendly", "Laundry"],
            owner: ("7", "Dana Whitfield"),
            availability: Availability::Available,
            created_at: date(2024, 1, 5),
        }
        .build(),
    ]
}

/// Static inquiries matching [`mock_properties`]
pub fn mock_inquiries() -> Vec<Inquiry> {
    let inquiry = |id: &str, property_id: &str, renter: (&str, &str), status, created_at| Inquiry {
        id: id.to_string(),
        property_id: property_id.to_string(),
        renter_id: renter.0.to_string(),
        renter_name: renter.1.to_string(),
        renter_email: format!("{}@example.com", renter.1.to_lowercase().replace(' ', ".")),
        renter_phone: "(555) 987-6543".to_string(),
        message: "Hi, I'm interested in this property. Is it still available for a viewing?"
            .to_string(),
        status,
        created_at,
        updated_at: created_at,
    };

    vec![
        inquiry("1", "1", ("1", "John Doe"), InquiryStatus::Pending, date(2024, 3, 4)),
        inquiry("2", "3", ("1", "John Doe"), InquiryStatus::Approved, date(2024, 2, 11)),
        inquiry("3", "1", ("4", "Emily Davis"), InquiryStatus::Rejected, date(2024, 2, 25)),
        inquiry("4", "2", ("4", "Emily Davis"), InquiryStatus::Pending, date(2024, 3, 8)),
    ]
}

/// A single available New York apartment, for building test scenarios
pub fn sample_property(id: &str, bedrooms: u32) -> Property {
    Listing {
        id,
        title: "Sample Apartment",
        property_type: PropertyType::Apartment,
        rent: 2000,
        address: "1 Sample Street",
        city: "New York",
        zip_code: "10001",
        bedrooms,
        bathrooms: 1,
        area: 800,
        amenities: &[],
        owner: ("2", "Sarah Johnson"),
        availability: Availability::Available,
        created_at: date(2024, 1, 1),
    }
    .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn fixture_ids_are_unique() {
        let properties = mock_properties();
        let ids: HashSet<&str> = properties.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), properties.len());
    }

    #[test]
    fn inquiries_reference_known_properties() {
        let properties = mock_properties();
        for inquiry in mock_inquiries() {
            assert!(properties.iter().any(|p| p.id == inquiry.property_id));
        }
    }

    #[test]
    fn every_listing_has_images() {
        assert!(mock_properties().iter().all(|p| !p.images.is_empty()));
    }
}
