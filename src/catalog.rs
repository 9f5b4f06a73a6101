use chrono::Utc;
use tracing::info;

use crate::detail::InquiryDraft;
use crate::error::{MarketError, Result};
use crate::models::{Inquiry, InquiryStatus, Property, User};
use crate::search::{FilterSpec, SearchView, SortKey};
use crate::source::PropertySource;

/// In-memory listings and inquiries.
///
/// Listings never change once loaded. Inquiries submitted here live only as
/// long as the catalog does.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    properties: Vec<Property>,
    inquiries: Vec<Inquiry>,
}

impl Catalog {
    pub fn new(properties: Vec<Property>, inquiries: Vec<Inquiry>) -> Self {
        Self {
            properties,
            inquiries,
        }
    }

    pub async fn load(source: &dyn PropertySource) -> Result<Self> {
        let properties = source.properties().await?;
        let inquiries = source.inquiries().await?;
        info!(
            "Catalog loaded from {}: {} properties, {} inquiries",
            source.source_name(),
            properties.len(),
            inquiries.len()
        );
        Ok(Self::new(properties, inquiries))
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn inquiries(&self) -> &[Inquiry] {
        &self.inquiries
    }

    pub fn property(&self, id: &str) -> Result<&Property> {
        self.properties
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| MarketError::PropertyNotFound(id.to_string()))
    }

    pub fn search(&self, filters: &FilterSpec, sort: SortKey) -> Vec<&Property> {
        crate::search::search(&self.properties, filters, sort)
    }

    pub fn search_view(&self) -> SearchView<'_> {
        SearchView::new(&self.properties)
    }

    pub fn properties_owned_by<'a>(&'a self, owner_id: &'a str) -> impl Iterator<Item = &'a Property> + 'a {
        self.properties.iter().filter(move |p| p.owner_id == owner_id)
    }

    pub fn inquiries_from<'a>(&'a self, renter_id: &'a str) -> impl Iterator<Item = &'a Inquiry> + 'a {
        self.inquiries.iter().filter(move |i| i.renter_id == renter_id)
    }

    /// Inquiries on any property owned by `owner_id`
    pub fn inquiries_for_owner<'a>(&'a self, owner_id: &'a str) -> impl Iterator<Item = &'a Inquiry> + 'a {
        self.inquiries.iter().filter(move |inquiry| {
            self.properties_owned_by(owner_id)
                .any(|p| p.id == inquiry.property_id)
        })
    }

    /// First `inq-<n>` id, counting up from the inquiry count, not already taken
    fn next_inquiry_id(&self) -> String {
        (self.inquiries.len() + 1..)
            .map(|n| format!("inq-{n}"))
            .find(|id| self.inquiries.iter().all(|i| &i.id != id))
            .unwrap_or_default()
    }

    /// Record a pending inquiry from `renter` about `property_id`.
    pub fn submit_inquiry(
        &mut self,
        property_id: &str,
        renter: Option<&User>,
        draft: &InquiryDraft,
    ) -> Result<&Inquiry> {
        let renter = renter.ok_or(MarketError::SignInRequired)?;
        self.property(property_id)?;
        let message = draft.message.trim();
        if message.is_empty() {
            return Err(MarketError::EmptyInquiryMessage);
        }

        let now = Utc::now();
        let inquiry = Inquiry {
            id: self.next_inquiry_id(),
            property_id: property_id.to_string(),
            renter_id: renter.id.clone(),
            renter_name: renter.name.clone(),
            renter_email: renter.email.clone(),
            renter_phone: renter.phone.clone().unwrap_or_default(),
            message: match draft.preferred_date {
                Some(date) => format!("{message}\n\nPreferred viewing date: {date}"),
                None => message.to_string(),
            },
            status: InquiryStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        info!(
            property_id = %inquiry.property_id,
            renter_id = %inquiry.renter_id,
            "Inquiry submitted"
        );

        let index = self.inquiries.len();
        self.inquiries.push(inquiry);
        Ok(&self.inquiries[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::source::fixtures::{mock_inquiries, mock_properties};
    use crate::source::FixtureSource;
    use testresult::TestResult;

    fn catalog() -> Catalog {
        Catalog::new(mock_properties(), mock_inquiries())
    }

    fn renter() -> User {
        User {
            id: "1".to_string(),
            email: "john@example.com".to_string(),
            name: "john".to_string(),
            role: Role::Renter,
            phone: Some("(555) 000-1111".to_string()),
            avatar: None,
            is_approved: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn unknown_id_is_property_not_found() {
        let result = catalog().property("missing").map(|p| p.id.clone());
        assert!(matches!(result, Err(MarketError::PropertyNotFound(id)) if id == "missing"));
    }

    #[test]
    fn owner_inquiries_only_cover_owned_properties() {
        let catalog = catalog();
        let owned: Vec<&str> = catalog.properties_owned_by("2").map(|p| p.id.as_str()).collect();
        assert_eq!(owned, vec!["1", "3", "5"]);

        for inquiry in catalog.inquiries_for_owner("2") {
            assert!(owned.contains(&inquiry.property_id.as_str()));
        }
        assert_eq!(catalog.inquiries_for_owner("2").count(), 3);
    }

    #[test]
    fn submit_records_pending_inquiry() -> TestResult {
        let mut catalog = catalog();
        let user = renter();
        let before = catalog.inquiries().len();
        let draft = InquiryDraft {
            message: "  Is parking included?  ".to_string(),
            preferred_date: None,
        };

        let inquiry = catalog.submit_inquiry("2", Some(&user), &draft)?;
        assert_eq!(inquiry.status, InquiryStatus::Pending);
        assert_eq!(inquiry.message, "Is parking included?");
        assert_eq!(inquiry.renter_phone, "(555) 000-1111");
        assert_eq!(catalog.inquiries().len(), before + 1);
        Ok(())
    }

    #[test]
    fn back_to_back_submissions_get_distinct_ids() -> TestResult {
        let mut inquiries = mock_inquiries();
        inquiries[0].id = "inq-5".to_string();
        let mut catalog = Catalog::new(mock_properties(), inquiries);
        let user = renter();
        let draft = InquiryDraft {
            message: "Still available?".to_string(),
            preferred_date: None,
        };

        let first = catalog.submit_inquiry("1", Some(&user), &draft)?.id.clone();
        let second = catalog.submit_inquiry("1", Some(&user), &draft)?.id.clone();
        assert_ne!(first, second);
        assert_eq!(first, "inq-6");
        assert_eq!(second, "inq-7");
        Ok(())
    }

    #[test]
    fn submit_rejects_blank_message_unknown_property_and_anonymous() {
        let mut catalog = catalog();
        let user = renter();
        let blank = InquiryDraft::default();
        let hello = InquiryDraft {
            message: "hello".to_string(),
            preferred_date: None,
        };

        assert!(matches!(
            catalog.submit_inquiry("1", Some(&user), &blank),
            Err(MarketError::EmptyInquiryMessage)
        ));
        assert!(matches!(
            catalog.submit_inquiry("404", Some(&user), &hello),
            Err(MarketError::PropertyNotFound(_))
        ));
        assert!(matches!(
            catalog.submit_inquiry("1", None, &hello),
            Err(MarketError::SignInRequired)
        ));
        assert_eq!(catalog.inquiries().len(), mock_inquiries().len());
    }

    #[tokio::test]
    async fn loads_from_a_source() -> TestResult {
        let catalog = Catalog::load(&FixtureSource).await?;
        assert_eq!(catalog.properties().len(), mock_properties().len());
        assert_eq!(catalog.inquiries().len(), mock_inquiries().len());
        Ok(())
    }
}
