use crate::catalog::Catalog;
use crate::models::{Availability, Inquiry, InquiryStatus, Property, Role, User};

/// Tabs shown on each role's dashboard
pub mod tabs {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub enum RenterTab {
        #[default]
        Overview,
        Inquiries,
        Favorites,
        Messages,
    }

    impl RenterTab {
        pub const ALL: [RenterTab; 4] = [
            RenterTab::Overview,
            RenterTab::Inquiries,
            RenterTab::Favorites,
            RenterTab::Messages,
        ];
    }

    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub enum OwnerTab {
        #[default]
        Overview,
        Properties,
        Inquiries,
        Analytics,
    }

    impl OwnerTab {
        pub const ALL: [OwnerTab; 4] = [
            OwnerTab::Overview,
            OwnerTab::Properties,
            OwnerTab::Inquiries,
            OwnerTab::Analytics,
        ];
    }

    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub enum AdminTab {
        #[default]
        Overview,
        Users,
        Properties,
        Reports,
    }

    impl AdminTab {
        pub const ALL: [AdminTab; 4] = [
            AdminTab::Overview,
            AdminTab::Users,
            AdminTab::Properties,
            AdminTab::Reports,
        ];
    }
}

/// Renter's own inquiries, each joined with its property when it still exists
#[derive(Debug)]
pub struct RenterDashboard<'a> {
    pub tab: tabs::RenterTab,
    pub inquiries: Vec<InquiryRow<'a>>,
}

#[derive(Debug)]
pub struct OwnerDashboard<'a> {
    pub tab: tabs::OwnerTab,
    pub properties: Vec<&'a Property>,
    pub inquiries: Vec<InquiryRow<'a>>,
}

impl RenterDashboard<'_> {
    pub fn select_tab(&mut self, tab: tabs::RenterTab) {
        self.tab = tab;
    }
}

impl OwnerDashboard<'_> {
    pub fn select_tab(&mut self, tab: tabs::OwnerTab) {
        self.tab = tab;
    }

    /// Sum of rent over the owner's rented listings
    pub fn monthly_revenue(&self) -> u64 {
        self.properties
            .iter()
            .filter(|p| p.availability == Availability::Rented)
            .map(|p| u64::from(p.rent))
            .sum()
    }

    pub fn pending_inquiries(&self) -> usize {
        self.inquiries
            .iter()
            .filter(|row| row.inquiry.status == InquiryStatus::Pending)
            .count()
    }
}

/// Platform-wide counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminDashboard {
    pub tab: tabs::AdminTab,
    pub total_properties: usize,
    pub available_properties: usize,
    pub total_inquiries: usize,
    pub pending_inquiries: usize,
}

impl AdminDashboard {
    pub fn select_tab(&mut self, tab: tabs::AdminTab) {
        self.tab = tab;
    }
}

#[derive(Debug, Clone, Copy)]
pub struct InquiryRow<'a> {
    pub inquiry: &'a Inquiry,
    pub property: Option<&'a Property>,
}

/// One dashboard per role
#[derive(Debug)]
pub enum Dashboard<'a> {
    Renter(RenterDashboard<'a>),
    Owner(OwnerDashboard<'a>),
    Admin(AdminDashboard),
}

impl<'a> Dashboard<'a> {
    pub fn for_user(user: &'a User, catalog: &'a Catalog) -> Self {
        let row = move |inquiry: &'a Inquiry| InquiryRow {
            inquiry,
            property: catalog.property(&inquiry.property_id).ok(),
        };

        match user.role {
            Role::Renter => Dashboard::Renter(RenterDashboard {
                tab: tabs::RenterTab::default(),
                inquiries: catalog.inquiries_from(&user.id).map(row).collect(),
            }),
            Role::Owner => Dashboard::Owner(OwnerDashboard {
                tab: tabs::OwnerTab::default(),
                properties: catalog.properties_owned_by(&user.id).collect(),
                inquiries: catalog.inquiries_for_owner(&user.id).map(row).collect(),
            }),
            Role::Admin => {
                let inquiries = catalog.inquiries();
                Dashboard::Admin(AdminDashboard {
                    tab: tabs::AdminTab::default(),
                    total_properties: catalog.properties().len(),
                    available_properties: catalog
                        .properties()
                        .iter()
                        .filter(|p| p.is_available())
                        .count(),
                    total_inquiries: inquiries.len(),
                    pending_inquiries: inquiries
                        .iter()
                        .filter(|i| i.status == InquiryStatus::Pending)
                        .count(),
                })
            }
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Dashboard::Renter(_) => Role::Renter,
            Dashboard::Owner(_) => Role::Owner,
            Dashboard::Admin(_) => Role::Admin,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Dashboard::Renter(_) => "Renter Dashboard",
            Dashboard::Owner(_) => "Property Owner Dashboard",
            Dashboard::Admin(_) => "Admin Dashboard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::fixtures::{mock_inquiries, mock_properties};
    use chrono::Utc;

    fn user(id: &str, role: Role) -> User {
        User {
            id: id.to_string(),
            email: format!("user{id}@example.com"),
            name: format!("user{id}"),
            role,
            phone: None,
            avatar: None,
            is_approved: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn renter_sees_only_own_inquiries() {
        let catalog = Catalog::new(mock_properties(), mock_inquiries());
        let renter = user("1", Role::Renter);

        let Dashboard::Renter(dashboard) = Dashboard::for_user(&renter, &catalog) else {
            panic!("expected renter dashboard");
        };
        assert_eq!(dashboard.inquiries.len(), 2);
        assert!(dashboard.inquiries.iter().all(|row| row.inquiry.renter_id == "1"));
        assert!(dashboard.inquiries.iter().all(|row| row.property.is_some()));
    }

    #[test]
    fn owner_sees_own_listings_and_their_inquiries() {
        let catalog = Catalog::new(mock_properties(), mock_inquiries());
        let owner = user("2", Role::Owner);

        let Dashboard::Owner(dashboard) = Dashboard::for_user(&owner, &catalog) else {
            panic!("expected owner dashboard");
        };
        assert_eq!(dashboard.properties.len(), 3);
        assert_eq!(dashboard.inquiries.len(), 3);
        assert_eq!(dashboard.pending_inquiries(), 1);
        assert_eq!(dashboard.monthly_revenue(), 3600);
    }

    #[test]
    fn admin_counts_whole_platform() {
        let catalog = Catalog::new(mock_properties(), mock_inquiries());
        let admin = user("99", Role::Admin);

        let dashboard = Dashboard::for_user(&admin, &catalog);
        assert_eq!(dashboard.role(), Role::Admin);
        let Dashboard::Admin(stats) = dashboard else {
            panic!("expected admin dashboard");
        };
        assert_eq!(stats.total_properties, 6);
        assert_eq!(stats.available_properties, 4);
        assert_eq!(stats.total_inquiries, 4);
        assert_eq!(stats.pending_inquiries, 2);
    }

    #[test]
    fn tabs_start_on_overview_and_can_switch() {
        let catalog = Catalog::new(mock_properties(), mock_inquiries());
        let owner = user("2", Role::Owner);

        let Dashboard::Owner(mut dashboard) = Dashboard::for_user(&owner, &catalog) else {
            panic!("expected owner dashboard");
        };
        assert_eq!(dashboard.tab, tabs::OwnerTab::Overview);
        for tab in tabs::OwnerTab::ALL {
            dashboard.select_tab(tab);
            assert_eq!(dashboard.tab, tab);
        }

        let admin = user("99", Role::Admin);
        let Dashboard::Admin(mut stats) = Dashboard::for_user(&admin, &catalog) else {
            panic!("expected admin dashboard");
        };
        stats.select_tab(tabs::AdminTab::Reports);
        assert_eq!(stats.tab, tabs::AdminTab::Reports);
        assert_eq!(tabs::RenterTab::ALL[0], tabs::RenterTab::default());
    }

    #[test]
    fn inquiry_on_missing_property_has_no_property() {
        let mut inquiries = mock_inquiries();
        inquiries[0].property_id = "gone".to_string();
        let catalog = Catalog::new(mock_properties(), inquiries);
        let renter = user("1", Role::Renter);

        let Dashboard::Renter(dashboard) = Dashboard::for_user(&renter, &catalog) else {
            panic!("expected renter dashboard");
        };
        assert!(dashboard.inquiries.iter().any(|row| row.property.is_none()));
    }
}
