use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::{Inquiry, Property, User};

/// Contents of the inquiry form on a property page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryDraft {
    pub message: String,
    #[serde(default)]
    pub preferred_date: Option<NaiveDate>,
}

/// Position in a property's image list; moves wrap around at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gallery {
    index: usize,
    len: usize,
}

impl Gallery {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = self.index.checked_sub(1).unwrap_or(self.len - 1);
        }
    }
}

/// State of one property page
#[derive(Debug, Clone)]
pub struct PropertyDetail {
    property: Property,
    gallery: Gallery,
    inquiry_open: bool,
    draft: InquiryDraft,
}

impl PropertyDetail {
    /// Open the page for `id`; fails with `PropertyNotFound` for unknown ids.
    pub fn open(catalog: &Catalog, id: &str) -> Result<Self> {
        let property = catalog.property(id)?.clone();
        Ok(Self {
            gallery: Gallery::new(property.images.len()),
            property,
            inquiry_open: false,
            draft: InquiryDraft::default(),
        })
    }

    pub fn property(&self) -> &Property {
        &self.property
    }

    pub fn current_image(&self) -> Option<&str> {
        self.property
            .images
            .get(self.gallery.index())
            .map(String::as_str)
    }

    pub fn next_image(&mut self) {
        self.gallery.next();
    }

    pub fn prev_image(&mut self) {
        self.gallery.prev();
    }

    pub fn open_inquiry(&mut self) {
        self.inquiry_open = true;
    }

    pub fn is_inquiry_open(&self) -> bool {
        self.inquiry_open
    }

    pub fn draft(&self) -> &InquiryDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut InquiryDraft {
        &mut self.draft
    }

    /// Submit the draft into `catalog`; on success the form closes and clears.
    pub fn submit_inquiry<'c>(
        &mut self,
        catalog: &'c mut Catalog,
        renter: Option<&User>,
    ) -> Result<&'c Inquiry> {
        let inquiry = catalog.submit_inquiry(&self.property.id, renter, &self.draft)?;
        self.inquiry_open = false;
        self.draft = InquiryDraft::default();
        Ok(inquiry)
    }
}
