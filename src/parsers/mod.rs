pub mod listing;


pub use listing::GuestListing;

use crate::results::JobRecord;
use crate::utils::absolute_url;
use scraper::{ElementRef, Html};

/// Raw fields found inside one listing container, before validation
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListingFields {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub href: Option<String>,
}

/// Maps the markup shape of a listing to its fields.
///
/// Traversal and validation live in [`Extractor`]; a change in markup only
/// needs a new shape.
pub trait ListingShape {
    /// Candidate listing containers, in document order
    fn containers<'a>(&self, doc: &'a Html) -> Vec<ElementRef<'a>>;

    /// Locate the fields inside one container
    fn fields(&self, container: ElementRef<'_>) -> ListingFields;
}

/// Turns listing markup into job records
pub struct Extractor<S = GuestListing> {
    shape: S,
    origin: String,
}

impl Extractor<GuestListing> {
    /// Extractor for the guest search fragment shape
    pub fn new(origin: &str) -> Self {
        Self::with_shape(GuestListing::new(), origin)
    }
}

impl<S: ListingShape> Extractor<S> {
    pub fn with_shape(shape: S, origin: &str) -> Self {
        Self {
            shape,
            origin: origin.to_string(),
        }
    }

    /// Extract every complete listing from `markup`, preserving order.
    ///
    /// Containers without a title, company or link are skipped.
    pub fn extract(&self, markup: &str) -> Vec<JobRecord> {
        let doc = Html::parse_fragment(markup);
        let containers = self.shape.containers(&doc);

        let mut records = Vec::with_capacity(containers.len());
        let mut skipped = 0;
        for container in containers {
            match self.promote(self.shape.fields(container)) {
                Some(record) => records.push(record),
                None => skipped += 1,
            }
        }

        ::log::debug!(
            "Extracted {} listings ({} incomplete containers skipped)",
            records.len(),
            skipped
        );
        records
    }

    fn promote(&self, fields: ListingFields) -> Option<JobRecord> {
        let ListingFields {
            title,
            company,
            location,
            href,
        } = fields;

        Some(JobRecord::new(
            title?,
            company?,
            location.unwrap_or_default(),
            absolute_url(&href?, &self.origin),
        ))
    }
}

/// Text content of an element with surrounding whitespace trimmed
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
