use crate::parsers::{ListingFields, ListingShape, element_text};
use scraper::{ElementRef, Html, Selector};

/// Class marking the location line of a job card
pub const LOCATION_CLASS: &str = "job-search-card__location";

/// Shape of the guest job search fragment.
///
/// Every `li` is a candidate; inside it the first `h3` is the title, the
/// first `h4` the company, the first location-classed element the location
/// and the first anchor with a non-empty href the link.
pub struct GuestListing {
    container: Selector,
    title: Selector,
    company: Selector,
    location: Selector,
    link: Selector,
}

impl GuestListing {
    pub fn new() -> Self {
        Self {
            container: selector("li"),
            title: selector("h3"),
            company: selector("h4"),
            location: selector(&format!(".{}", LOCATION_CLASS)),
            link: selector("a[href]"),
        }
    }
}

impl Default for GuestListing {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingShape for GuestListing {
    fn containers<'a>(&self, doc: &'a Html) -> Vec<ElementRef<'a>> {
        doc.select(&self.container).collect()
    }

    fn fields(&self, container: ElementRef<'_>) -> ListingFields {
        let first_text = |sel: &Selector| container.select(sel).next().map(element_text);

        let href = container
            .select(&self.link)
            .filter_map(|a| a.value().attr("href"))
            .map(str::trim)
            .find(|href| !href.is_empty())
            .map(str::to_string);

        ListingFields {
            title: first_text(&self.title),
            company: first_text(&self.company),
            location: first_text(&self.location),
            href,
        }
    }
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("listing selectors are valid CSS")
}
