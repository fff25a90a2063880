use serde::{Deserialize, Serialize};

/// A single job posting extracted from a listing container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    /// Posting title
    pub title: String,

    /// Hiring company
    pub company: String,

    /// Location text, empty when the listing carries none
    pub location: String,

    /// Absolute link to the posting
    pub url: String,
}

impl JobRecord {
    /// Create a new job record
    pub fn new(title: String, company: String, location: String, url: String) -> Self {
        Self {
            title,
            company,
            location,
            url,
        }
    }
}
