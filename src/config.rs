use crate::query::{DatePosted, ExperienceLevel, WorkArrangement};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for a job search run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Free-text search keywords
    #[serde(default = "default_keywords")]
    pub keywords: String,

    /// Region name or menu number (unknown values fall back to the default region)
    #[serde(default = "default_region")]
    pub region: String,

    /// Experience levels to filter on (empty means no filter)
    #[serde(default)]
    pub experience: Vec<ExperienceLevel>,

    /// Recency filter
    #[serde(default)]
    pub date_posted: DatePosted,

    /// Work arrangement filter
    #[serde(default)]
    pub work_arrangement: WorkArrangement,

    /// Maximum number of pages to fetch
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,

    /// Seconds to wait between page requests
    #[serde(default = "default_request_delay_secs")]
    pub request_delay_secs: u64,

    /// Destination of the tabular export
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Search endpoint returning listing fragments
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Site origin used to absolutize relative links
    #[serde(default = "default_origin")]
    pub origin: String,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl SearchConfig {
    /// Create a new configuration with default values
    pub fn new(keywords: &str) -> Self {
        Self {
            keywords: keywords.to_string(),
            region: default_region(),
            experience: Vec::new(),
            date_posted: DatePosted::default(),
            work_arrangement: WorkArrangement::default(),
            max_pages: default_max_pages(),
            request_delay_secs: default_request_delay_secs(),
            output: default_output(),
            endpoint: default_endpoint(),
            origin: default_origin(),
            user_agent: default_user_agent(),
        }
    }

    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_secs(self.request_delay_secs)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(&default_keywords())
    }
}

fn default_keywords() -> String {
    "AI Data".to_string()
}

fn default_region() -> String {
    "european_union".to_string()
}

fn default_max_pages() -> usize {
    10
}

fn default_request_delay_secs() -> u64 {
    2
}

fn default_output() -> PathBuf {
    PathBuf::from("linkedin_jobs.csv")
}

fn default_endpoint() -> String {
    "https://www.linkedin.com/jobs-guest/jobs/api/seeMoreJobPostings/search".to_string()
}

fn default_origin() -> String {
    "https://www.linkedin.com".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0".to_string()
}
