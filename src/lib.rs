// Re-export modules
pub mod config;
pub mod fetchers;
pub mod output;
pub mod pager;
pub mod parsers;
pub mod query;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::SearchConfig;
pub use pager::Pager;
pub use results::JobRecord;

use fetchers::http::HttpFetcher;
use parsers::Extractor;
use query::{QueryBuilder, SearchParameters};
use std::path::Path;

/// Main builder for a job search run
pub struct Jobs {
    config: SearchConfig,
}

impl Jobs {
    /// Create a new Jobs builder searching for the given keywords
    pub fn new(keywords: &str) -> Self {
        Self {
            config: SearchConfig::new(keywords),
        }
    }

    /// Use an already loaded configuration
    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Load configuration from a file
    pub fn with_config_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self::with_config(SearchConfig::from_file(path)?))
    }

    /// Set the maximum number of pages to fetch
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.config.max_pages = max_pages;
        self
    }

    /// Set the delay between page requests
    pub fn with_request_delay(mut self, seconds: u64) -> Self {
        self.config.request_delay_secs = seconds;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Resolve the configured filters into backend parameters
    pub fn parameters(&self) -> SearchParameters {
        QueryBuilder::from_config(&self.config).build()
    }

    /// Fetch every page and collect the job records.
    ///
    /// The first fetch error aborts the run and nothing is returned.
    pub async fn collect(&self) -> Result<Vec<JobRecord>, Box<dyn std::error::Error>> {
        let params = self.parameters();
        let fetcher = HttpFetcher::new(&self.config.endpoint, &self.config.user_agent)?;
        let mut pager = Pager::new(
            fetcher,
            Extractor::new(&self.config.origin),
            &params,
            self.config.max_pages,
            self.config.request_delay(),
        );

        let jobs = pager.collect_all().await?;
        ::log::info!(
            "Scraped {} jobs total from {} pages",
            jobs.len(),
            pager.pages_fetched()
        );
        Ok(jobs)
    }

    /// Collect all pages, then write the export. Returns the record count.
    pub async fn run(&self) -> Result<usize, Box<dyn std::error::Error>> {
        let jobs = self.collect().await?;
        output::write_csv(&jobs, &self.config.output)?;
        Ok(jobs.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{EXPERIENCE_KEY, ExperienceLevel};
    use std::time::Duration;

    #[test]
    fn test_builder_overrides() {
        let jobs = Jobs::new("rust").with_max_pages(3).with_request_delay(0);

        let config = jobs.config();
        assert_eq!(config.keywords, "rust");
        assert_eq!(config.max_pages, 3);
        assert_eq!(config.request_delay(), Duration::ZERO);
        assert_eq!(jobs.parameters().get("keywords"), Some("rust"));
    }

    #[test]
    fn test_builder_from_config_file() {
        let path = std::env::temp_dir()
            .join(format!("yield-jobs-{}-config.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{"keywords": "data", "region": "2", "experience": ["entry_level", "director"]}"#,
        )
        .unwrap();

        let jobs = Jobs::with_config_file(&path).unwrap().with_max_pages(1);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(jobs.config().max_pages, 1);
        assert_eq!(
            jobs.config().experience,
            vec![ExperienceLevel::EntryLevel, ExperienceLevel::Director]
        );
        let params = jobs.parameters();
        assert_eq!(params.get("geoId"), Some("103644278"));
        assert_eq!(params.get(EXPERIENCE_KEY), Some("2,5"));
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        assert!(Jobs::with_config_file("/nonexistent/yield-jobs.json").is_err());
    }
}
