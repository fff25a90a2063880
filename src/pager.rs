use crate::fetchers::{FetchError, PAGE_SIZE, PageFetcher};
use crate::parsers::{Extractor, GuestListing, ListingShape};
use crate::query::SearchParameters;
use crate::results::JobRecord;
use std::time::Duration;

/// Where the pager is between calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerState {
    /// Ready to fetch the page at `offset`
    AwaitingPage { offset: usize },
    /// Finished normally (empty page or page limit)
    Stopped,
    /// A fetch failed; no further pages are produced
    Failed,
}

/// Lazily walks result pages, one fetch per call.
///
/// Offsets advance by [`PAGE_SIZE`] and are never revisited. The politeness
/// delay runs before every fetch except the first, so it only ever follows a
/// page that produced records.
pub struct Pager<'p, F, S = GuestListing> {
    fetcher: F,
    extractor: Extractor<S>,
    params: &'p SearchParameters,
    max_pages: usize,
    delay: Duration,
    pages_fetched: usize,
    state: PagerState,
}

impl<'p, F: PageFetcher, S: ListingShape> Pager<'p, F, S> {
    pub fn new(
        fetcher: F,
        extractor: Extractor<S>,
        params: &'p SearchParameters,
        max_pages: usize,
        delay: Duration,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            params,
            max_pages,
            delay,
            pages_fetched: 0,
            state: PagerState::AwaitingPage { offset: 0 },
        }
    }

    pub fn state(&self) -> PagerState {
        self.state
    }

    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Fetch and extract the next page.
    ///
    /// Returns `Ok(None)` once the pager has stopped. A fetch error is
    /// returned once and leaves the pager in [`PagerState::Failed`].
    pub async fn next_page(&mut self) -> Result<Option<Vec<JobRecord>>, FetchError> {
        let offset = match self.state {
            PagerState::AwaitingPage { offset } => offset,
            PagerState::Stopped | PagerState::Failed => return Ok(None),
        };

        if self.pages_fetched >= self.max_pages {
            ::log::info!("Reached page limit of {}", self.max_pages);
            self.state = PagerState::Stopped;
            return Ok(None);
        }

        if self.pages_fetched > 0 && !self.delay.is_zero() {
            ::log::trace!("Sleeping {:?} before next page", self.delay);
            tokio::time::sleep(self.delay).await;
        }

        ::log::info!(
            "Scraping page {} (start={})...",
            self.pages_fetched + 1,
            offset
        );
        let markup = match self.fetcher.fetch(self.params, offset).await {
            Ok(markup) => markup,
            Err(e) => {
                ::log::error!("Fetching offset {} failed: {}", offset, e);
                self.state = PagerState::Failed;
                return Err(e);
            }
        };
        self.pages_fetched += 1;

        let records = self.extractor.extract(&markup);
        if records.is_empty() {
            ::log::info!("No more jobs found, stopping.");
            self.state = PagerState::Stopped;
            return Ok(None);
        }

        ::log::debug!("Page at offset {} yielded {} jobs", offset, records.len());
        self.state = PagerState::AwaitingPage {
            offset: offset + PAGE_SIZE,
        };
        Ok(Some(records))
    }

    /// Drain every remaining page into one list
    pub async fn collect_all(&mut self) -> Result<Vec<JobRecord>, FetchError> {
        let mut all_jobs = Vec::new();
        while let Some(mut jobs) = self.next_page().await? {
            all_jobs.append(&mut jobs);
        }
        Ok(all_jobs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryBuilder;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use tokio::time::Instant;

    const ORIGIN: &str = "https://www.linkedin.com";

    /// Serves canned pages and records requested offsets
    struct ScriptedFetcher {
        pages: Mutex<VecDeque<Result<String, FetchError>>>,
        offsets: Mutex<Vec<usize>>,
    }

    impl ScriptedFetcher {
        fn new(pages: Vec<Result<String, FetchError>>) -> Self {
            Self {
                pages: Mutex::new(pages.into()),
                offsets: Mutex::new(Vec::new()),
            }
        }

        fn offsets(&self) -> Vec<usize> {
            self.offsets.lock().unwrap().clone()
        }
    }

    impl PageFetcher for ScriptedFetcher {
        async fn fetch(
            &self,
            _params: &SearchParameters,
            offset: usize,
        ) -> Result<String, FetchError> {
            self.offsets.lock().unwrap().push(offset);
            self.pages
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(String::new()))
        }
    }

    fn listing(n: usize) -> String {
        format!(
            "<li><a href=\"/jobs/view/{n}\">x</a><h3>Job {n}</h3><h4>Company {n}</h4></li>"
        )
    }

    fn full_page() -> String {
        (0..PAGE_SIZE).map(listing).collect()
    }

    fn http_error() -> FetchError {
        FetchError::HttpStatus {
            status: reqwest::StatusCode::TOO_MANY_REQUESTS,
            url: "https://example.com/search?start=25".to_string(),
        }
    }

    fn pager<'a>(
        fetcher: &'a ScriptedFetcher,
        params: &'a SearchParameters,
        max_pages: usize,
        delay: Duration,
    ) -> Pager<'a, &'a ScriptedFetcher> {
        Pager::new(fetcher, Extractor::new(ORIGIN), params, max_pages, delay)
    }

    #[tokio::test]
    async fn test_stops_on_first_empty_page() {
        let page0 = format!(
            "{}{}<li><a href=\"/jobs/view/99\">x</a><h3>No company</h3></li>",
            listing(1),
            listing(2)
        );
        let fetcher = ScriptedFetcher::new(vec![Ok(page0), Ok(String::new()), Ok(full_page())]);
        let params = QueryBuilder::new("AI Data").build();

        let jobs = pager(&fetcher, &params, 10, Duration::ZERO)
            .collect_all()
            .await
            .unwrap();

        assert_eq!(jobs.len(), 2);
        assert_eq!(fetcher.offsets(), vec![0, 25]);

        let mut csv = Vec::new();
        crate::output::write_records(&jobs, &mut csv).unwrap();
        let csv = String::from_utf8(csv).unwrap();
        assert_eq!(csv.lines().count(), 3);
        assert!(csv.contains("Job 2,Company 2,,https://www.linkedin.com/jobs/view/2"));
    }

    #[tokio::test]
    async fn test_never_exceeds_page_limit() {
        let fetcher = ScriptedFetcher::new((0..5).map(|_| Ok(full_page())).collect());
        let params = QueryBuilder::new("AI Data").build();

        let mut pager = pager(&fetcher, &params, 3, Duration::ZERO);
        let jobs = pager.collect_all().await.unwrap();

        assert_eq!(jobs.len(), 3 * PAGE_SIZE);
        assert_eq!(fetcher.offsets(), vec![0, 25, 50]);
        assert_eq!(pager.state(), PagerState::Stopped);
        assert_eq!(pager.next_page().await.unwrap(), None);
        assert_eq!(fetcher.offsets().len(), 3);
    }

    #[tokio::test]
    async fn test_offset_advances_after_short_page() {
        let fetcher = ScriptedFetcher::new(vec![Ok(listing(1)), Ok(listing(2))]);
        let params = QueryBuilder::new("AI Data").build();

        let jobs = pager(&fetcher, &params, 10, Duration::ZERO)
            .collect_all()
            .await
            .unwrap();

        assert_eq!(jobs.len(), 2);
        assert_eq!(fetcher.offsets(), vec![0, 25, 50]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_page_limit_never_sleeps() {
        let fetcher = ScriptedFetcher::new(vec![Ok(full_page()), Ok(full_page())]);
        let params = QueryBuilder::new("AI Data").build();

        let started = Instant::now();
        let jobs = pager(&fetcher, &params, 1, Duration::from_secs(2))
            .collect_all()
            .await
            .unwrap();

        assert_eq!(jobs.len(), PAGE_SIZE);
        assert_eq!(fetcher.offsets(), vec![0]);
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_follows_every_productive_page() {
        let fetcher =
            ScriptedFetcher::new(vec![Ok(full_page()), Ok(full_page()), Ok(String::new())]);
        let params = QueryBuilder::new("AI Data").build();

        let started = Instant::now();
        pager(&fetcher, &params, 10, Duration::from_secs(2))
            .collect_all()
            .await
            .unwrap();

        assert_eq!(fetcher.offsets(), vec![0, 25, 50]);
        assert_eq!(started.elapsed(), Duration::from_secs(4));
    }

    #[tokio::test]
    async fn test_fetch_error_aborts_without_retry() {
        let fetcher =
            ScriptedFetcher::new(vec![Ok(full_page()), Err(http_error()), Ok(full_page())]);
        let params = QueryBuilder::new("AI Data").build();

        let mut pager = pager(&fetcher, &params, 10, Duration::ZERO);
        let result = pager.collect_all().await;

        assert!(matches!(result, Err(FetchError::HttpStatus { .. })));
        assert_eq!(pager.state(), PagerState::Failed);
        assert_eq!(pager.next_page().await.unwrap(), None);
        assert_eq!(fetcher.offsets(), vec![0, 25]);
    }

    #[tokio::test]
    async fn test_pages_are_produced_on_demand() {
        let fetcher = ScriptedFetcher::new(vec![Ok(full_page()), Ok(full_page())]);
        let params = QueryBuilder::new("AI Data").build();

        let mut pager = pager(&fetcher, &params, 10, Duration::ZERO);
        let first = pager.next_page().await.unwrap().unwrap();

        assert_eq!(first.len(), PAGE_SIZE);
        assert_eq!(fetcher.offsets(), vec![0]);
        assert_eq!(pager.state(), PagerState::AwaitingPage { offset: 25 });
        assert_eq!(pager.pages_fetched(), 1);
    }
}
