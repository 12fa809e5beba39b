// ABOUTME: The main Client for querying events that occurred on a day of the year.
// ABOUTME: Builds the day page URL, fetches it, and hands the parsed markup to the extractor.

use scraper::Html;
use std::time::Duration;

use crate::error::QueryError;
use crate::event::{Event, MonthDay};
use crate::extract::{extract_events, Skipped};
use crate::options::{ClientBuilder, Options};
use crate::resource::fetch;

/// English month names for the day page URL template.
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Client for querying events that occurred on a specific day of the year.
///
/// Events are extracted from the Wikipedia page about that day. Queries are
/// independent of each other; the client holds no mutable state and can be
/// shared freely.
pub struct Client {
    opts: Options,
    http_client: reqwest::Client,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    pub fn new(opts: Options) -> Self {
        let http_client = opts.http_client.clone().unwrap_or_else(|| {
            reqwest::Client::builder()
                .user_agent(&opts.user_agent)
                .timeout(opts.timeout)
                .gzip(true)
                .build()
                .expect("failed to build HTTP client")
        });
        Self { opts, http_client }
    }

    /// The fetch timeout this client was configured with.
    pub fn timeout(&self) -> Duration {
        self.opts.timeout
    }

    /// The web page address of the day page for the given month/day.
    pub fn page_url(&self, month_day: MonthDay) -> String {
        format!(
            "{}/{}_{}",
            self.opts.base_url.trim_end_matches('/'),
            MONTH_NAMES[(month_day.month() - 1) as usize],
            month_day.day()
        )
    }

    /// Query events that occurred on the given month and day.
    ///
    /// Fails only for out-of-range month/day values and transport errors;
    /// malformed page entries are skipped with a logged warning.
    pub async fn query(&self, month: u32, day: u32) -> Result<Vec<Event>, QueryError> {
        let month_day = MonthDay::new(month, day).ok_or_else(|| {
            QueryError::invalid_date(
                format!("month={} day={}", month, day),
                "Query",
                Some(anyhow::anyhow!("month must be 1-12 and day 1-31")),
            )
        })?;
        self.query_month_day(month_day).await
    }

    /// Query events for a combined month/day value.
    pub async fn query_month_day(&self, month_day: MonthDay) -> Result<Vec<Event>, QueryError> {
        let url = self.page_url(month_day);
        tracing::info!(url = %url, "Retrieving day page");
        let html = fetch(&self.http_client, &url).await?;

        let doc = Html::parse_document(&html);
        let mut skipped = 0usize;
        let events = extract_events(&doc, month_day.month(), month_day.day(), &mut |skip| {
            skipped += 1;
            match &skip {
                Skipped::MalformedEntry { text } => {
                    tracing::warn!(entry = %text, "Skipping a malformed event")
                }
                Skipped::MalformedYear { token } => {
                    tracing::warn!(token = %token, "Skipping an event with an unparseable year")
                }
                Skipped::InvalidDate { year } => {
                    tracing::warn!(year, "Skipping an event whose year does not fit the day")
                }
            }
        });
        tracing::info!(found = events.len(), skipped, "Extracted events");

        Ok(events)
    }
}
