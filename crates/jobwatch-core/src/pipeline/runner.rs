use std::sync::Arc;

use serde::Serialize;
use tokio::task::JoinSet;

use super::filter::{FeedLists, FilterConfig};
use super::rows::{build_course_rows, build_rows, CourseRow, JobRow};
use super::sort::{sort_course_rows, sort_rows};
use crate::feed::{FeedClient, FetchedFeed};
use crate::Result;

/// Everything one run hands to the presentation layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunOutput {
    pub jobs: Vec<JobRow>,
    pub courses: Vec<CourseRow>,
}

impl RunOutput {
    /// True when the filters left nothing to show; callers display `NO_MATCHES_MESSAGE`
    pub fn is_empty_jobs(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Run one fetch-and-filter pass over the job and course feeds.
///
/// Never fails: feeds that cannot be fetched or parsed contribute no rows.
/// Up to `concurrency` feeds are fetched at once, but rows are assembled in
/// feed order before sorting so the output does not depend on timing.
pub async fn run_pipeline(
    client: Arc<dyn FeedClient>,
    lists: &FeedLists,
    filter: &FilterConfig,
    concurrency: usize,
) -> RunOutput {
    let job_urls = lists.job_feeds(filter);
    tracing::info!(
        "Searching {} job feeds (min salary {}, {} keywords)",
        job_urls.len(),
        filter.min_salary,
        filter.keywords.len()
    );

    let mut jobs = Vec::new();
    let mut total_entries = 0;
    for (url, feed) in fetch_all(Arc::clone(&client), job_urls, concurrency).await {
        total_entries += feed.entries.len();
        jobs.extend(build_rows(&feed.entries, &feed.source_label(&url), filter));
    }
    let jobs = sort_rows(jobs);

    tracing::info!("{} of {} job entries matched", jobs.len(), total_entries);

    let mut courses = Vec::new();
    for (url, feed) in fetch_all(client, lists.courses.clone(), concurrency).await {
        courses.extend(build_course_rows(&feed.entries, &feed.source_label(&url)));
    }
    let courses = sort_course_rows(courses);

    RunOutput { jobs, courses }
}

/// Fetch every URL, returning results in the same order as `urls`
async fn fetch_all(
    client: Arc<dyn FeedClient>,
    urls: Vec<String>,
    concurrency: usize,
) -> Vec<(String, FetchedFeed)> {
    let concurrency = concurrency.max(1);
    let mut results: Vec<Option<FetchedFeed>> = vec![None; urls.len()];
    let mut join_set: JoinSet<(usize, FetchedFeed)> = JoinSet::new();
    let mut pending = urls.iter().cloned().enumerate();

    fn spawn_task(
        join_set: &mut JoinSet<(usize, FetchedFeed)>,
        client: Arc<dyn FeedClient>,
        index: usize,
        url: String,
    ) {
        join_set.spawn(async move { (index, client.fetch_entries(&url).await) });
    }

    for _ in 0..concurrency {
        if let Some((index, url)) = pending.next() {
            spawn_task(&mut join_set, Arc::clone(&client), index, url);
        }
    }

    while let Some(joined) = join_set.join_next().await {
        match joined {
            Ok((index, feed)) => results[index] = Some(feed),
            Err(e) => tracing::warn!("Feed fetch task failed: {}", e),
        }

        if let Some((index, url)) = pending.next() {
            spawn_task(&mut join_set, Arc::clone(&client), index, url);
        }
    }

    urls.into_iter()
        .zip(results)
        .map(|(url, feed)| (url, feed.unwrap_or_default()))
        .collect()
}
