use serde::{Deserialize, Serialize};

/// Per-run filter parameters supplied by the caller; never mutated by the pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Salary floor in GBP. Rows without a detected salary are not subject to it.
    pub min_salary: u64,
    /// Focus keywords, trimmed, blanks removed. Empty means "match everything".
    pub keywords: Vec<String>,
    /// Job feeds to fetch in addition to the configured ones
    pub extra_feed_urls: Vec<String>,
}

impl FilterConfig {
    pub fn new<I, S>(min_salary: u64, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            min_salary,
            keywords: clean(keywords),
            extra_feed_urls: Vec::new(),
        }
    }

    /// Build from raw form input: keywords separated by commas or newlines,
    /// extra feed URLs one per line
    pub fn from_raw(min_salary: u64, keywords_raw: &str, extra_feeds_raw: &str) -> Self {
        Self::new(min_salary, split_keywords(keywords_raw))
            .with_extra_feeds(extra_feeds_raw.lines())
    }

    pub fn with_extra_feeds<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra_feed_urls.extend(clean(urls));
        self
    }
}

/// Split a keyword list on commas and newlines
fn split_keywords(raw: &str) -> impl Iterator<Item = &str> {
    raw.split([',', '\n'])
}

fn clean<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| s.as_ref().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// The two independently configured feed lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedLists {
    pub jobs: Vec<String>,
    pub courses: Vec<String>,
}

impl FeedLists {
    pub fn new(jobs: Vec<String>, courses: Vec<String>) -> Self {
        Self { jobs, courses }
    }

    /// Job feeds for a run: configured feeds first, then the caller's extras
    pub fn job_feeds(&self, filter: &FilterConfig) -> Vec<String> {
        self.jobs
            .iter()
            .chain(filter.extra_feed_urls.iter())
            .map(|u| u.trim())
            .filter(|u| !u.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_splits_commas_and_newlines() {
        let filter = FilterConfig::from_raw(
            60_000,
            "climate, human rights,\n litigation ,,\n",
            "https://a.example/rss\n\n  https://b.example/atom  \n",
        );

        assert_eq!(filter.min_salary, 60_000);
        assert_eq!(filter.keywords, vec!["climate", "human rights", "litigation"]);
        assert_eq!(
            filter.extra_feed_urls,
            vec!["https://a.example/rss", "https://b.example/atom"]
        );
    }

    #[test]
    fn test_blank_input_gives_empty_lists() {
        let filter = FilterConfig::from_raw(0, "  ", "");
        assert!(filter.keywords.is_empty());
        assert!(filter.extra_feed_urls.is_empty());
    }

    #[test]
    fn test_job_feeds_appends_extras_in_order() {
        let lists = FeedLists::new(
            vec!["https://default.example/rss".to_string()],
            vec!["https://courses.example/rss".to_string()],
        );
        let filter = FilterConfig::new(0, ["policy"])
            .with_extra_feeds(["https://extra.example/rss", " "]);

        assert_eq!(
            lists.job_feeds(&filter),
            vec!["https://default.example/rss", "https://extra.example/rss"]
        );
    }
}
