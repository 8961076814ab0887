use serde::{Deserialize, Serialize};

/// A single item from a parsed RSS/Atom feed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    pub title: String,
    pub link: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    /// Date strings as they appeared in the feed (or as the parser rendered them)
    pub published: Option<String>,
    pub updated: Option<String>,
}

impl RawEntry {
    /// Body text for matching: the summary, falling back to the description
    pub fn body(&self) -> &str {
        self.summary
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.description.as_deref())
            .unwrap_or("")
    }

    /// Title and body joined by a newline
    pub fn combined_text(&self) -> String {
        format!("{}\n{}", self.title, self.body())
    }
}

/// Entries from one feed together with its display label
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedFeed {
    pub title: Option<String>,
    pub entries: Vec<RawEntry>,
}

impl FetchedFeed {
    /// What a failed fetch degrades to
    pub fn empty() -> Self {
        Self::default()
    }

    /// Feed title, or the URL it was fetched from when the feed has none
    pub fn source_label(&self, url: &str) -> String {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(url)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_falls_back_to_description() {
        let entry = RawEntry {
            title: "Policy Officer".to_string(),
            description: Some("Salary £61,000".to_string()),
            ..Default::default()
        };
        assert_eq!(entry.body(), "Salary £61,000");
        assert_eq!(entry.combined_text(), "Policy Officer\nSalary £61,000");

        let entry = RawEntry {
            title: "Policy Officer".to_string(),
            summary: Some("From summary".to_string()),
            description: Some("From description".to_string()),
            ..Default::default()
        };
        assert_eq!(entry.body(), "From summary");
    }

    #[test]
    fn test_combined_text_without_body() {
        let entry = RawEntry {
            title: "Research Fellow".to_string(),
            ..Default::default()
        };
        assert_eq!(entry.combined_text(), "Research Fellow\n");
    }

    #[test]
    fn test_source_label() {
        let url = "https://example.com/jobs.rss";
        let feed = FetchedFeed {
            title: Some("NGO Jobs".to_string()),
            entries: Vec::new(),
        };
        assert_eq!(feed.source_label(url), "NGO Jobs");
        assert_eq!(FetchedFeed::empty().source_label(url), url);

        let blank = FetchedFeed {
            title: Some("  ".to_string()),
            entries: Vec::new(),
        };
        assert_eq!(blank.source_label(url), url);
    }
}
