use std::{collections, time};

/// A `Span` represents a single unit of work that is timed and can be tagged
/// with metadata.
///
/// One span covers one partition, from setup to finish.
#[derive(Debug)]
pub struct Span {
    tags: collections::BTreeMap<String, String>,

    start: time::Instant,
    end: Option<time::Instant>,
}

impl Span {
    /// Create a new `Span` with the given tags.
    pub fn new(tags: collections::BTreeMap<String, String>) -> Self {
        Self {
            tags,
            start: time::Instant::now(),
            end: None,
        }
    }

    pub fn tag(mut self, key: &str, value: &str) -> Self {
        self.tags.insert(key.to_string(), value.to_string());
        self
    }

    /// Finish the `Span` and return the duration.
    pub fn finish(&mut self) -> time::Duration {
        let end = time::Instant::now();
        self.end = Some(end);
        end - self.start
    }

    pub fn elapsed(&self) -> time::Duration {
        match self.end {
            Some(end) => end - self.start,
            None => self.start.elapsed(),
        }
    }

    pub fn serialize_tags(&self) -> String {
        let mut s = String::new();
        for (k, v) in &self.tags {
            s.push_str(&format!("[{}: {}]", k, v));
        }
        s
    }
}
