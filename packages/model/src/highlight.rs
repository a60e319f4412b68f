//! Split text around case-insensitive occurrences of a search term.

use regex::{Regex, RegexBuilder};

/// A run of text, marked when it matched the search term.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub is_match: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_match: false,
        }
    }

    fn matched(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_match: true,
        }
    }
}

/// Case-insensitive literal matcher for one search term.
///
/// Build it once per term and reuse it for every piece of text.
#[derive(Clone, Debug)]
pub struct Highlighter {
    matcher: Option<Regex>,
}

impl Highlighter {
    pub fn new(search_term: &str) -> Self {
        let matcher = if search_term.is_empty() {
            None
        } else {
            RegexBuilder::new(&regex::escape(search_term))
                .case_insensitive(true)
                .build()
                .ok()
        };
        Self { matcher }
    }

    /// Segments of `text` with every occurrence of the term marked.
    ///
    /// Concatenating the segments yields `text` with its original casing.
    pub fn segments(&self, text: &str) -> Vec<Segment> {
        let Some(re) = &self.matcher else {
            return vec![Segment::plain(text)];
        };

        let mut segments = Vec::new();
        let mut last = 0;
        for m in re.find_iter(text) {
            if m.start() > last {
                segments.push(Segment::plain(&text[last..m.start()]));
            }
            segments.push(Segment::matched(m.as_str()));
            last = m.end();
        }
        if last < text.len() || segments.is_empty() {
            segments.push(Segment::plain(&text[last..]));
        }
        segments
    }
}

/// One-off form of [`Highlighter::segments`]. The term is taken literally.
pub fn highlight(text: &str, search_term: &str) -> Vec<Segment> {
    Highlighter::new(search_term).segments(text)
}
