use std::ops::Range;

use regex::Regex;

use crate::model::item::Item;

/// Case-insensitive literal matcher for a search term. Both sides are fully
/// lowercased, so expansions like `İ` -> `i̇` match the way users expect.
#[derive(Debug, Clone)]
pub struct TermMatcher {
    term: String,
    re: Option<Regex>,
}

impl TermMatcher {
    /// Build a matcher for `term`. Returns `None` for an empty term, which
    /// means "no search".
    pub fn new(term: &str) -> Option<Self> {
        if term.is_empty() {
            return None;
        }
        let term = lowercase(term);
        let re = Regex::new(&regex::escape(&term)).ok();
        Some(TermMatcher { term, re })
    }

    /// Whether `text` contains the term, ignoring case
    pub fn is_match(&self, text: &str) -> bool {
        let lowered = lowercase(text);
        match &self.re {
            Some(re) => re.is_match(&lowered),
            None => lowered.contains(&self.term),
        }
    }

    /// Byte ranges in `text` of all non-overlapping hits. A hit inside a
    /// character's lowercase expansion covers the whole source character.
    pub fn find_matches(&self, text: &str) -> Vec<Range<usize>> {
        let (lowered, sources) = lowercase_with_sources(text);
        let hits: Vec<Range<usize>> = match &self.re {
            Some(re) => re.find_iter(&lowered).map(|m| m.range()).collect(),
            None => lowered
                .match_indices(self.term.as_str())
                .map(|(start, hit)| start..start + hit.len())
                .collect(),
        };

        let mut spans: Vec<Range<usize>> = Vec::with_capacity(hits.len());
        for hit in hits {
            let span = sources[hit.start].start..sources[hit.end - 1].end;
            match spans.last_mut() {
                Some(last) if span.start < last.end => last.end = last.end.max(span.end),
                _ => spans.push(span),
            }
        }
        spans
    }

    pub fn matches_item(&self, item: &Item) -> bool {
        self.is_match(&item.text)
    }
}

fn lowercase(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// `text` lowercased char by char, plus the source byte range of every
/// byte of the lowered string
fn lowercase_with_sources(text: &str) -> (String, Vec<Range<usize>>) {
    let mut lowered = String::with_capacity(text.len());
    let mut sources = Vec::with_capacity(text.len());
    for (start, c) in text.char_indices() {
        let source = start..start + c.len_utf8();
        for l in c.to_lowercase() {
            lowered.push(l);
            sources.extend(std::iter::repeat_n(source.clone(), l.len_utf8()));
        }
    }
    (lowered, sources)
}
