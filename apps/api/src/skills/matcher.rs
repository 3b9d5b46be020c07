//! Pre-compiled keyword matchers.
//!
//! Every keyword in the taxonomy becomes one literal regex anchored by an ASCII
//! word boundary (`(?-u:\b)`) on both sides. Keywords are lowercase and the
//! haystack is lowercased by the caller, so no case folding happens here. A
//! non-ASCII letter counts as a non-word character: "javaübungen" contains
//! "java". The set is built once on first use and shared by every extraction.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::skills::taxonomy::{entries, TaxonomyEntry};

/// Weight of one occurrence of a phrase keyword ("machine learning").
pub const PHRASE_WEIGHT: u32 = 2;
/// Weight of one occurrence of a single-token keyword ("python", "c++").
pub const TOKEN_WEIGHT: u32 = 1;

/// A compiled matcher for one keyword.
#[derive(Debug)]
pub struct KeywordMatcher {
    keyword: &'static str,
    weight: u32,
    pattern: Regex,
}

impl KeywordMatcher {
    pub fn new(keyword: &'static str) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!(r"(?-u:\b){}(?-u:\b)", regex::escape(keyword)))?;
        let weight = if TaxonomyEntry::is_phrase(keyword) {
            PHRASE_WEIGHT
        } else {
            TOKEN_WEIGHT
        };
        Ok(Self {
            keyword,
            weight,
            pattern,
        })
    }

    pub fn keyword(&self) -> &'static str {
        self.keyword
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Number of non-overlapping occurrences in `haystack`, which must already be lowercase.
    pub fn occurrences(&self, haystack: &str) -> u32 {
        self.pattern.find_iter(haystack).count() as u32
    }
}

/// A taxonomy entry together with the matchers for its keywords, in keyword order.
#[derive(Debug)]
pub struct CompiledEntry {
    pub entry: &'static TaxonomyEntry,
    pub matchers: Vec<KeywordMatcher>,
}

impl CompiledEntry {
    fn compile(entry: &'static TaxonomyEntry) -> Result<Self, regex::Error> {
        let matchers = entry
            .keywords
            .iter()
            .map(|&kw| KeywordMatcher::new(kw))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entry, matchers })
    }
}

static COMPILED: Lazy<Vec<CompiledEntry>> = Lazy::new(|| {
    entries()
        .iter()
        .map(CompiledEntry::compile)
        .collect::<Result<Vec<_>, _>>()
        .expect("taxonomy keywords are escaped literals and always compile")
});

/// The compiled taxonomy, in table order.
pub fn compiled_entries() -> &'static [CompiledEntry] {
    &COMPILED
}
