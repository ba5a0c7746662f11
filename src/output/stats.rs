//! Statistics derived from a finished crawl
//!
//! This module provides outcome counts for the crawl log and the
//! word-frequency table computed from the corpus.

use crate::crawler::CrawlReport;
use crate::state::{Corpus, CrawlLog, CrawlOutcome};
use std::collections::{HashMap, HashSet};

/// Number of words shown in frequency tables by default
pub const DEFAULT_TOP_WORDS: usize = 100;

/// Common English words left out of frequency tables
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "can't", "cannot", "com", "could", "couldn't", "did", "didn't",
    "do", "does", "doesn't", "doing", "don't", "down", "during", "each", "else", "ever", "few",
    "for", "from", "further", "get", "had", "hadn't", "has", "hasn't", "have", "haven't",
    "having", "he", "he'd", "he'll", "he's", "hence", "her", "here", "here's", "hers",
    "herself", "him", "himself", "his", "how", "how's", "however", "http", "i", "i'd", "i'll",
    "i'm", "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself", "just",
    "k", "let's", "like", "me", "more", "most", "mustn't", "my", "myself", "no", "nor", "not",
    "of", "off", "on", "once", "only", "or", "other", "otherwise", "ought", "our", "ours",
    "ourselves", "out", "over", "own", "r", "same", "shall", "shan't", "she", "she'd",
    "she'll", "she's", "should", "shouldn't", "since", "so", "some", "such", "than", "that",
    "that's", "the", "their", "theirs", "them", "themselves", "then", "there", "there's",
    "therefore", "these", "they", "they'd", "they'll", "they're", "they've", "this", "those",
    "through", "to", "too", "under", "until", "up", "very", "was", "wasn't", "we", "we'd",
    "we'll", "we're", "we've", "were", "weren't", "what", "what's", "when", "when's", "where",
    "where's", "which", "while", "who", "who's", "whom", "why", "why's", "with", "won't",
    "would", "wouldn't", "www", "you", "you'd", "you'll", "you're", "you've", "your", "yours",
    "yourself", "yourselves",
];

/// Crawl statistics summary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrawlStatistics {
    /// Number of URLs taken from the frontier
    pub urls_processed: usize,

    /// Count of status records by outcome
    pub by_outcome: HashMap<CrawlOutcome, usize>,

    /// URLs discovered but never fetched
    pub urls_pending: usize,

    /// Pages that contributed visible text
    pub pages_with_text: usize,

    /// Whitespace-separated words in the corpus
    pub corpus_words: usize,
}

impl CrawlStatistics {
    /// Collects statistics from a finished crawl
    pub fn from_report(report: &CrawlReport) -> Self {
        let mut stats = Self::from_log(&report.log);
        stats.urls_pending = report.pending;
        stats.pages_with_text = report
            .corpus
            .blocks()
            .iter()
            .filter(|block| !block.trim().is_empty())
            .count();
        stats.corpus_words = count_words(&report.corpus);
        stats
    }

    /// Collects outcome counts from a crawl log
    pub fn from_log(log: &CrawlLog) -> Self {
        let by_outcome = CrawlOutcome::ALL
            .iter()
            .map(|outcome| (*outcome, log.count(*outcome)))
            .filter(|(_, count)| *count > 0)
            .collect();

        Self {
            urls_processed: log.len(),
            by_outcome,
            ..Self::default()
        }
    }

    /// Number of records with the given outcome
    pub fn count(&self, outcome: CrawlOutcome) -> usize {
        self.by_outcome.get(&outcome).copied().unwrap_or(0)
    }

    /// Returns the share of processed URLs that were crawled, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.urls_processed == 0 {
            return 0.0;
        }
        (self.count(CrawlOutcome::Crawled) as f64 / self.urls_processed as f64) * 100.0
    }
}

fn count_words(corpus: &Corpus) -> usize {
    corpus
        .blocks()
        .iter()
        .map(|block| block.split_whitespace().count())
        .sum()
}

/// Computes the most frequent words of the corpus
///
/// Words are lowercased, stripped of surrounding apostrophes and of a
/// trailing possessive `'s`. Stop words, single characters and numbers are
/// skipped. A plural ending in `s` is folded into its singular when the
/// singular also occurs.
///
/// # Returns
///
/// At most `limit` `(word, count)` pairs, most frequent first, ties broken
/// alphabetically
pub fn top_words(corpus: &Corpus, limit: usize) -> Vec<(String, usize)> {
    let stop_words: HashSet<&str> = STOP_WORDS.iter().copied().collect();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for block in corpus.blocks() {
        for token in block.split(|c: char| !c.is_alphanumeric() && c != '\'') {
            let word = token.trim_matches('\'').to_lowercase();
            let word = word.strip_suffix("'s").unwrap_or(word.as_str());

            if word.chars().count() < 2
                || word.chars().all(|c| c.is_numeric())
                || stop_words.contains(word)
            {
                continue;
            }

            *counts.entry(word.to_string()).or_insert(0) += 1;
        }
    }

    fold_plurals(&mut counts);

    let mut words: Vec<(String, usize)> = counts.into_iter().collect();
    words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    words.truncate(limit);
    words
}

fn fold_plurals(counts: &mut HashMap<String, usize>) {
    let plurals: Vec<String> = counts
        .keys()
        .filter(|word| word.ends_with('s') && !word.ends_with("ss"))
        .filter(|word| counts.contains_key(&word[..word.len() - 1]))
        .cloned()
        .collect();

    for plural in plurals {
        if let Some(count) = counts.remove(&plural) {
            *counts.entry(plural[..plural.len() - 1].to_string()).or_insert(0) += count;
        }
    }
}

/// Prints statistics to stdout in a formatted manner
///
/// # Arguments
///
/// * `stats` - The statistics to display
pub fn print_statistics(stats: &CrawlStatistics) {
    println!("=== Crawl Statistics ===\n");

    println!("Overview:");
    println!("  URLs processed: {}", stats.urls_processed);
    println!("  URLs left in frontier: {}", stats.urls_pending);
    println!("  Pages with text: {}", stats.pages_with_text);
    println!("  Words in corpus: {}", stats.corpus_words);
    println!();

    println!("Outcomes:");
    for outcome in CrawlOutcome::ALL {
        let count = stats.count(outcome);
        let percentage = if stats.urls_processed > 0 {
            (count as f64 / stats.urls_processed as f64) * 100.0
        } else {
            0.0
        };
        println!("  {}: {} ({:.1}%)", outcome, count, percentage);
    }
    println!();

    println!(
        "Success Rate: {:.1}% ({} / {} URLs crawled)",
        stats.success_rate(),
        stats.count(CrawlOutcome::Crawled),
        stats.urls_processed
    );
}
