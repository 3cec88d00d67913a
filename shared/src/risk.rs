//! Risk heuristic for search results
//!
//! Keyword-based classification of an external search result. Purely
//! lexical: the backend does the real verification, this only drives the
//! triage ordering in the results view.

/// Risk classification of a search result
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Keywords that indicate a distribution channel for leaked content.
/// A single match classifies the result as high risk.
const HIGH_RISK_KEYWORDS: &[&str] = &[
    "t.me",
    "telegram",
    "leak",
    "mega.nz",
    "discord.gg",
    "anonfiles",
];

/// Keywords common to piracy landing pages.
const MEDIUM_RISK_KEYWORDS: &[&str] = &[
    "free",
    "download",
    "torrent",
    "stream",
    "gratis",
    "filtrado",
];

fn haystack(title: &str, url: &str, snippet: &str) -> String {
    let mut text = String::with_capacity(title.len() + url.len() + snippet.len() + 2);
    text.push_str(title);
    text.push(' ');
    text.push_str(url);
    text.push(' ');
    text.push_str(snippet);
    text.to_lowercase()
}

/// Classify a search result by keyword matching over title, URL and snippet.
///
/// The high-risk set is checked first; any match wins regardless of
/// medium-risk matches. Case-insensitive substring matching throughout.
pub fn classify(title: &str, url: &str, snippet: &str) -> RiskLevel {
    let text = haystack(title, url, snippet);
    if HIGH_RISK_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        RiskLevel::High
    } else if MEDIUM_RISK_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Whether the result matches any risk keyword at all
pub fn is_suspicious(title: &str, url: &str, snippet: &str) -> bool {
    classify(title, url, snippet) != RiskLevel::Low
}
