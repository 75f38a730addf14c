//! Fuzzy ranking of history entries.
//!
//! A query scores against an entry in one of two ways:
//!
//! - contiguous, case-insensitive substring: `1000 + 10 * len(query)`
//! - otherwise a greedy left-to-right subsequence walk, `+5` per matched
//!   character, `+15` instead when the previous text character was matched
//!   too, and `+10` on top when the match sits at a word start
//!
//! Entries matching neither way are dropped. The walk never backtracks, so
//! the fuzzy score is an approximation rather than the best alignment.

use crate::history::Entry;

const SUBSTRING_BASE: u32 = 1000;
const SUBSTRING_PER_CHAR: u32 = 10;
const MATCH: u32 = 5;
const CONSECUTIVE_MATCH: u32 = 15;
const WORD_START_BONUS: u32 = 10;

/// An entry that survived ranking, with its position in the input list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub index: usize,
    pub entry: Entry,
    pub score: u32,
}

/// Ranks `entries` against `query`, best first.
///
/// Ties keep the input order. A blank query matches every entry with score 0.
pub fn rank(entries: &[Entry], query: &str) -> Vec<Entry> {
    rank_scored(entries, query)
        .into_iter()
        .map(|ranked| ranked.entry)
        .collect()
}

/// Like [`rank`] but keeps the score and the input index of each hit.
pub fn rank_scored(entries: &[Entry], query: &str) -> Vec<RankedEntry> {
    let query = query.trim().to_lowercase();

    let mut ranked: Vec<RankedEntry> = entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            score(entry.text(), &query).map(|score| RankedEntry {
                index,
                entry: entry.clone(),
                score,
            })
        })
        .collect();

    // sort_by is stable: equal scores keep history order
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// Scores `text` against an already-trimmed query. `None` means no match.
///
/// # Examples
///
/// ```
/// use ch_core::search::score;
///
/// assert_eq!(score("xfooy", "foo"), Some(1030));
/// assert_eq!(score("f_o_o", "foo"), Some(45));
/// assert_eq!(score("abc", "xyz"), None);
/// assert_eq!(score("anything", ""), Some(0));
/// ```
pub fn score(text: &str, query: &str) -> Option<u32> {
    if query.is_empty() {
        return Some(0);
    }

    let text = text.to_lowercase();
    let query = query.to_lowercase();

    if text.contains(&query) {
        return Some(SUBSTRING_BASE + SUBSTRING_PER_CHAR * query.chars().count() as u32);
    }

    fuzzy_score(&text, &query)
}

fn fuzzy_score(text: &str, query: &str) -> Option<u32> {
    let mut pending = query.chars().peekable();
    let mut total = 0;
    let mut prev_matched = false;
    let mut word_start = true;

    for c in text.chars() {
        let Some(&wanted) = pending.peek() else {
            break;
        };

        let matched = c == wanted;
        if matched {
            pending.next();
            total += if prev_matched { CONSECUTIVE_MATCH } else { MATCH };
            if word_start {
                total += WORD_START_BONUS;
            }
        }

        prev_matched = matched;
        word_start = is_word_separator(c);
    }

    pending.peek().is_none().then_some(total)
}

fn is_word_separator(c: char) -> bool {
    matches!(c, ' ' | '/' | '_' | '-')
}
