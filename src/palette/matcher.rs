use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::item::Item;

/// Scores a label against a search term.
///
/// Returns `None` when the label does not match, otherwise a relevance score
/// (higher is better) and the char indices of the matched label characters.
pub trait Scorer {
    fn score(&self, label: &str, term: &str) -> Option<(i64, Vec<usize>)>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMatching {
    #[default]
    Smart,
    Ignore,
    Respect,
}

pub struct SkimScorer {
    matcher: SkimMatcherV2,
}

impl SkimScorer {
    #[must_use]
    pub fn new(case: CaseMatching) -> Self {
        let matcher = SkimMatcherV2::default();
        let matcher = match case {
            CaseMatching::Smart => matcher.smart_case(),
            CaseMatching::Ignore => matcher.ignore_case(),
            CaseMatching::Respect => matcher.respect_case(),
        };
        Self { matcher }
    }
}

impl Default for SkimScorer {
    fn default() -> Self {
        Self::new(CaseMatching::default())
    }
}

impl Scorer for SkimScorer {
    fn score(&self, label: &str, term: &str) -> Option<(i64, Vec<usize>)> {
        self.matcher.fuzzy_indices(label, term)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub highlighted: bool,
}

/// One displayed result: an index into the active item set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub index: usize,
    pub score: i64,
    pub fragments: Vec<Fragment>,
}

impl Match {
    fn plain(index: usize, label: &str) -> Self {
        Self {
            index,
            score: 0,
            fragments: vec![Fragment {
                text: label.to_string(),
                highlighted: false,
            }],
        }
    }
}

/// Splits `label` into runs of matched and unmatched characters.
#[must_use]
pub fn fragments(label: &str, indices: &[usize]) -> Vec<Fragment> {
    let marked: HashSet<usize> = indices.iter().copied().collect();
    let mut out: Vec<Fragment> = Vec::new();

    for (i, c) in label.chars().enumerate() {
        let highlighted = marked.contains(&i);
        match out.last_mut() {
            Some(last) if last.highlighted == highlighted => last.text.push(c),
            _ => out.push(Fragment {
                text: c.to_string(),
                highlighted,
            }),
        }
    }

    out
}

/// Ranks `items` against `term`.
///
/// An empty term keeps every item in its original order. Otherwise
/// non-matching items are dropped and the rest are sorted by descending
/// score; equal scores keep their original order.
pub fn rank<T>(scorer: &dyn Scorer, term: &str, items: &[Item<T>]) -> Vec<Match> {
    if term.is_empty() {
        return items
            .iter()
            .enumerate()
            .map(|(i, item)| Match::plain(i, &item.label))
            .collect();
    }

    let mut results: Vec<Match> = items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| {
            let (score, indices) = scorer.score(&item.label, term)?;
            Some(Match {
                index: i,
                score,
                fragments: fragments(&item.label, &indices),
            })
        })
        .collect();

    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(labels: &[&str]) -> Vec<Item<()>> {
        labels
            .iter()
            .enumerate()
            .map(|(i, l)| Item::new(i.to_string(), *l))
            .collect()
    }

    #[test]
    fn test_fragments_group_runs() {
        let f = fragments("Beta", &[0, 1, 2]);
        assert_eq!(
            f,
            vec![
                Fragment {
                    text: "Bet".to_string(),
                    highlighted: true
                },
                Fragment {
                    text: "a".to_string(),
                    highlighted: false
                },
            ]
        );
    }

    #[test]
    fn test_fragments_multibyte_labels() {
        let f = fragments("héllo", &[1]);
        assert_eq!(f.len(), 3);
        assert_eq!(f[1].text, "é");
        assert!(f[1].highlighted);
    }

    #[test]
    fn test_empty_term_keeps_order() {
        let scorer = SkimScorer::default();
        let results = rank(&scorer, "", &items(&["Zulu", "Alpha", "Mike"]));
        let order: Vec<usize> = results.iter().map(|m| m.index).collect();
        assert_eq!(order, vec![0, 1, 2]);
        assert!(results.iter().all(|m| m.fragments.len() == 1));
    }

    #[test]
    fn test_non_matches_dropped() {
        let scorer = SkimScorer::default();
        let results = rank(&scorer, "bet", &items(&["Alpha", "Beta"]));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].index, 1);
    }

    #[test]
    fn test_better_match_ranks_first() {
        let scorer = SkimScorer::default();
        let results = rank(
            &scorer,
            "grok",
            &items(&["filter grep rock", "filter grok"]),
        );
        assert_eq!(results[0].index, 1);
    }

    #[test]
    fn test_respect_case() {
        let scorer = SkimScorer::new(CaseMatching::Respect);
        assert!(scorer.score("Beta", "beta").is_none());
        assert!(scorer.score("Beta", "Beta").is_some());
    }
}
