use std::collections::HashSet;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use super::node::{Node, NodeId};

fn fuzzy_match_score(matcher: &SkimMatcherV2, text: &str, query: &str) -> Option<i64> {
    matcher
        .fuzzy_match(text, query)
        .or_else(|| matcher.fuzzy_match(&text.to_lowercase(), &query.to_lowercase()))
}

/// Nodes whose thought text or tags fuzzily match `query`. Blank queries match nothing.
pub fn matching_ids(nodes: &[Node], query: &str) -> HashSet<NodeId> {
    let query = query.trim();
    if query.is_empty() {
        return HashSet::new();
    }

    let matcher = SkimMatcherV2::default();
    nodes
        .iter()
        .filter(|node| {
            fuzzy_match_score(&matcher, node.text(), query).is_some()
                || node
                    .tags
                    .iter()
                    .any(|tag| fuzzy_match_score(&matcher, tag, query).is_some())
        })
        .map(|node| node.id.clone())
        .collect()
}
