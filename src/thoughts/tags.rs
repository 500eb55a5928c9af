use std::collections::{BTreeMap, HashSet};

use super::node::{Node, NodeId};

/// Ids of every node whose tag set contains `tag`.
///
/// Nodes without tags simply never match.
pub fn ids_with_tag(nodes: &[Node], tag: &str) -> HashSet<NodeId> {
    nodes
        .iter()
        .filter(|node| node.has_tag(tag))
        .map(|node| node.id.clone())
        .collect()
}

/// Tags with the number of nodes carrying them, most used first.
pub fn tag_counts(nodes: &[Node]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for tag in nodes.iter().flat_map(|node| node.tags.iter()) {
        *counts.entry(tag.as_str()).or_default() += 1;
    }

    let mut ranked = counts
        .into_iter()
        .map(|(tag, count)| (tag.to_owned(), count))
        .collect::<Vec<_>>();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

/// Pulls `#hashtags` out of free text. The leading `#` is kept so extracted
/// tags look like the ones written by hand in datasets.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    let mut tags = Vec::new();
    for word in text.split_whitespace() {
        let Some(rest) = word.strip_prefix('#') else {
            continue;
        };

        let body = rest
            .split(|c: char| !(c.is_alphanumeric() || c == '_' || c == '-'))
            .next()
            .unwrap_or_default()
            .trim_end_matches('-');
        if body.is_empty() {
            continue;
        }

        let tag = format!("#{}", body.to_lowercase());
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, tags: &[&str]) -> Node {
        Node::new(
            NodeId::new(id),
            None,
            tags.iter().map(|tag| (*tag).to_owned()),
        )
    }

    fn ids(values: &[&str]) -> HashSet<NodeId> {
        values.iter().map(|value| NodeId::new(*value)).collect()
    }

    #[test]
    fn finds_exactly_the_tagged_nodes() {
        let nodes = vec![node("1", &["x"]), node("2", &["y"]), node("3", &["x", "y"])];

        assert_eq!(ids_with_tag(&nodes, "x"), ids(&["1", "3"]));
        assert_eq!(ids_with_tag(&nodes, "y"), ids(&["2", "3"]));
        assert!(ids_with_tag(&nodes, "z").is_empty());
    }

    #[test]
    fn untagged_nodes_never_match() {
        let nodes = vec![node("1", &[]), node("2", &["#dream"])];
        assert_eq!(ids_with_tag(&nodes, "#dream"), ids(&["2"]));
        assert!(ids_with_tag(&nodes, "").is_empty());
    }

    #[test]
    fn tag_counts_rank_by_usage_then_name() {
        let nodes = vec![
            node("1", &["#dream", "#elephant"]),
            node("2", &["#freddiegray", "#dream"]),
            node("3", &["#trump"]),
            node("4", &["#elephant", "#dream"]),
        ];

        assert_eq!(
            tag_counts(&nodes),
            vec![
                ("#dream".to_owned(), 3),
                ("#elephant".to_owned(), 2),
                ("#freddiegray".to_owned(), 1),
                ("#trump".to_owned(), 1),
            ]
        );
    }

    #[test]
    fn extracts_hashtags_from_text() {
        let text = "He shared his dream of escape. #FreddieGray #dream, #dream #";
        assert_eq!(extract_hashtags(text), vec!["#freddiegray", "#dream"]);
        assert!(extract_hashtags("no tags here").is_empty());
    }
}
