mod dataset;
mod node;
mod search;
mod tags;

pub use dataset::{ThoughtSeed, load_seeds, sample_seeds};
pub use node::{Node, NodeId};
pub use search::matching_ids;
pub use tags::{extract_hashtags, ids_with_tag, tag_counts};
