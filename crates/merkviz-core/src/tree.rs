use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A Merkle tree as an ordered sequence of levels.
///
/// Level 0 holds the leaves and the last level holds the root, matching the
/// shape produced by bottom-up tree builders. The structure is presentation
/// input only: nothing here hashes, and level sizes are never checked
/// against a strict doubling relationship.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MerkleTree {
    levels: Vec<Vec<String>>,
}

impl MerkleTree {
    pub fn new(levels: Vec<Vec<String>>) -> Self {
        Self { levels }
    }

    /// Interprets a JSON value as a level structure.
    ///
    /// Anything that is not an array yields `None`, which callers treat as
    /// "nothing to render". Entries that are not strings degrade to empty
    /// hashes (an empty label downstream), and a non-array level degrades to
    /// an empty level.
    pub fn from_value(value: &Value) -> Option<Self> {
        let Some(levels) = value.as_array() else {
            tracing::debug!("tree value is not an array; nothing to render");
            return None;
        };
        let levels = levels
            .iter()
            .map(|level| match level {
                Value::Array(entries) => entries
                    .iter()
                    .map(|e| e.as_str().unwrap_or_default().to_string())
                    .collect(),
                _ => Vec::new(),
            })
            .collect();
        Some(Self { levels })
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn levels(&self) -> &[Vec<String>] {
        &self.levels
    }

    pub fn node_count(&self) -> usize {
        self.levels.iter().map(Vec::len).sum()
    }

    /// The single hash on the last level, when present.
    pub fn root(&self) -> Option<&str> {
        self.levels.last()?.first().map(String::as_str)
    }

    /// Binary-tree parent rule: the node at `index` on one level connects to
    /// `index / 2` on the level above. Holds for odd level sizes too; the
    /// mapping is floor division, not a validated pairing.
    pub fn parent_index(index: usize) -> usize {
        index / 2
    }
}
