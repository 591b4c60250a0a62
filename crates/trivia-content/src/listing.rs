//! Round listing for the `list` subcommand.

use std::path::PathBuf;

use trivia_core::field::{state, text};

use crate::error::ContentResult;
use crate::tree::ContentTree;

/// One row of the round listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub id: String,
    /// Display name; the round id when the record is missing or invalid.
    pub name: String,
    /// Number of declared categories, zero when unreadable.
    pub categories: usize,
    pub path: PathBuf,
}

/// Summarize every round of the tree, sorted by id.
pub fn list_rounds(tree: &ContentTree) -> ContentResult<Vec<RoundSummary>> {
    let mut summaries = Vec::new();
    for round in tree.rounds()? {
        let (name, categories) = match round.load_record() {
            Ok(record) => (
                text(&record.name)
                    .valid()
                    .map(str::to_string)
                    .unwrap_or_else(|| round.id.clone()),
                state(&record.categories).valid().map_or(0, Vec::len),
            ),
            Err(e) => {
                tracing::debug!(round = %round.id, error = %e, "listing round without a usable record");
                (round.id.clone(), 0)
            }
        };
        summaries.push(RoundSummary {
            id: round.id,
            name,
            categories,
            path: round.path,
        });
    }
    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn names_fall_back_to_the_round_id() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("b_named")).unwrap();
        fs::write(
            dir.path().join("b_named/round.json"),
            r#"{"name": "Named Round", "categories": ["A", "B"]}"#,
        )
        .unwrap();
        fs::create_dir_all(dir.path().join("a_broken")).unwrap();
        fs::write(dir.path().join("a_broken/round.json"), "not json").unwrap();
        fs::create_dir_all(dir.path().join("c_bad_name")).unwrap();
        fs::write(dir.path().join("c_bad_name/round.json"), r#"{"name": 3}"#).unwrap();

        let tree = ContentTree::open(dir.path()).unwrap();
        let rows = list_rounds(&tree).unwrap();
        let view: Vec<(&str, &str, usize)> = rows
            .iter()
            .map(|r| (r.id.as_str(), r.name.as_str(), r.categories))
            .collect();
        assert_eq!(
            view,
            vec![
                ("a_broken", "a_broken", 0),
                ("b_named", "Named Round", 2),
                ("c_bad_name", "c_bad_name", 0),
            ]
        );
        assert_eq!(rows[1].path, dir.path().join("b_named"));
    }
}
