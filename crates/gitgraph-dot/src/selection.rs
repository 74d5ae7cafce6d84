//! Node-set resolution: selection keywords to category letters.
//!
//! A selection specifier is either one of the keywords [`ALL`], [`COMMITS`],
//! [`BRANCHES`], or a literal string of category letters. Literal strings
//! pass through untouched; letters that name no category are ignored when
//! projecting, which keeps selection strings forward compatible.

use crate::category::Category;

pub const ALL: &str = "all";
pub const COMMITS: &str = "commits";
pub const BRANCHES: &str = "branches";

/// Every category letter.
pub const ALL_NODES: &str = "dchatsglurb";
/// Everything except blobs and trees.
pub const COMMIT_NODES: &str = "dchasglur";
/// Everything except blobs, trees and commits.
pub const BRANCH_NODES: &str = "dhasglur";

/// Default selection when none is given.
pub const DEFAULT_NODES: &str = ALL_NODES;

/// Resolve a selection specifier to a category letter string.
pub fn resolve(spec: &str) -> &str {
    match spec {
        ALL => ALL_NODES,
        COMMITS => COMMIT_NODES,
        BRANCHES => BRANCH_NODES,
        letters => letters,
    }
}

/// Whether `letters` selects `category`.
pub fn selects(letters: &str, category: Category) -> bool {
    letters.contains(category.letter())
}

/// Letters that name no category, in order of first appearance.
pub fn unknown_letters(letters: &str) -> Vec<char> {
    let mut unknown = Vec::new();
    for letter in letters.chars() {
        if Category::from_letter(letter).is_none() && !unknown.contains(&letter) {
            unknown.push(letter);
        }
    }
    unknown
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use strum::IntoEnumIterator;

    use super::*;

    fn letter_set(letters: &str) -> BTreeSet<char> {
        letters.chars().collect()
    }

    fn without(letters: &str, removed: &[char]) -> BTreeSet<char> {
        letters.chars().filter(|c| !removed.contains(c)).collect()
    }

    #[test]
    fn test_all_has_every_letter_once() {
        let resolved = resolve(ALL);
        assert_eq!(resolved.len(), 11);
        let expected: BTreeSet<char> = Category::iter().map(Category::letter).collect();
        assert_eq!(letter_set(resolved), expected);
    }

    #[test]
    fn test_commits_drops_blob_and_tree() {
        assert_eq!(
            letter_set(resolve(COMMITS)),
            without(ALL_NODES, &['b', 't'])
        );
    }

    #[test]
    fn test_branches_drops_blob_tree_and_commit() {
        assert_eq!(
            letter_set(resolve(BRANCHES)),
            without(ALL_NODES, &['b', 't', 'c'])
        );
    }

    #[test]
    fn test_literal_passes_through() {
        assert_eq!(resolve("btc"), "btc");
        assert_eq!(resolve("xyz"), "xyz");
        assert_eq!(resolve(""), "");
    }

    #[test]
    fn test_selects() {
        assert!(selects("lc", Category::Commit));
        assert!(selects("lc", Category::LocalBranch));
        assert!(!selects("lc", Category::Blob));
    }

    #[test]
    fn test_unknown_letters() {
        assert_eq!(unknown_letters("cxbyx"), vec!['x', 'y']);
        assert!(unknown_letters(ALL_NODES).is_empty());
    }
}
