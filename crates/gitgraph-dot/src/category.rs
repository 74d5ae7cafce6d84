//! Node categories and the table that drives graph construction.
//!
//! Each category is one row of [`CATEGORIES`]: its selection letter, fill
//! color, label rule and a function listing its members with their outgoing
//! references. Adding a category is a new row, not a new branch in the
//! projector.

use std::collections::BTreeMap;

use strum_macros::{Display, EnumIter};

use gitgraph_model::RepoModel;

/// Labels are cut to this many characters.
pub const SHORT: usize = 7;

/// Kind of node (or, for `Upstream`, edge) drawn from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
pub enum Category {
    Blob,
    Tree,
    Commit,
    LocalBranch,
    LocalHead,
    RemoteBranch,
    RemoteHead,
    RemoteServer,
    AnnotatedTag,
    Tag,
    Upstream,
}

impl Category {
    pub fn spec(self) -> &'static CategorySpec {
        // CATEGORIES is laid out in declaration order.
        &CATEGORIES[self as usize]
    }

    pub fn letter(self) -> char {
        self.spec().letter
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        CATEGORIES
            .iter()
            .find(|spec| spec.letter == letter)
            .map(|spec| spec.category)
    }

    /// Edge-only categories never contribute nodes.
    pub fn draws_nodes(self) -> bool {
        self.spec().fill_color.is_some()
    }
}

/// How a node label is derived from its identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelRule {
    /// First [`SHORT`] characters of the identity.
    Prefix,
    /// First [`SHORT`] characters after the first `/` (`origin/main` -> `main`).
    AfterRemote,
}

impl LabelRule {
    pub fn apply(self, id: &str) -> String {
        let base = match self {
            LabelRule::Prefix => id,
            LabelRule::AfterRemote => id.split_once('/').map_or(id, |(_, rest)| rest),
        };
        base.chars().take(SHORT).collect()
    }
}

/// A model identity together with the identities it references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member<'m> {
    pub id: &'m str,
    pub targets: Vec<&'m str>,
}

impl<'m> Member<'m> {
    fn new(id: &'m str, targets: Vec<&'m str>) -> Self {
        Self { id, targets }
    }
}

/// One row of the category table.
pub struct CategorySpec {
    pub category: Category,
    pub letter: char,
    /// `None` for edge-only categories.
    pub fill_color: Option<&'static str>,
    pub label: LabelRule,
    members: fn(&RepoModel) -> Vec<Member<'_>>,
}

impl CategorySpec {
    pub fn members<'m>(&self, model: &'m RepoModel) -> Vec<Member<'m>> {
        (self.members)(model)
    }
}

/// Category table, in drawing order.
pub static CATEGORIES: [CategorySpec; 11] = [
    CategorySpec {
        category: Category::Blob,
        letter: 'b',
        fill_color: Some("#9ccc66"), // green
        label: LabelRule::Prefix,
        members: blobs,
    },
    CategorySpec {
        category: Category::Tree,
        letter: 't',
        fill_color: Some("#bc9b8f"), // brown
        label: LabelRule::Prefix,
        members: trees,
    },
    CategorySpec {
        category: Category::Commit,
        letter: 'c',
        fill_color: Some("#85d5fa"), // blue
        label: LabelRule::Prefix,
        members: commits,
    },
    CategorySpec {
        category: Category::LocalBranch,
        letter: 'l',
        fill_color: Some("#9999ff"), // violet
        label: LabelRule::Prefix,
        members: local_branches,
    },
    CategorySpec {
        category: Category::LocalHead,
        letter: 'h',
        fill_color: Some("#e6ccff"), // pale violet
        label: LabelRule::Prefix,
        members: local_head,
    },
    CategorySpec {
        category: Category::RemoteBranch,
        letter: 'r',
        fill_color: Some("#ffa366"), // orange
        label: LabelRule::AfterRemote,
        members: remote_branches,
    },
    CategorySpec {
        category: Category::RemoteHead,
        letter: 'd',
        fill_color: Some("#ffbeb3"), // pale orange
        label: LabelRule::AfterRemote,
        members: remote_heads,
    },
    CategorySpec {
        category: Category::RemoteServer,
        letter: 's',
        fill_color: Some("#ff6666"), // red
        label: LabelRule::Prefix,
        members: remote_servers,
    },
    CategorySpec {
        category: Category::AnnotatedTag,
        letter: 'a',
        fill_color: Some("#ffdf80"), // pale yellow
        label: LabelRule::Prefix,
        members: annotated_tags,
    },
    CategorySpec {
        category: Category::Tag,
        letter: 'g',
        fill_color: Some("#ffc61a"), // yellow
        label: LabelRule::Prefix,
        members: tags,
    },
    CategorySpec {
        category: Category::Upstream,
        letter: 'u',
        fill_color: None,
        label: LabelRule::Prefix,
        members: upstreams,
    },
];

fn pointers(map: &BTreeMap<String, String>) -> Vec<Member<'_>> {
    map.iter()
        .map(|(id, target)| Member::new(id, vec![target.as_str()]))
        .collect()
}

fn lists(map: &BTreeMap<String, Vec<String>>) -> Vec<Member<'_>> {
    map.iter()
        .map(|(id, targets)| Member::new(id, targets.iter().map(String::as_str).collect()))
        .collect()
}

fn blobs(model: &RepoModel) -> Vec<Member<'_>> {
    model
        .blobs
        .iter()
        .map(|id| Member::new(id, Vec::new()))
        .collect()
}

fn trees(model: &RepoModel) -> Vec<Member<'_>> {
    model
        .trees
        .iter()
        .map(|(id, entries)| Member::new(id, entries.iter().map(|e| e.hash.as_str()).collect()))
        .collect()
}

fn commits(model: &RepoModel) -> Vec<Member<'_>> {
    lists(&model.commits)
}

fn local_branches(model: &RepoModel) -> Vec<Member<'_>> {
    pointers(&model.local_branches)
}

fn local_head(model: &RepoModel) -> Vec<Member<'_>> {
    model
        .local_head
        .iter()
        .map(|head| Member::new(&head.id, vec![head.target.as_str()]))
        .collect()
}

fn remote_branches(model: &RepoModel) -> Vec<Member<'_>> {
    pointers(&model.remote_branches)
}

fn remote_heads(model: &RepoModel) -> Vec<Member<'_>> {
    pointers(&model.remote_heads)
}

fn remote_servers(model: &RepoModel) -> Vec<Member<'_>> {
    lists(&model.remote_servers)
}

fn annotated_tags(model: &RepoModel) -> Vec<Member<'_>> {
    pointers(&model.annotated_tags)
}

fn tags(model: &RepoModel) -> Vec<Member<'_>> {
    pointers(&model.tags)
}

fn upstreams(model: &RepoModel) -> Vec<Member<'_>> {
    pointers(&model.upstreams)
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_table_matches_declaration_order() {
        for (index, category) in Category::iter().enumerate() {
            assert_eq!(CATEGORIES[index].category, category);
            assert_eq!(category.spec().category, category);
        }
    }

    #[test]
    fn test_letters_are_unique() {
        let letters: std::collections::HashSet<char> =
            CATEGORIES.iter().map(|spec| spec.letter).collect();
        assert_eq!(letters.len(), CATEGORIES.len());
    }

    #[test]
    fn test_from_letter() {
        assert_eq!(Category::from_letter('b'), Some(Category::Blob));
        assert_eq!(Category::from_letter('d'), Some(Category::RemoteHead));
        assert_eq!(Category::from_letter('u'), Some(Category::Upstream));
        assert_eq!(Category::from_letter('x'), None);
    }

    #[test]
    fn test_only_upstream_is_edge_only() {
        let edge_only: Vec<Category> = Category::iter().filter(|c| !c.draws_nodes()).collect();
        assert_eq!(edge_only, vec![Category::Upstream]);
    }

    #[test]
    fn test_label_rules() {
        assert_eq!(
            LabelRule::Prefix.apply("ce013625030ba8dba906f756967f9e9ca394464a"),
            "ce01362"
        );
        assert_eq!(LabelRule::Prefix.apply("main"), "main");
        assert_eq!(LabelRule::AfterRemote.apply("origin/main"), "main");
        assert_eq!(
            LabelRule::AfterRemote.apply("origin/feature/long-name"),
            "feature"
        );
        assert_eq!(LabelRule::AfterRemote.apply("nodivider"), "nodivid");
    }

    #[test]
    fn test_local_head_member() {
        let spec = Category::LocalHead.spec();
        assert!(spec.members(&RepoModel::new()).is_empty());

        let model = RepoModel::new().with_head("main");
        let members = spec.members(&model);
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].id, gitgraph_model::HEAD);
        assert_eq!(members[0].targets, vec!["main"]);
    }
}
