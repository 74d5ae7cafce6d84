//! Graph projection: pick the categories a letter string selects and emit
//! their nodes and edges.
//!
//! Edges need their target in the node selection. Upstream (`u`) edges also
//! need their source selected, so selecting `u` never adds a node.

use std::collections::HashSet;

use tracing::debug;

use gitgraph_model::RepoModel;

use crate::category::CATEGORIES;
use crate::graph::{GitGraph, GraphEdge, GraphNode};
use crate::selection::{selects, unknown_letters};

/// Identities eligible to be drawn for `letters`.
///
/// Node categories contribute their member ids, the local head only its
/// singleton id (when the model has one). Upstream links contribute nothing.
pub fn node_selection<'m>(model: &'m RepoModel, letters: &str) -> HashSet<&'m str> {
    CATEGORIES
        .iter()
        .filter(|spec| spec.category.draws_nodes() && selects(letters, spec.category))
        .flat_map(|spec| spec.members(model))
        .map(|member| member.id)
        .collect()
}

/// Project `model` onto the categories selected by `letters`.
///
/// A node is emitted only for selected categories. An edge is emitted only
/// when its owning category is selected and its target is in the node
/// selection; upstream edges additionally require their source to be
/// selected, so they never introduce a node of their own.
pub fn project(model: &RepoModel, letters: &str) -> GitGraph {
    let unknown = unknown_letters(letters);
    if !unknown.is_empty() {
        debug!(?unknown, "ignoring unknown node letters");
    }

    let selection = node_selection(model, letters);
    let mut graph = GitGraph::new();

    for spec in CATEGORIES
        .iter()
        .filter(|spec| selects(letters, spec.category))
    {
        let members = spec.members(model);
        let mut edge_count = 0usize;

        for member in &members {
            if let Some(fill_color) = spec.fill_color {
                graph.add_node(GraphNode {
                    id: member.id.to_string(),
                    label: spec.label.apply(member.id),
                    fill_color,
                    category: spec.category,
                });
            } else if !selection.contains(member.id) {
                continue;
            }

            for target in &member.targets {
                if selection.contains(target) {
                    graph.add_edge(GraphEdge {
                        from: member.id.to_string(),
                        to: target.to_string(),
                        category: spec.category,
                    });
                    edge_count += 1;
                }
            }
        }

        debug!(
            category = %spec.category,
            members = members.len(),
            edges = edge_count,
            "projected category"
        );
    }

    graph
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::category::Category;
    use crate::selection::{ALL_NODES, BRANCHES, resolve};

    fn owning_category(model: &RepoModel, letters: &str, id: &str) -> Option<Category> {
        CATEGORIES
            .iter()
            .filter(|spec| spec.category.draws_nodes() && selects(letters, spec.category))
            .find(|spec| spec.members(model).iter().any(|member| member.id == id))
            .map(|spec| spec.category)
    }

    fn commit_model() -> RepoModel {
        RepoModel::new()
            .with_blob("b1")
            .with_tree("t1", &[("b1", "README.md")])
            .with_commit("c1", &["c2", "t1"])
            .with_commit("c2", &["t1"])
    }

    fn ids(graph: &GitGraph) -> Vec<&str> {
        graph.node_ids().into_iter().collect()
    }

    fn pairs(graph: &GitGraph) -> Vec<(&str, &str)> {
        graph.edge_pairs().into_iter().collect()
    }

    #[test]
    fn test_commit_without_selected_targets() {
        let model = RepoModel::new()
            .with_tree("t1", &[])
            .with_commit("c1", &["c2", "t1"]);

        let graph = project(&model, "c");
        assert_eq!(ids(&graph), vec!["c1"]);
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn test_commit_and_tree_selected() {
        let model = RepoModel::new()
            .with_tree("t1", &[])
            .with_commit("c1", &["c2", "t1"]);

        let graph = project(&model, "ct");
        assert_eq!(ids(&graph), vec!["c1", "t1"]);
        assert_eq!(pairs(&graph), vec![("c1", "t1")]);
    }

    #[test]
    fn test_local_branch_to_commit() {
        let model = RepoModel::new()
            .with_commit("c1", &[])
            .with_local_branch("main", "c1");

        let graph = project(&model, "lc");
        assert_eq!(ids(&graph), vec!["c1", "main"]);
        assert_eq!(pairs(&graph), vec![("main", "c1")]);
    }

    #[test]
    fn test_branches_on_objects_only_model_is_empty() {
        let graph = project(&commit_model(), resolve(BRANCHES));
        assert!(graph.nodes().is_empty());
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn test_remote_branch_label_drops_remote() {
        let model = RepoModel::new().with_remote_branch("origin/main", "c1");
        let graph = project(&model, "r");

        let node = graph.find_node("origin/main").expect("remote branch node");
        assert_eq!(node.label, "main");
        assert_eq!(node.fill_color, "#ffa366");
    }

    #[test]
    fn test_remote_head_label_is_truncated() {
        let model = RepoModel::new().with_remote_head("upstream/HEAD", "upstream/development");
        let graph = project(&model, "dr");

        assert_eq!(graph.find_node("upstream/HEAD").expect("head").label, "HEAD");
        // Target is not a remote branch member, so no edge.
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn test_hash_labels_are_seven_chars() {
        let model = RepoModel::new().with_blob("ce013625030ba8dba906f756967f9e9ca394464a");
        let graph = project(&model, "b");
        assert_eq!(graph.nodes()[0].label, "ce01362");
    }

    #[test]
    fn test_upstream_adds_edges_only() {
        let model = RepoModel::new()
            .with_local_branch("main", "c1")
            .with_remote_branch("origin/main", "c1")
            .with_upstream("main", "origin/main");

        let with_upstream = project(&model, "lru");
        let without_upstream = project(&model, "lr");
        assert_eq!(with_upstream.node_ids(), without_upstream.node_ids());
        assert_eq!(pairs(&with_upstream), vec![("main", "origin/main")]);
        assert_eq!(with_upstream.edges()[0].category, Category::Upstream);
    }

    #[test]
    fn test_upstream_needs_both_ends_selected() {
        let model = RepoModel::new()
            .with_local_branch("main", "c1")
            .with_remote_branch("origin/main", "c1")
            .with_upstream("main", "origin/main");

        assert!(project(&model, "ru").edges().is_empty());
        assert!(project(&model, "lu").edges().is_empty());
        assert!(project(&model, "u").is_empty());
    }

    #[test]
    fn test_head_points_at_branch() {
        let model = RepoModel::new()
            .with_local_branch("main", "c1")
            .with_head("main");

        let graph = project(&model, "hl");
        assert_eq!(pairs(&graph), vec![("HEAD", "main")]);
        assert_eq!(graph.find_node("HEAD").expect("head").fill_color, "#e6ccff");
    }

    #[test]
    fn test_server_and_tags() {
        let model = RepoModel::new()
            .with_commit("c1", &[])
            .with_remote_branch("origin/main", "c1")
            .with_remote_server("origin", &["origin/main"])
            .with_annotated_tag("a1", "c1")
            .with_tag("v1.0", "a1")
            .with_tag("light", "c1");

        let graph = project(&model, "csrag");
        assert_eq!(
            pairs(&graph),
            vec![
                ("a1", "c1"),
                ("light", "c1"),
                ("origin", "origin/main"),
                ("origin/main", "c1"),
                ("v1.0", "a1"),
            ]
        );
    }

    #[test]
    fn test_unknown_letters_are_inert() {
        let model = commit_model();
        assert_eq!(
            project(&model, "cxyz").node_ids(),
            project(&model, "c").node_ids()
        );
        assert!(project(&model, "xyz").is_empty());
    }

    #[test]
    fn test_every_node_belongs_to_a_selected_category() {
        let model = commit_model()
            .with_local_branch("main", "c1")
            .with_head("main")
            .with_remote_branch("origin/main", "c2")
            .with_upstream("main", "origin/main");

        for letters in ["b", "tc", "lh", "ru", "btu", ALL_NODES] {
            let graph = project(&model, letters);
            let selection = node_selection(&model, letters);
            for node in graph.nodes() {
                assert!(selects(letters, node.category), "{letters}: {node:?}");
                assert_eq!(
                    owning_category(&model, letters, &node.id),
                    Some(node.category)
                );
            }
            for edge in graph.edges() {
                assert!(selects(letters, edge.category), "{letters}: {edge:?}");
                assert!(selection.contains(edge.to.as_str()), "{letters}: {edge:?}");
            }
        }
    }

    #[test]
    fn test_projection_is_idempotent() {
        let model = commit_model().with_local_branch("main", "c1");
        let first = project(&model, ALL_NODES);
        let second = project(&model, ALL_NODES);
        assert_eq!(first.node_ids(), second.node_ids());
        assert_eq!(first.edge_pairs(), second.edge_pairs());
        assert_eq!(first.to_dot(), second.to_dot());
    }

    #[test]
    fn test_letter_order_does_not_change_content() {
        let model = commit_model().with_local_branch("main", "c1");
        let forward = project(&model, "btcl");
        let backward = project(&model, "lctb");
        assert_eq!(forward.node_ids(), backward.node_ids());
        assert_eq!(forward.edge_pairs(), backward.edge_pairs());
    }
}
