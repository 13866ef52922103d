use super::frontier::{Frontier, SearchNode};
use super::neighbors::neighbors_for_person;
use crate::parsing::Catalog;
use rustc_hash::FxHashSet;
use std::time::Instant;

/// One step of a path: the shared film and the person it leads to.
pub type PathStep = (String, String);
/// (path if one exists, people expanded, search duration in seconds)
pub type PathResult = (Option<Vec<PathStep>>, usize, f64);

/// Breadth-first shortest path from `source` to `target` through shared
/// films.
///
/// The returned steps run source to target, one `(film_id, person_id)`
/// pair per hop; the source itself contributes no step, so the path length
/// is the degree of separation. `None` means the two people sit in
/// different connected components of the catalog.
pub fn bfs_find_path(source: &str, target: &str, catalog: &Catalog) -> PathResult {
    let search_timer = Instant::now();

    // Zero degrees of separation. Without this check the search would
    // rediscover the source as its own neighbor.
    if source == target {
        return (Some(Vec::new()), 0, search_timer.elapsed().as_secs_f64());
    }

    let mut arena = vec![SearchNode {
        state: source.to_string(),
        parent: None,
        action: None,
    }];
    let mut frontier = Frontier::queue();
    frontier.add(0);

    let mut visited: FxHashSet<String> = FxHashSet::default();

    while !frontier.is_empty() {
        let current = frontier.remove();
        let current_state = arena[current].state.clone();
        visited.insert(current_state.clone());

        for (film_id, person_id) in neighbors_for_person(&current_state, catalog) {
            if visited.contains(&person_id) {
                continue;
            }

            let node = SearchNode {
                state: person_id,
                parent: Some(current),
                action: Some(film_id),
            };

            // Goal test at construction: under FIFO expansion the first
            // goal node created is at minimal depth.
            if node.state == target {
                let path = reconstruct_path(&arena, &node);
                return (
                    Some(path),
                    visited.len(),
                    search_timer.elapsed().as_secs_f64(),
                );
            }

            arena.push(node);
            frontier.add(arena.len() - 1);
        }
    }

    (None, visited.len(), search_timer.elapsed().as_secs_f64())
}

/// Walk parent links from the goal node back to the root, then flip the
/// collected steps so they run source to target. The root has no action
/// and contributes no step.
fn reconstruct_path(arena: &[SearchNode], goal: &SearchNode) -> Vec<PathStep> {
    let mut path = Vec::new();
    let mut step = goal;

    while let (Some(parent), Some(film_id)) = (step.parent, step.action.as_ref()) {
        path.push((film_id.clone(), step.state.clone()));
        step = &arena[parent];
    }

    path.reverse();
    path
}
