//! Breadth-first shortest-path search between two people

use std::collections::{HashMap, HashSet, VecDeque};

use super::graph::{Graph, MovieId, PersonId};

/// Find the shortest chain of (movie, person) hops from `source` to `target`.
///
/// Standard unweighted BFS: a FIFO frontier, an explored set, and a
/// frontier-membership set so no person is enqueued twice. The path is
/// reconstructed by walking parent pointers back from the goal and
/// reversing.
///
/// Returns an empty vector when `source == target` and `None` when the
/// frontier is exhausted without reaching the target (no connection is a
/// normal outcome, not an error). The path length is minimal in hop count;
/// ties among equal-length paths fall to traversal order.
pub fn shortest_path(
    graph: &Graph,
    source: &PersonId,
    target: &PersonId,
) -> Option<Vec<(MovieId, PersonId)>> {
    if source == target {
        return Some(Vec::new());
    }

    let mut frontier = VecDeque::new();
    frontier.push_back(source.clone());

    let mut explored: HashSet<PersonId> = HashSet::new();
    let mut in_frontier: HashSet<PersonId> = HashSet::new();
    in_frontier.insert(source.clone());

    // child -> (parent, movie linking them)
    let mut parents: HashMap<PersonId, (PersonId, MovieId)> = HashMap::new();

    while let Some(person) = frontier.pop_front() {
        in_frontier.remove(&person);
        explored.insert(person.clone());

        for (movie_id, neighbor) in graph.neighbors(&person) {
            if explored.contains(&neighbor) || in_frontier.contains(&neighbor) {
                continue;
            }

            parents.insert(neighbor.clone(), (person.clone(), movie_id));

            // Goal test on generation, as in the original: the first time
            // the target is produced it is already at minimal depth.
            if &neighbor == target {
                return Some(reconstruct(&parents, source, target));
            }

            in_frontier.insert(neighbor.clone());
            frontier.push_back(neighbor);
        }
    }

    None
}

fn reconstruct(
    parents: &HashMap<PersonId, (PersonId, MovieId)>,
    source: &PersonId,
    target: &PersonId,
) -> Vec<(MovieId, PersonId)> {
    let mut path = Vec::new();
    let mut current = target.clone();

    while &current != source {
        let (parent, movie) = parents[&current].clone();
        path.push((movie, current));
        current = parent;
    }

    path.reverse();
    path
}
