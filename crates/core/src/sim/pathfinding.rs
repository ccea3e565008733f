//! Breadth-first shortest paths over the 4-connected grid.
//! Walls and off-grid cells are impassable; occupied cells are not, so a path
//! may run through the player or other bots.

use std::collections::{BTreeMap, BTreeSet};

use crate::grid::Grid;
use crate::types::{Direction, Pos};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct PathStep {
    pub direction: Direction,
    pub path_len: u32,
}

// One distance layer of the search, in the order its cells were first and last
// reached from the previous layer.
struct Layer {
    by_first_arrival: Vec<Pos>,
    by_last_arrival: Vec<Pos>,
}

pub fn manhattan(a: Pos, b: Pos) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

/// Axis-aligned unit step from `source` toward `target`. The horizontal axis
/// wins only when it is strictly longer; ties go vertical.
pub fn direction_towards(source: Pos, target: Pos) -> Direction {
    let dx = target.x - source.x;
    let dy = target.y - source.y;
    if dx.abs() > dy.abs() {
        if dx > 0 { Direction::Right } else { Direction::Left }
    } else if dy > 0 {
        Direction::Down
    } else {
        Direction::Up
    }
}

/// First step of a shortest path from `start` to `goal`.
///
/// Ties between equal-length paths follow queue order. The goal keeps the
/// neighbor that reached it first, while every other cell on the way back keeps
/// the neighbor that reached it last. Each layer is kept in both arrival
/// orders, so the search visits every cell once. `None` when the goal is
/// unreachable or already reached.
pub(super) fn bfs_first_step(grid: &Grid, start: Pos, goal: Pos) -> Option<PathStep> {
    if start == goal {
        return None;
    }

    let mut seen = BTreeSet::from([start]);
    let mut latest_predecessor = BTreeMap::new();
    let mut layer = Layer { by_first_arrival: vec![start], by_last_arrival: vec![start] };
    let mut distance = 0;

    while !layer.by_first_arrival.is_empty() {
        distance += 1;

        let mut first_predecessor = BTreeMap::new();
        let mut by_first_arrival = Vec::new();
        for &pos in &layer.by_first_arrival {
            for next in open_neighbors(grid, pos) {
                if seen.contains(&next) || first_predecessor.contains_key(&next) {
                    continue;
                }
                first_predecessor.insert(next, pos);
                by_first_arrival.push(next);
            }
        }

        if let Some(&predecessor) = first_predecessor.get(&goal) {
            return Some(walk_back(&latest_predecessor, start, goal, predecessor, distance));
        }

        let mut last_arrival = BTreeMap::new();
        for &pos in &layer.by_last_arrival {
            for next in open_neighbors(grid, pos) {
                if first_predecessor.contains_key(&next) {
                    latest_predecessor.insert(next, pos);
                    last_arrival.insert(next, last_arrival.len());
                }
            }
        }
        let mut by_last_arrival = by_first_arrival.clone();
        by_last_arrival.sort_by_key(|pos| last_arrival.get(pos).copied());

        seen.extend(by_first_arrival.iter().copied());
        layer = Layer { by_first_arrival, by_last_arrival };
    }

    None
}

fn open_neighbors(grid: &Grid, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
    Direction::ALL
        .into_iter()
        .map(move |direction| pos.offset(direction))
        .filter(|&next| grid.in_bounds(next) && !grid.is_wall(next))
}

// Every predecessor sits one layer closer to `start`, so the walk ends.
fn walk_back(
    latest_predecessor: &BTreeMap<Pos, Pos>,
    start: Pos,
    goal: Pos,
    mut predecessor: Pos,
    path_len: u32,
) -> PathStep {
    let mut node = goal;
    while predecessor != start {
        node = predecessor;
        predecessor = match latest_predecessor.get(&node) {
            Some(&pos) => pos,
            None => break,
        };
    }
    PathStep { direction: direction_towards(start, node), path_len }
}
