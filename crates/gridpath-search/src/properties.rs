//! Randomized checks over small grids.

use std::collections::{HashSet, VecDeque};

use gridpath_core::{Cell, Dims, GridSnapshot};
use quickcheck::quickcheck;

use crate::distance::manhattan;
use crate::{Algorithm, search};

type Pos = (u8, u8);

/// Fold arbitrary bytes into a grid of at most 9x9 with start and end kept
/// open.
fn build(size: Pos, walls: &[Pos], start: Pos, end: Pos) -> GridSnapshot {
    let dims = Dims::new(1 + (size.0 % 9) as i32, 1 + (size.1 % 9) as i32);
    let fold = |(r, c): Pos| Cell::new(r as i32 % dims.rows, c as i32 % dims.cols);
    let (start, end) = (fold(start), fold(end));
    let walls: HashSet<Cell> = walls.iter().copied().map(fold).collect();
    GridSnapshot::from_fn(dims, start, end, |c| {
        c != start && c != end && walls.contains(&c)
    })
    .unwrap()
}

fn reachable(s: &GridSnapshot) -> HashSet<Cell> {
    let mut seen = HashSet::from([s.start()]);
    let mut queue = VecDeque::from([s.start()]);
    while let Some(c) = queue.pop_front() {
        for d in crate::neighbors::CARDINAL {
            let n = c + d;
            if s.dims().contains(n) && !s.is_blocked(n) && seen.insert(n) {
                queue.push_back(n);
            }
        }
    }
    seen
}

#[test]
fn prop_visited_has_no_duplicates_and_covers_path() {
    fn prop(size: Pos, walls: Vec<Pos>, start: Pos, end: Pos) -> bool {
        let s = build(size, &walls, start, end);
        Algorithm::ALL.into_iter().all(|a| {
            let r = search(a, &s);
            let set: HashSet<Cell> = r.visited.iter().copied().collect();
            set.len() == r.visited.len() && r.path.iter().all(|c| set.contains(c))
        })
    }
    quickcheck(prop as fn(_, _, _, _) -> _);
}

#[test]
fn prop_open_grid_bfs_is_manhattan() {
    fn prop(size: Pos, start: Pos, end: Pos) -> bool {
        let s = build(size, &[], start, end);
        let r = search(Algorithm::Bfs, &s);
        r.path.len() as i32 == manhattan(s.start(), s.end())
    }
    quickcheck(prop as fn(_, _, _) -> _);
}

#[test]
fn prop_astar_matches_dijkstra_length() {
    fn prop(size: Pos, walls: Vec<Pos>, start: Pos, end: Pos) -> bool {
        let s = build(size, &walls, start, end);
        let a = search(Algorithm::Astar, &s);
        let d = search(Algorithm::Dijkstra, &s);
        let b = search(Algorithm::Bfs, &s);
        a.path.len() == d.path.len() && d.path.len() == b.path.len()
    }
    quickcheck(prop as fn(_, _, _, _) -> _);
}

#[test]
fn prop_unreachable_end_floods_reachable_set() {
    fn prop(size: Pos, walls: Vec<Pos>, start: Pos, end: Pos) -> bool {
        let s = build(size, &walls, start, end);
        let reach = reachable(&s);
        if reach.contains(&s.end()) {
            return true;
        }
        Algorithm::ALL.into_iter().all(|a| {
            let r = search(a, &s);
            let visited: HashSet<Cell> = r.visited.iter().copied().collect();
            r.path.is_empty() && visited == reach
        })
    }
    quickcheck(prop as fn(_, _, _, _) -> _);
}

#[test]
fn prop_path_is_a_walk_from_start_to_end() {
    fn prop(size: Pos, walls: Vec<Pos>, start: Pos, end: Pos) -> bool {
        let s = build(size, &walls, start, end);
        Algorithm::ALL.into_iter().all(|a| {
            let r = search(a, &s);
            if r.path.is_empty() {
                return s.start() == s.end() || !reachable(&s).contains(&s.end());
            }
            let mut prev = s.start();
            for &c in &r.path {
                if manhattan(prev, c) != 1 || s.is_blocked(c) {
                    return false;
                }
                prev = c;
            }
            prev == s.end() && r.visited.last() == Some(&s.end())
        })
    }
    quickcheck(prop as fn(_, _, _, _) -> _);
}

#[test]
fn prop_dijkstra_visits_in_bfs_order() {
    fn prop(size: Pos, walls: Vec<Pos>, start: Pos, end: Pos) -> bool {
        let s = build(size, &walls, start, end);
        search(Algorithm::Dijkstra, &s).visited == search(Algorithm::Bfs, &s).visited
    }
    quickcheck(prop as fn(_, _, _, _) -> _);
}

#[test]
fn prop_deterministic() {
    fn prop(size: Pos, walls: Vec<Pos>, start: Pos, end: Pos) -> bool {
        let s = build(size, &walls, start, end);
        Algorithm::ALL
            .into_iter()
            .all(|a| search(a, &s) == search(a, &s))
    }
    quickcheck(prop as fn(_, _, _, _) -> _);
}
