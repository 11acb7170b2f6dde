/// This module implements a variant of
/// [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
/// which polls a cancellation callback before every expansion.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use std::hash::Hash;

/// How a call to [astar] ended.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome<N, C> {
    /// Path from start to a successful node (both included) and its cost.
    Found(Vec<N>, C),
    Exhausted,
    Cancelled { expanded: usize },
}

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.cost.eq(&other.cost)
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // First orders per estimated cost, then creates subordering
        // based on cost, favoring exploration of largest cost nodes first
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => self.cost.cmp(&other.cost),
            s => s,
        }
    }
}

fn reverse_path<N, V, F>(parents: &FxIndexMap<N, V>, mut parent: F, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let mut i = start;
    let mut path: Vec<N> = std::iter::from_fn(|| {
        parents.get_index(i).map(|(node, value)| {
            i = parent(value);
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

pub fn astar<N, C, FN, IN, FH, FS, FC>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
    mut cancelled: FC,
) -> Outcome<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
    FC: FnMut() -> bool,
{
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: Zero::zero(),
        cost: Zero::zero(),
        index: 0,
    });
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, Zero::zero()));
    let mut expanded = 0;
    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        if cancelled() {
            return Outcome::Cancelled { expanded };
        }
        let successors = {
            let Some((node, &(_, c))) = parents.get_index(index) else {
                continue;
            };
            if success(node) {
                let path = reverse_path(&parents, |&(p, _)| p, index);
                return Outcome::Found(path, cost);
            }
            // We may have inserted a node several time into the binary heap if we found
            // a better way to access it. Ensure that we are currently dealing with the
            // best path and discard the others.
            if cost > c {
                continue;
            }
            expanded += 1;
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h; // heuristic(&successor)
            let n; // index for successor
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }

            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: n,
            });
        }
    }
    Outcome::Exhausted
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Walks a number line from 0 to 5 where every step costs one.
    #[test]
    fn finds_cheapest_path_on_a_line() {
        let outcome = astar(
            &0i32,
            |&n| vec![(n - 1, 1), (n + 1, 1)],
            |&n| (5 - n).abs(),
            |&n| n == 5,
            || false,
        );
        assert_eq!(outcome, Outcome::Found(vec![0, 1, 2, 3, 4, 5], 5));
    }

    #[test]
    fn reports_exhaustion() {
        let outcome = astar(
            &0i32,
            |&n| if n < 3 { vec![(n + 1, 1)] } else { vec![] },
            |_| 0,
            |&n| n == 10,
            || false,
        );
        assert_eq!(outcome, Outcome::Exhausted);
    }

    #[test]
    fn stops_when_cancelled() {
        let mut polls = 0;
        let outcome = astar(
            &0i32,
            |&n| vec![(n + 1, 1)],
            |_| 0,
            |_| false,
            || {
                polls += 1;
                polls > 3
            },
        );
        assert_eq!(outcome, Outcome::Cancelled { expanded: 3 });
    }
}
