use crate::route::Route;
use fxhash::FxHashSet;
use grid_util::Point;
use std::collections::VecDeque;

/// A position together with the route that led to it from the start of the search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchState {
    pub position: Point,
    pub route: Route,
}

impl SearchState {
    pub fn new(position: Point, route: Route) -> SearchState {
        SearchState { position, route }
    }
}

/// First-in-first-out queue of states awaiting expansion.
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    queue: VecDeque<SearchState>,
}

impl Frontier {
    pub fn new(initial: SearchState) -> Frontier {
        let mut queue = VecDeque::new();
        queue.push_back(initial);
        Frontier { queue }
    }
    pub fn push(&mut self, state: SearchState) {
        self.queue.push_back(state);
    }
    /// Removes the earliest pushed state.
    pub fn pop(&mut self) -> Option<SearchState> {
        self.queue.pop_front()
    }
    pub fn len(&self) -> usize {
        self.queue.len()
    }
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Positions that have been scheduled for expansion.
#[derive(Clone, Debug, Default)]
pub struct Visited {
    seen: FxHashSet<Point>,
}

impl Visited {
    pub fn new(start: Point) -> Visited {
        let mut seen = FxHashSet::default();
        seen.insert(start);
        Visited { seen }
    }
    /// Marks `point` as visited, returning [false] if it already was.
    pub fn insert(&mut self, point: Point) -> bool {
        self.seen.insert(point)
    }
    pub fn contains(&self, point: &Point) -> bool {
        self.seen.contains(point)
    }
    pub fn len(&self) -> usize {
        self.seen.len()
    }
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
