//! Lazy breadth/best-first exploration over arbitrary states.
//!
//! [`explore`] turns a start state and a successor function into an iterator that
//! expands a frontier one state per pull. The frontier order is a [`Strategy`]:
//! [`Fifo`] by default, or [`Minimizing`] once [`Explore::minimizing`] is called.
//! [`Explore::filter_exploration`] gates which children enter the frontier.
//!
//! The engine never terminates on its own unless the frontier runs dry, so
//! unbounded state spaces must be consumed with `find`, `take`, `take_while`...
//!
//! # Example
//!
//! ```
//! use puzzle_utils::explore;
//!
//! let mut layers = explore(0u32, |n| [n + 1, n + 2]);
//! assert_eq!(layers.iter().take(5).collect::<Vec<_>>(), vec![0, 1, 2, 2, 3]);
//!
//! // Restarting rebuilds the frontier from scratch.
//! assert_eq!(layers.iter().take(2).collect::<Vec<_>>(), vec![0, 1]);
//! ```

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// Frontier ordering used by the exploration engine.
///
/// A strategy owns whatever it needs to order states (e.g. a key function) while
/// the frontier container itself is created fresh for every run.
pub trait Strategy<S> {
    /// Container holding not-yet-yielded states
    type Frontier: Default;

    /// Adds a state to the frontier.
    fn push(&mut self, frontier: &mut Self::Frontier, state: S);

    /// Removes the next state to yield, or `None` when the frontier is empty.
    fn pop(&mut self, frontier: &mut Self::Frontier) -> Option<S>;
}

/// First in, first out: plain breadth-first layers in insertion order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fifo;

impl<S> Strategy<S> for Fifo {
    type Frontier = VecDeque<S>;

    fn push(&mut self, frontier: &mut Self::Frontier, state: S) {
        frontier.push_back(state);
    }

    fn pop(&mut self, frontier: &mut Self::Frontier) -> Option<S> {
        frontier.pop_front()
    }
}

/// Lowest key first. States with equal keys leave in insertion order.
#[derive(Debug, Clone, Copy)]
pub struct Minimizing<F> {
    key: F,
}

impl<S, K, F> Strategy<S> for Minimizing<F>
where
    F: FnMut(&S) -> K,
    K: Ord,
{
    type Frontier = KeyedHeap<S, K>;

    fn push(&mut self, frontier: &mut Self::Frontier, state: S) {
        let key = (self.key)(&state);
        let seq = frontier.pushed;
        frontier.pushed += 1;
        frontier.heap.push(Keyed { key, seq, state });
    }

    fn pop(&mut self, frontier: &mut Self::Frontier) -> Option<S> {
        frontier.heap.pop().map(|keyed| keyed.state)
    }
}

/// Min-heap frontier backing [`Minimizing`].
pub struct KeyedHeap<S, K> {
    heap: BinaryHeap<Keyed<S, K>>,
    pushed: u64,
}

impl<S, K: Ord> Default for KeyedHeap<S, K> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }
}

struct Keyed<S, K> {
    key: K,
    seq: u64,
    state: S,
}

impl<S, K: Ord> PartialEq for Keyed<S, K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S, K: Ord> Eq for Keyed<S, K> {}

impl<S, K: Ord> PartialOrd for Keyed<S, K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S, K: Ord> Ord for Keyed<S, K> {
    // Reversed so that `BinaryHeap` (a max-heap) pops the smallest key, then the oldest push.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Filter that keeps every child; the default for a fresh [`Explore`].
pub type AcceptAll<S> = fn(&S) -> bool;

fn accept_all<S>(_: &S) -> bool {
    true
}

/// An exploration configuration: start state, successor function, enqueue filter
/// and frontier strategy.
///
/// Build one with [`explore`], refine it with [`filter_exploration`](Self::filter_exploration)
/// and [`minimizing`](Self::minimizing), then consume it with [`iter`](Self::iter)
/// (restartable) or `into_iter` (one shot).
pub struct Explore<S, N, P = AcceptAll<S>, O = Fifo> {
    start: S,
    expander: Expander<N, P, O>,
}

/// Successor function, enqueue filter and ordering; everything but the start state.
struct Expander<N, P, O> {
    next: N,
    filter: P,
    order: O,
}

/// Starts an exploration at `start`, expanding each yielded state with `next`.
pub fn explore<S, N, I>(start: S, next: N) -> Explore<S, N>
where
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
{
    Explore {
        start,
        expander: Expander {
            next,
            filter: accept_all::<S>,
            order: Fifo,
        },
    }
}

impl<S, N, P, O> Explore<S, N, P, O> {
    /// Keeps only the children accepted by `filter` in the frontier.
    ///
    /// The start state is always yielded. The filter runs once per generated child,
    /// right before it would be enqueued, so it may own bookkeeping such as a
    /// best-cost table. Replaces any previously configured filter.
    pub fn filter_exploration<F>(self, filter: F) -> Explore<S, N, F, O>
    where
        F: FnMut(&S) -> bool,
    {
        let Expander { next, order, .. } = self.expander;
        Explore {
            start: self.start,
            expander: Expander {
                next,
                filter,
                order,
            },
        }
    }

    /// Switches to a priority frontier yielding the state with the smallest `key` first.
    pub fn minimizing<K, F>(self, key: F) -> Explore<S, N, P, Minimizing<F>>
    where
        F: FnMut(&S) -> K,
        K: Ord,
    {
        let Expander { next, filter, .. } = self.expander;
        Explore {
            start: self.start,
            expander: Expander {
                next,
                filter,
                order: Minimizing { key },
            },
        }
    }
}

impl<S, N, I, P, O> Explore<S, N, P, O>
where
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
    P: FnMut(&S) -> bool,
    O: Strategy<S>,
{
    /// Runs the exploration from the start state with a fresh frontier.
    ///
    /// Every call starts over; closures keep whatever state they captured.
    pub fn iter(&mut self) -> Iter<'_, S, N, P, O>
    where
        S: Clone,
    {
        let frontier = self.expander.seed(self.start.clone());
        Iter {
            expander: &mut self.expander,
            frontier,
        }
    }
}

impl<N, P, O> Expander<N, P, O> {
    fn seed<S>(&mut self, start: S) -> O::Frontier
    where
        O: Strategy<S>,
    {
        let mut frontier = O::Frontier::default();
        self.order.push(&mut frontier, start);
        frontier
    }

    fn advance<S, I>(&mut self, frontier: &mut O::Frontier) -> Option<S>
    where
        N: FnMut(&S) -> I,
        I: IntoIterator<Item = S>,
        P: FnMut(&S) -> bool,
        O: Strategy<S>,
    {
        let state = self.order.pop(frontier)?;
        for child in (self.next)(&state) {
            if (self.filter)(&child) {
                self.order.push(frontier, child);
            }
        }
        Some(state)
    }
}

/// Borrowing iterator returned by [`Explore::iter`].
pub struct Iter<'a, S, N, P, O: Strategy<S>> {
    expander: &'a mut Expander<N, P, O>,
    frontier: O::Frontier,
}

impl<S, N, I, P, O> Iterator for Iter<'_, S, N, P, O>
where
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
    P: FnMut(&S) -> bool,
    O: Strategy<S>,
{
    type Item = S;

    fn next(&mut self) -> Option<S> {
        self.expander.advance::<S, I>(&mut self.frontier)
    }
}

/// Owning iterator returned by `Explore::into_iter`.
pub struct IntoIter<S, N, P, O: Strategy<S>> {
    expander: Expander<N, P, O>,
    frontier: O::Frontier,
}

impl<S, N, I, P, O> Iterator for IntoIter<S, N, P, O>
where
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
    P: FnMut(&S) -> bool,
    O: Strategy<S>,
{
    type Item = S;

    fn next(&mut self) -> Option<S> {
        self.expander.advance::<S, I>(&mut self.frontier)
    }
}

impl<S, N, I, P, O> IntoIterator for Explore<S, N, P, O>
where
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
    P: FnMut(&S) -> bool,
    O: Strategy<S>,
{
    type Item = S;
    type IntoIter = IntoIter<S, N, P, O>;

    fn into_iter(self) -> Self::IntoIter {
        let mut expander = self.expander;
        let frontier = expander.seed(self.start);
        IntoIter { expander, frontier }
    }
}
