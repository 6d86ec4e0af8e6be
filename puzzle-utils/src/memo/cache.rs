//! Single-threaded DP cache implementation.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

use tracing::trace;

use super::backend::Backend;
use super::problem::DpProblem;
use crate::error::MemoError;

/// A dynamic programming cache with lazy evaluation and dependency resolution.
///
/// Dependencies are resolved recursively on [`get`](Self::get) and each value is
/// computed exactly once. Interior mutability lets several lookups share the cache
/// through `&self`.
///
/// # Type Parameters
///
/// - `I`: Index type
/// - `K`: Value type (handed out by clone)
/// - `B`: Backend storage type (must implement `Backend<I, K>`)
/// - `P`: Problem type (must implement `DpProblem<I, K>`)
pub struct DpCache<I, K, B, P> {
    backend: RefCell<B>,
    resolving: RefCell<HashSet<I>>,
    problem: P,
    _phantom: PhantomData<K>,
}

impl DpCache<(), (), (), ()> {
    /// Starts a builder; both [`backend`](DpCacheBuilder::backend) and
    /// [`problem`](DpCacheBuilder::problem) must be set before `build`.
    pub fn builder() -> DpCacheBuilder<(), ()> {
        DpCacheBuilder {
            backend: (),
            problem: (),
        }
    }
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Hash + Eq + Clone + Debug,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    pub fn with_problem(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            resolving: RefCell::new(HashSet::new()),
            problem,
            _phantom: PhantomData,
        }
    }

    /// Retrieves the value for `index`, computing it and its dependencies if necessary.
    ///
    /// # Errors
    ///
    /// [`MemoError::Cycle`] if resolving `index` leads back to an index whose
    /// value is still being resolved. Nothing on the cycle is stored.
    pub fn get(&self, index: &I) -> Result<K, MemoError> {
        // Fast path: check if already computed
        if let Some(value) = self.backend.borrow().get(index) {
            return Ok(value.clone());
        }

        if !self.resolving.borrow_mut().insert(index.clone()) {
            return Err(MemoError::Cycle(format!("{:?}", index)));
        }
        let resolved: Result<Vec<K>, MemoError> = self
            .problem
            .deps(index)
            .iter()
            .map(|dep| self.get(dep))
            .collect();
        self.resolving.borrow_mut().remove(index);

        let value = self.problem.compute(index, resolved?);
        trace!(?index, "computed dp value");
        Ok(self
            .backend
            .borrow_mut()
            .get_or_insert(index.clone(), || value)
            .clone())
    }

    /// Number of values computed so far.
    pub fn len(&self) -> usize {
        self.backend.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builder returned by [`DpCache::builder`].
pub struct DpCacheBuilder<B, P> {
    backend: B,
    problem: P,
}

impl<B, P> DpCacheBuilder<B, P> {
    pub fn backend<B2>(self, backend: B2) -> DpCacheBuilder<B2, P> {
        DpCacheBuilder {
            backend,
            problem: self.problem,
        }
    }

    pub fn problem<P2>(self, problem: P2) -> DpCacheBuilder<B, P2> {
        DpCacheBuilder {
            backend: self.backend,
            problem,
        }
    }

    pub fn build<I, K>(self) -> DpCache<I, K, B, P>
    where
        I: Hash + Eq + Clone + Debug,
        K: Clone,
        B: Backend<I, K>,
        P: DpProblem<I, K>,
    {
        DpCache::with_problem(self.backend, self.problem)
    }
}
