use std::collections::HashMap;
use std::hash::Hash;

/// A function wrapped with its own result table.
///
/// ```
/// use puzzle_utils::memo::Memoized;
///
/// let mut square = Memoized::new(|n: &u64| n * n);
/// assert_eq!(square.call(12), 144);
/// assert_eq!(square.call(12), 144);
/// assert_eq!(square.len(), 1);
/// ```
pub struct Memoized<I, O, F> {
    cache: HashMap<I, O>,
    f: F,
}

impl<I, O, F> Memoized<I, O, F>
where
    I: Hash + Eq,
    O: Clone,
    F: FnMut(&I) -> O,
{
    pub fn new(f: F) -> Self {
        Self {
            cache: HashMap::new(),
            f,
        }
    }

    /// The cached result for `input`, computing it on first use.
    pub fn call(&mut self, input: I) -> O {
        if let Some(output) = self.cache.get(&input) {
            return output.clone();
        }
        let output = (self.f)(&input);
        self.cache.insert(input, output.clone());
        output
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Forgets every cached result.
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}
