use core::fmt::Debug;
use std::collections::HashMap;

use splay_core::Sentinel;

/// What a node turns into, decided from its type alone.
#[derive(Debug)]
pub enum Classification<'a, R> {
    /// `__null__`.
    Null,
    /// `__fragment__`.
    Fragment,
    /// A mapped component.
    Known(&'a R),
    /// A type nobody registered.
    Unknown,
}

/// Component map owned by one hydrator.
///
/// Sentinel types are classified before the map is consulted, so an entry registered
/// under `__null__` or `__fragment__` is never used.
pub struct Components<R> {
    map: HashMap<String, R>,
}

impl<R> Default for Components<R> {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
        }
    }
}

impl<R> Debug for Components<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut names: Vec<_> = self.map.keys().collect();
        names.sort();
        f.debug_tuple("Components").field(&names).finish()
    }
}

impl<R> Components<R> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `ty` to `component`, replacing any previous entry.
    pub fn insert(&mut self, ty: impl Into<String>, component: R) {
        self.map.insert(ty.into(), component);
    }

    /// Whether `ty` would hydrate without a fallback.
    #[must_use]
    pub fn knows(&self, ty: &str) -> bool {
        !matches!(self.classify(ty), Classification::Unknown)
    }

    /// Classifies `ty` with a single lookup.
    #[must_use]
    pub fn classify(&self, ty: &str) -> Classification<'_, R> {
        match Sentinel::from_type(ty) {
            Some(Sentinel::Null) => Classification::Null,
            Some(Sentinel::Fragment) => Classification::Fragment,
            None => self
                .map
                .get(ty)
                .map_or(Classification::Unknown, Classification::Known),
        }
    }

    /// Number of mapped types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether nothing is mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<R, N: Into<String>> FromIterator<(N, R)> for Components<R> {
    fn from_iter<I: IntoIterator<Item = (N, R)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().map(|(ty, r)| (ty.into(), r)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_win_over_entries() {
        let components: Components<u8> = [("__null__", 1), ("card", 2)].into_iter().collect();
        assert!(matches!(components.classify("__null__"), Classification::Null));
        assert!(matches!(components.classify("__fragment__"), Classification::Fragment));
        assert!(matches!(components.classify("card"), Classification::Known(&2)));
        assert!(matches!(components.classify("list"), Classification::Unknown));
        assert!(components.knows("__fragment__"));
        assert!(!components.knows("list"));
    }
}
