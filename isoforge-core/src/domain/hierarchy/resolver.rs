// isoforge-core/src/domain/hierarchy/resolver.rs

use std::collections::{HashMap, HashSet};

use crate::domain::reference::Subdivision;
use crate::domain::report::{Issue, RunReport};

/// Outcome of a parent-chain walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    /// The chain reached the country after this many hops (direct child = 1).
    Resolved(usize),
    /// The chain stopped on an unknown parent; hops walked before the break.
    Orphaned(usize),
    /// The chain loops and never reaches the country.
    Cyclic,
}

impl Depth {
    /// Numeric depth used for ordering. Cycles sort as root-equivalent (0).
    pub fn level(self) -> usize {
        match self {
            Self::Resolved(n) | Self::Orphaned(n) => n,
            Self::Cyclic => 0,
        }
    }
}

/// Nesting depth of subdivisions inside ONE country.
/// Parent chains never cross country boundaries, so peers are per country.
pub struct HierarchyResolver<'a> {
    country: &'a str,
    by_code: HashMap<&'a str, &'a Subdivision>,
}

impl<'a> HierarchyResolver<'a> {
    pub fn new(country: &'a str, peers: &'a [Subdivision]) -> Self {
        let by_code = peers.iter().map(|s| (s.code.as_str(), s)).collect();
        Self { country, by_code }
    }

    /// Walks the parent chain iteratively. A visited set bounds the walk:
    /// a chain that revisits a code is reported as [`Depth::Cyclic`].
    pub fn depth(&self, subdivision: &Subdivision) -> Depth {
        let mut visited: HashSet<&str> = HashSet::new();
        visited.insert(subdivision.code.as_str());

        let mut current = subdivision;
        let mut hops = 0;
        loop {
            if current.parent == self.country {
                return Depth::Resolved(hops + 1);
            }
            let Some(parent) = self.by_code.get(current.parent.as_str()).copied() else {
                return Depth::Orphaned(hops);
            };
            if !visited.insert(parent.code.as_str()) {
                return Depth::Cyclic;
            }
            hops += 1;
            current = parent;
        }
    }

    /// Same as [`Self::depth`], recording malformed chains in the report.
    pub fn level(&self, subdivision: &Subdivision, report: &mut RunReport) -> usize {
        let depth = self.depth(subdivision);
        match depth {
            Depth::Resolved(_) => {}
            Depth::Orphaned(hops) => report.record(Issue::UnresolvableReference {
                code: subdivision.code.clone(),
                detail: format!(
                    "parent chain breaks after {} hop(s) without reaching {}",
                    hops, self.country
                ),
            }),
            Depth::Cyclic => report.record(Issue::CyclicHierarchy {
                code: subdivision.code.clone(),
                country: self.country.to_string(),
            }),
        }
        depth.level()
    }
}
