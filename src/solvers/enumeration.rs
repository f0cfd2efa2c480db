//! Enumeration of the candidate sets of arguments.
//!
//! Extensions are searched in the power set of the (declared) arguments of a framework.
//! This search is exponential in the number of arguments: a framework with `n` arguments has `2^n` candidate sets.
//! Two strategies are available:
//!
//! * [`EnumerationStrategy::PowerSet`] considers each of the `2^n` candidates, by increasing size, and by lexicographic order of the labels for a given size;
//! * [`EnumerationStrategy::ConflictFree`] grows conflict-free sets depth-first and never considers a superset of a set with an internal attack.
//!
//! Since both complete and stable extensions are conflict-free, the two strategies return the same extensions.
//! Whatever the strategy and the number of threads, the returned sets are sorted by [`sort_canonically`].

use crate::aa::{AAFramework, ArgumentSubset, LabelType};
use anyhow::{anyhow, Result};
use log::{debug, warn};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum_macros::{AsRefStr, EnumIter, IntoStaticStr};

/// The strategies used to enumerate candidate sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr, EnumIter, IntoStaticStr)]
pub enum EnumerationStrategy {
    /// Considers every subset of the arguments.
    #[strum(serialize = "power-set")]
    PowerSet,
    /// Considers the conflict-free subsets of the arguments only.
    #[default]
    #[strum(serialize = "conflict-free")]
    ConflictFree,
}

impl TryFrom<&str> for EnumerationStrategy {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "power-set" => Ok(EnumerationStrategy::PowerSet),
            "conflict-free" => Ok(EnumerationStrategy::ConflictFree),
            _ => Err(anyhow!(r#"undefined enumeration strategy "{}""#, value)),
        }
    }
}

/// The options of an enumeration.
///
/// When `n_threads` is greater than one, candidate sets are checked on a dedicated thread pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumerationOptions {
    /// the strategy used to produce candidate sets
    pub strategy: EnumerationStrategy,
    /// the number of threads used to check candidate sets
    pub n_threads: usize,
}

impl Default for EnumerationOptions {
    fn default() -> Self {
        Self {
            strategy: EnumerationStrategy::default(),
            n_threads: 1,
        }
    }
}

/// Returns the ids of the declared arguments of a framework, sorted by their labels.
fn sorted_domain<T>(af: &AAFramework<T>) -> Vec<usize>
where
    T: LabelType,
{
    let mut args = af.argument_set().iter().collect::<Vec<_>>();
    args.sort_unstable_by(|a, b| a.label().cmp(b.label()));
    args.iter().map(|a| a.id()).collect()
}

/// Iterates over all the subsets of a domain, by increasing size.
///
/// Subsets of the same size are given in lexicographic order of the positions of their members in the domain.
struct PowerSetCandidates {
    domain: Vec<usize>,
    n_ids: usize,
    positions: Option<Vec<usize>>,
}

impl PowerSetCandidates {
    fn new(domain: Vec<usize>, n_ids: usize) -> Self {
        Self {
            domain,
            n_ids,
            positions: Some(vec![]),
        }
    }
}

fn next_combination(mut positions: Vec<usize>, n: usize) -> Option<Vec<usize>> {
    let k = positions.len();
    match (0..k).rev().find(|i| positions[*i] < n - k + i) {
        Some(i) => {
            positions[i] += 1;
            for j in i + 1..k {
                positions[j] = positions[j - 1] + 1;
            }
            Some(positions)
        }
        None if k < n => Some((0..=k).collect()),
        None => None,
    }
}

impl Iterator for PowerSetCandidates {
    type Item = ArgumentSubset;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.positions.take()?;
        let subset = ArgumentSubset::from_ids(self.n_ids, current.iter().map(|p| self.domain[*p]));
        self.positions = next_combination(current, self.domain.len());
        Some(subset)
    }
}

/// Iterates over the conflict-free subsets of a domain, depth-first.
///
/// An argument is added to the current set only if it does not conflict with it,
/// so no superset of a conflicting set is ever produced.
struct ConflictFreeCandidates<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    domain: Vec<usize>,
    stack: Vec<usize>,
    current: ArgumentSubset,
    started: bool,
    done: bool,
}

impl<'a, T> ConflictFreeCandidates<'a, T>
where
    T: LabelType,
{
    fn new(af: &'a AAFramework<T>, domain: Vec<usize>) -> Self {
        Self {
            af,
            domain,
            stack: vec![],
            current: ArgumentSubset::new(af.argument_set().n_ids()),
            started: false,
            done: false,
        }
    }

    fn is_compatible(&self, id: usize) -> bool {
        self.af
            .attacked_ids_from(id)
            .iter()
            .all(|t| *t != id && !self.current.contains(*t))
            && self
                .af
                .attacker_ids_of(id)
                .iter()
                .all(|a| !self.current.contains(*a))
    }

    fn first_compatible(&self, from: usize) -> Option<usize> {
        (from..self.domain.len()).find(|p| self.is_compatible(self.domain[*p]))
    }
}

impl<T> Iterator for ConflictFreeCandidates<'_, T>
where
    T: LabelType,
{
    type Item = ArgumentSubset;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.current.clone());
        }
        let mut from = self.stack.last().map_or(0, |p| p + 1);
        loop {
            if let Some(p) = self.first_compatible(from) {
                self.stack.push(p);
                self.current.insert(self.domain[p]);
                return Some(self.current.clone());
            }
            match self.stack.pop() {
                Some(p) => {
                    self.current.remove(self.domain[p]);
                    from = p + 1;
                }
                None => {
                    self.done = true;
                    return None;
                }
            }
        }
    }
}

fn candidates<'a, T>(
    af: &'a AAFramework<T>,
    strategy: EnumerationStrategy,
) -> Box<dyn Iterator<Item = ArgumentSubset> + Send + 'a>
where
    T: LabelType,
{
    let domain = sorted_domain(af);
    match strategy {
        EnumerationStrategy::PowerSet => {
            Box::new(PowerSetCandidates::new(domain, af.argument_set().n_ids()))
        }
        EnumerationStrategy::ConflictFree => Box::new(ConflictFreeCandidates::new(af, domain)),
    }
}

/// Sorts sets of arguments by increasing size, then by lexicographic order of their sorted labels.
///
/// Duplicates are removed.
pub fn sort_canonically<T>(af: &AAFramework<T>, sets: &mut Vec<ArgumentSubset>)
where
    T: LabelType,
{
    sets.sort_by_cached_key(|s| {
        let labels = af
            .subset_arguments(s)
            .into_iter()
            .map(|a| a.label())
            .collect::<Vec<&T>>();
        (s.len(), labels)
    });
    sets.dedup();
}

/// Returns the candidate sets satisfying the predicate, sorted by [`sort_canonically`].
///
/// The candidate sets are the subsets of the declared arguments of the framework produced by the strategy;
/// the predicate must hold for no set the strategy skips.
pub fn enumerate<T, P>(
    af: &AAFramework<T>,
    options: &EnumerationOptions,
    predicate: P,
) -> Vec<ArgumentSubset>
where
    T: LabelType,
    P: Fn(&ArgumentSubset) -> bool + Send + Sync,
{
    debug!(
        "enumerating the sets of {} argument(s) with the {} strategy",
        af.n_arguments(),
        options.strategy.as_ref()
    );
    let n_candidates = AtomicUsize::new(0);
    let check = |c: &ArgumentSubset| {
        n_candidates.fetch_add(1, Ordering::Relaxed);
        predicate(c)
    };
    let mut accepted = if options.n_threads > 1 {
        match rayon::ThreadPoolBuilder::new()
            .num_threads(options.n_threads)
            .build()
        {
            Ok(pool) => {
                debug!("checking candidates on {} threads", options.n_threads);
                pool.install(|| {
                    candidates(af, options.strategy)
                        .par_bridge()
                        .filter(|c| check(c))
                        .collect::<Vec<ArgumentSubset>>()
                })
            }
            Err(e) => {
                warn!("cannot build a thread pool ({}); checking candidates sequentially", e);
                candidates(af, options.strategy)
                    .filter(|c| check(c))
                    .collect()
            }
        }
    } else {
        candidates(af, options.strategy)
            .filter(|c| check(c))
            .collect()
    };
    sort_canonically(af, &mut accepted);
    debug!(
        "{} candidate(s) checked, {} accepted",
        n_candidates.load(Ordering::Relaxed),
        accepted.len()
    );
    accepted
}
