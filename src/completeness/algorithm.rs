use super::{decompose, CompletenessError, Leaves, Result};
use crate::model::Signature;
use std::collections::HashSet;

enum Step {
    Covered,
    Leaf,
    Successors(HashSet<Signature>),
}

/// Returns the parts of `interface` that are accepted by none of `implementations`.
///
/// An empty result means the implementations cover every argument tuple of the interface.
pub fn check_completeness(interface: &Signature, implementations: &[Signature]) -> Result<Leaves> {
    check_completeness_within(interface, implementations, None)
}

/// Like [`check_completeness`], but gives up with [`CompletenessError::RoundLimit`] once
/// `max_rounds` rounds have run without reaching the fixpoint.
#[tracing::instrument(skip_all, fields(%interface, implementations = implementations.len()))]
pub fn check_completeness_within(
    interface: &Signature,
    implementations: &[Signature],
    max_rounds: Option<usize>,
) -> Result<Leaves> {
    if let Some((index, i)) = (implementations.iter().enumerate()).find(|(_, i)| i.arity() != interface.arity()) {
        return Err(CompletenessError::ArityMismatch {
            index,
            expected: interface.arity(),
            found: i.arity(),
        });
    }

    let mut leaves = Leaves::new();
    if !interface.is_inhabited() {
        tracing::debug!("interface is uninhabited");
        return Ok(leaves);
    }

    let mut frontier = HashSet::from([interface.clone()]);
    let mut visited = frontier.clone();
    let mut rounds = 0;
    while !frontier.is_empty() {
        if max_rounds.is_some_and(|max| rounds >= max) {
            return Err(CompletenessError::RoundLimit { rounds });
        }
        rounds += 1;

        let mut next = HashSet::new();
        for s in &frontier {
            match step(s, implementations, &visited) {
                Step::Covered => tracing::trace!(%s, "covered"),
                Step::Leaf => {
                    tracing::trace!(%s, "leaf");
                    leaves.insert(s.clone());
                }
                Step::Successors(successors) => next.extend(successors),
            }
        }

        debug_assert!(next.is_disjoint(&visited), "successor already visited");
        tracing::trace!(round = rounds, frontier = next.len(), leaves = leaves.len());
        visited.extend(next.iter().cloned());
        frontier = next;
    }

    tracing::debug!(rounds, visited = visited.len(), leaves = leaves.len(), "fixpoint reached");
    Ok(leaves)
}

fn step(s: &Signature, implementations: &[Signature], visited: &HashSet<Signature>) -> Step {
    let mut successors = HashSet::new();
    for i in implementations {
        if s == i {
            return Step::Covered;
        }
        let Some(residuals) = decompose::residuals(s, i) else {
            continue;
        };
        if let Some(t) = residuals.iter().find(|t| !t.is_inhabited()) {
            debug_assert!(false, "uninhabited residual {t} of {s} under {i}");
            tracing::error!(%s, %i, %t, "uninhabited residual, keeping signature as a leaf");
            return Step::Leaf;
        }
        let candidates = (residuals.into_iter())
            .filter(|t| !visited.contains(t))
            .collect::<Vec<_>>();
        if candidates.is_empty() {
            return Step::Covered;
        }
        successors.extend(candidates);
    }
    if successors.is_empty() {
        Step::Leaf
    } else {
        Step::Successors(successors)
    }
}
