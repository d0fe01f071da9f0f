use crate::model::Signature;

/// Splits the part of `s` that `i` rejects into sub-signatures.
///
/// Each residual keeps the overlap with `i` everywhere except on a non-empty subset of the
/// positions where `i` falls short of `s`, where it takes the leftover tags instead. The residuals
/// may overlap each other but together cover exactly `s \ i`.
///
/// Returns `None` if `s` and `i` do not overlap.
pub fn residuals(s: &Signature, i: &Signature) -> Option<Vec<Signature>> {
    if !s.overlaps(i) {
        return None;
    }
    let matched = s.intersection(i);
    let deficient = s.positional_difference(i);
    let deviating = (0..deficient.arity())
        .filter(|&k| !deficient[k].is_empty())
        .collect::<Vec<_>>();
    let residuals = (powerset(&deviating).into_iter())
        .filter(|variant| !variant.is_empty())
        .map(|variant| {
            (0..matched.arity())
                .map(|k| {
                    if variant.contains(&k) {
                        deficient[k].clone()
                    } else {
                        matched[k].clone()
                    }
                })
                .collect::<Signature>()
        })
        .collect::<Vec<_>>();
    Some(residuals)
}

fn powerset<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    match items.split_first() {
        None => vec![Vec::new()],
        Some((head, tail)) => (powerset(tail).into_iter())
            .flat_map(|subset| {
                let mut with_head = Vec::with_capacity(subset.len() + 1);
                with_head.push(head.clone());
                with_head.extend(subset.iter().cloned());
                [subset, with_head]
            })
            .collect(),
    }
}
