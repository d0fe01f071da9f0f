pub mod algorithm;

mod decompose;
#[cfg(test)]
mod prop_tests;

pub use algorithm::{check_completeness, check_completeness_within};

use crate::model::Signature;
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Clone, Error, PartialEq, Eq, Debug)]
pub enum CompletenessError {
    #[error("implementation {index} has {found} parameters, expected {expected}")]
    ArityMismatch { index: usize, expected: usize, found: usize },
    #[error("no fixpoint reached after {rounds} rounds")]
    RoundLimit { rounds: usize },
}

pub type Result<T> = std::result::Result<T, CompletenessError>;

/// Sub-regions of an interface that no implementation accepts.
pub type Leaves = BTreeSet<Signature>;
