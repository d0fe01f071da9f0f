use crate::completeness::{self, CompletenessError, Leaves};
use crate::model::Signature;
use crate::parser::Item;
use std::collections::HashMap;
use std::fmt::Display;
use thiserror::Error;

/// An interface together with the implementations declared for it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct OverloadSet {
    pub name: String,
    pub interface: Signature,
    pub implementations: Vec<Signature>,
}

/// The overload sets of a source file, in declaration order of their interfaces.
#[derive(Default, Clone, PartialEq, Eq, Debug)]
pub struct Program {
    overload_sets: Vec<OverloadSet>,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Report {
    pub name: String,
    pub interface: Signature,
    pub leaves: Leaves,
}

#[derive(Clone, Error, PartialEq, Eq, Debug)]
pub enum ProgramError {
    #[error("duplicate interface '{0}'")]
    DuplicateInterface(String),
    #[error("implementation of unknown interface '{0}'")]
    UnknownInterface(String),
    #[error("cannot check interface '{0}'")]
    Completeness(String, #[source] CompletenessError),
}

pub type Result<T> = std::result::Result<T, ProgramError>;

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_complete() {
            return write!(f, "{}: complete", self.name);
        }
        write!(f, "{}: incomplete", self.name)?;
        for leaf in &self.leaves {
            write!(f, "\n  missing {leaf}")?;
        }
        Ok(())
    }
}

impl Report {
    pub fn is_complete(&self) -> bool {
        self.leaves.is_empty()
    }
}

impl Program {
    pub fn new(items: impl IntoIterator<Item = Item>) -> Result<Self> {
        let mut overload_sets = Vec::new();
        let mut indices = HashMap::new();
        let mut implementations = Vec::new();
        for item in items {
            match item {
                Item::Interface(name, interface) => {
                    if indices.contains_key(&name) {
                        return Err(ProgramError::DuplicateInterface(name));
                    }
                    indices.insert(name.clone(), overload_sets.len());
                    overload_sets.push(OverloadSet {
                        name,
                        interface,
                        implementations: Vec::new(),
                    });
                }
                Item::Implementation(name, s) => implementations.push((name, s)),
            }
        }
        for (name, s) in implementations {
            let Some(&index) = indices.get(&name) else {
                return Err(ProgramError::UnknownInterface(name));
            };
            overload_sets[index].implementations.push(s);
        }
        Ok(Self { overload_sets })
    }

    pub fn overload_sets(&self) -> &[OverloadSet] {
        &self.overload_sets
    }

    pub fn check(&self, max_rounds: Option<usize>) -> Result<Vec<Report>> {
        (self.overload_sets.iter())
            .map(|set| {
                let leaves = completeness::check_completeness_within(&set.interface, &set.implementations, max_rounds)
                    .map_err(|e| ProgramError::Completeness(set.name.clone(), e))?;
                Ok(Report {
                    name: set.name.clone(),
                    interface: set.interface.clone(),
                    leaves,
                })
            })
            .collect()
    }
}
