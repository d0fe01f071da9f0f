use super::{TypeSet, TypeTag};
use derive_more::derive::Deref;
use std::fmt::Display;

/// The argument tuples accepted by an interface or implementation: one [`TypeSet`] per parameter.
///
/// Binary operations require both signatures to have the same arity and panic otherwise.
#[derive(Default, Deref, Hash, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Signature(Vec<TypeSet>);

impl FromIterator<TypeSet> for Signature {
    fn from_iter<I: IntoIterator<Item = TypeSet>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parameters = self.iter().map(ToString::to_string).collect::<Vec<_>>();
        write!(f, "({})", parameters.join(", "))
    }
}

impl Signature {
    pub fn new(parameters: impl IntoIterator<Item: Into<TypeSet>>) -> Self {
        parameters.into_iter().map(Into::into).collect()
    }

    pub fn arity(&self) -> usize {
        self.0.len()
    }

    pub fn parameters(&self) -> &[TypeSet] {
        &self.0
    }

    /// Whether some argument tuple matches every position at once.
    pub fn is_inhabited(&self) -> bool {
        self.iter().all(|p| !p.is_empty())
    }

    /// Whether some argument tuple matches both signatures.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.zip(other).all(|(p1, p2)| p1.intersects(p2))
    }

    pub fn intersection(&self, other: &Self) -> Self {
        self.zip(other).map(|(p1, p2)| p1.intersection(p2)).collect()
    }

    /// The tags of each position that `other` rejects at that same position.
    ///
    /// This is not the difference of the two regions, only a building block for it.
    pub fn positional_difference(&self, other: &Self) -> Self {
        self.zip(other).map(|(p1, p2)| p1.difference(p2)).collect()
    }

    /// Whether the tuple `arguments` lies in the region of `self`.
    pub fn accepts(&self, arguments: &[TypeTag]) -> bool {
        assert_eq!(self.arity(), arguments.len(), "arity mismatch");
        self.iter().zip(arguments).all(|(p, t)| p.contains(t))
    }

    fn zip<'a>(&'a self, other: &'a Self) -> impl Iterator<Item = (&'a TypeSet, &'a TypeSet)> {
        assert_eq!(self.arity(), other.arity(), "arity mismatch between {self} and {other}");
        self.iter().zip(other.iter())
    }
}
