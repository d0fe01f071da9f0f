use super::TypeTag;
use std::collections::{btree_set, BTreeSet};
use std::fmt::Display;

/// The tags accepted at one parameter position.
///
/// Never contains a [`TypeTag::Union`]: unions are flattened into their members on insert.
#[derive(Default, Hash, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct TypeSet {
    elements: BTreeSet<TypeTag>,
}

impl FromIterator<TypeTag> for TypeSet {
    fn from_iter<I: IntoIterator<Item = TypeTag>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<TypeTag> for TypeSet {
    fn extend<I: IntoIterator<Item = TypeTag>>(&mut self, iter: I) {
        iter.into_iter().for_each(|t| self.insert(t));
    }
}

impl From<TypeTag> for TypeSet {
    fn from(value: TypeTag) -> Self {
        Self::from_iter([value])
    }
}

impl<'a> IntoIterator for &'a TypeSet {
    type Item = &'a TypeTag;
    type IntoIter = btree_set::Iter<'a, TypeTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl Display for TypeSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return "⊥".fmt(f);
        }
        let elements = self.iter().map(ToString::to_string).collect::<Vec<_>>();
        write!(f, "{}", elements.join(" | "))
    }
}

impl TypeSet {
    pub fn new() -> Self {
        Self {
            elements: BTreeSet::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, TypeTag> {
        self.elements.iter()
    }

    pub fn contains(&self, tag: &TypeTag) -> bool {
        self.elements.contains(tag)
    }

    /// Whether some tag is present in both sets, without building the intersection.
    pub fn intersects(&self, other: &Self) -> bool {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.iter().any(|t| large.contains(t))
    }

    pub fn intersection(&self, other: &Self) -> Self {
        Self {
            elements: self.elements.intersection(&other.elements).cloned().collect(),
        }
    }

    /// The tags of `self` that do not occur in `other`.
    pub fn difference(&self, other: &Self) -> Self {
        Self {
            elements: self.elements.difference(&other.elements).cloned().collect(),
        }
    }

    pub fn insert(&mut self, tag: TypeTag) {
        match tag {
            TypeTag::Union(members) => members.into_iter().for_each(|t| self.insert(t)),
            tag @ TypeTag::Named(..) => {
                self.elements.insert(tag);
            }
        }
    }
}
