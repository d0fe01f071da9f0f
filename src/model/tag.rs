use std::fmt::Display;

/// An already-resolved type identity, compared structurally.
#[derive(Hash, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum TypeTag {
    /// A type name with its arguments, if any (e.g. `A<B, C>`).
    Named(String, Vec<TypeTag>),
    /// An alternation of several tags (e.g. `A | B<C>`).
    ///
    /// Only meaningful at the boundary of a [`TypeSet`](super::TypeSet), which flattens it on insert.
    Union(Vec<TypeTag>),
}

impl From<&str> for TypeTag {
    fn from(value: &str) -> Self {
        Self::named(value)
    }
}

impl From<String> for TypeTag {
    fn from(value: String) -> Self {
        Self::Named(value, Vec::new())
    }
}

impl Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(name, arguments) if arguments.is_empty() => name.fmt(f),
            Self::Named(name, arguments) => {
                let arguments = arguments.iter().map(ToString::to_string).collect::<Vec<_>>();
                write!(f, "{name}<{}>", arguments.join(", "))
            }
            Self::Union(members) if members.is_empty() => "⊥".fmt(f),
            Self::Union(members) => {
                let members = (members.iter())
                    .map(|t| match t {
                        Self::Union(inner) if inner.len() > 1 => format!("({t})"),
                        _ => t.to_string(),
                    })
                    .collect::<Vec<_>>();
                write!(f, "{}", members.join(" | "))
            }
        }
    }
}

impl TypeTag {
    pub fn new(name: impl Into<String>, arguments: impl IntoIterator<Item: Into<TypeTag>>) -> Self {
        Self::Named(name.into(), arguments.into_iter().map(Into::into).collect())
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into(), Vec::new())
    }

    pub fn union(members: impl IntoIterator<Item: Into<TypeTag>>) -> Self {
        Self::Union(members.into_iter().map(Into::into).collect())
    }
}
