mod signature;
mod tag;
mod type_set;

pub use signature::Signature;
pub use tag::TypeTag;
pub use type_set::TypeSet;
