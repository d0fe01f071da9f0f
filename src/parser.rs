use crate::lexer::{self, LexError, Token};
use crate::model::{Signature, TypeSet, TypeTag};
use chumsky::prelude::*;
use std::fmt::Display;
use thiserror::Error;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Item {
    Interface(String, Signature),
    Implementation(String, Signature),
}

#[derive(Error, Clone, PartialEq, Debug)]
pub enum SyntaxError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("parse error: {}", .0.join("; "))]
    Parse(Vec<String>),
}

impl Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Interface(name, s) => write!(f, "interface {name} {s}"),
            Self::Implementation(name, s) => write!(f, "impl {name} {s}"),
        }
    }
}

pub fn parse_source(source: &str) -> Result<Vec<Item>, SyntaxError> {
    let tokens = lexer::lex(source)?;
    parse(&tokens).map_err(|errors| {
        let errors = (errors.into_iter())
            .map(|e| format!("{e} at token {}", e.span().start))
            .collect();
        SyntaxError::Parse(errors)
    })
}

pub fn parse<'a>(tokens: &[Token<'a>]) -> Result<Vec<Item>, Vec<Simple<Token<'a>>>> {
    items_parser().parse(tokens)
}

fn items_parser<'a>() -> impl Parser<Token<'a>, Vec<Item>, Error = Simple<Token<'a>>> {
    let interface_parser = just(Token::Interface)
        .ignore_then(ident_parser())
        .then(signature_parser())
        .map(|(name, s)| Item::Interface(name, s));

    let impl_parser = just(Token::Impl)
        .ignore_then(ident_parser())
        .then(signature_parser())
        .map(|(name, s)| Item::Implementation(name, s));

    interface_parser.or(impl_parser).repeated().then_ignore(end())
}

fn ident_parser<'a>() -> impl Parser<Token<'a>, String, Error = Simple<Token<'a>>> + Clone {
    select! { Token::Ident(x) => x.to_owned() }
}

fn signature_parser<'a>() -> impl Parser<Token<'a>, Signature, Error = Simple<Token<'a>>> + Clone {
    parameter_parser()
        .separated_by(just(Token::Comma))
        .delimited_by(just(Token::LeftParen), just(Token::RightParen))
        .map(Signature::new)
}

/// One or more types separated by `|`, flattened into the set of a single position.
fn parameter_parser<'a>() -> impl Parser<Token<'a>, TypeSet, Error = Simple<Token<'a>>> + Clone {
    type_parser()
        .separated_by(just(Token::Union))
        .at_least(1)
        .map(|members| TypeSet::from(TypeTag::Union(members)))
}

fn type_parser<'a>() -> impl Parser<Token<'a>, TypeTag, Error = Simple<Token<'a>>> + Clone {
    recursive(|type_parser| {
        let arguments_parser = type_parser
            .separated_by(just(Token::Comma))
            .at_least(1)
            .delimited_by(just(Token::LeftAngle), just(Token::RightAngle));

        ident_parser()
            .then(arguments_parser.or_not())
            .map(|(name, arguments)| TypeTag::Named(name, arguments.unwrap_or_default()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(tags: &[&str]) -> TypeSet {
        tags.iter().copied().map(TypeTag::from).collect()
    }

    #[test]
    fn interface_and_implementations() {
        let items = parse_source(
            "# equality\n\
             interface Eq (X | Y, X | Y)\n\
             impl Eq (X, X | Y)\n\
             impl Eq (Y, Y)\n",
        )
        .unwrap();
        assert_eq!(
            items,
            vec![
                Item::Interface("Eq".to_owned(), Signature::new([set(&["X", "Y"]), set(&["X", "Y"])])),
                Item::Implementation("Eq".to_owned(), Signature::new([set(&["X"]), set(&["X", "Y"])])),
                Item::Implementation("Eq".to_owned(), Signature::new([set(&["Y"]), set(&["Y"])])),
            ]
        );
    }

    #[test]
    fn parametric_types() {
        let items = parse_source("interface Show (List<Int> | List<Bool> | Map<K, List<V>>)").unwrap();
        let [Item::Interface(_, s)] = items.as_slice() else {
            panic!("expected one interface, found {items:?}");
        };
        let expected = TypeSet::from_iter([
            TypeTag::new("List", ["Int"]),
            TypeTag::new("List", ["Bool"]),
            TypeTag::new("Map", [TypeTag::named("K"), TypeTag::new("List", ["V"])]),
        ]);
        assert_eq!(s.parameters(), &[expected]);
    }

    #[test]
    fn union_members_are_deduplicated() {
        let items = parse_source("impl F (A | B | A)").unwrap();
        assert_eq!(items, vec![Item::Implementation("F".to_owned(), Signature::new([set(&["A", "B"])]))]);
    }

    #[test]
    fn nullary_signature() {
        let items = parse_source("interface Unit ()").unwrap();
        assert_eq!(items, vec![Item::Interface("Unit".to_owned(), Signature::default())]);
    }

    #[test]
    fn display_round_trips() {
        let source = "interface Eq (X | Y, List<X>)";
        let items = parse_source(source).unwrap();
        assert_eq!(items[0].to_string(), "interface Eq (X | Y, List<X>)");
        assert_eq!(parse_source(&items[0].to_string()).unwrap(), items);
    }

    #[test]
    fn errors() {
        assert!(matches!(parse_source("impl F (A,)"), Err(SyntaxError::Parse(_))));
        assert!(matches!(parse_source("impl (A)"), Err(SyntaxError::Parse(_))));
        assert!(matches!(parse_source("impl F (A | )"), Err(SyntaxError::Parse(_))));
        assert!(matches!(parse_source("interface F (A) extra"), Err(SyntaxError::Parse(_))));
        assert!(matches!(parse_source("impl F (A & B)"), Err(SyntaxError::Lex(_))));
    }
}
