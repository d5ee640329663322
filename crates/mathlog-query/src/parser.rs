//! Predicate parser using nom
//!
//! Grammar:
//! ```text
//! expr       := or_expr
//! or_expr    := and_expr ('||' and_expr)*
//! and_expr   := not_expr ('&&' not_expr)*
//! not_expr   := '!' not_expr | atom
//! atom       := 'all' | 'none' | '(' expr ')' | comparison
//! comparison := field op literal
//! op         := '<' | '<=' | '>' | '>=' | '==' | '!='
//! literal    := number | 'true' | 'false' | quoted string
//! ```

use crate::ast::*;
use crate::eval::{check, EvalError};
use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_while, take_while1},
    character::complete::{char, multispace0},
    combinator::{map, recognize, value},
    error::ErrorKind,
    multi::many0,
    number::complete::double,
    sequence::{delimited, pair, preceded},
    IResult,
};
use thiserror::Error;

/// Parse errors
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unknown field at '{0}'")]
    UnknownField(String),

    #[error("Invalid expression: {0}")]
    InvalidExpression(#[from] EvalError),
}

/// Parse and type-check a predicate. An empty string selects every row.
pub fn parse_predicate(input: &str) -> Result<Predicate, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Predicate::All);
    }

    let predicate = match expr(input) {
        Ok(("", result)) => result,
        Ok((remaining, _)) => {
            return Err(ParseError::Parse(format!(
                "Unexpected characters at end: '{}'",
                remaining
            )))
        }
        Err(nom::Err::Failure(e)) if e.code == ErrorKind::Verify => {
            return Err(ParseError::UnknownField(e.input.to_string()))
        }
        Err(e) => return Err(ParseError::Parse(format!("{:?}", e))),
    };

    check(&predicate)?;
    Ok(predicate)
}

/// Parse whitespace
fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, inner, multispace0)
}

/// Parse an expression (entry point)
fn expr(input: &str) -> IResult<&str, Predicate> {
    or_expr(input)
}

/// Parse OR expressions
fn or_expr(input: &str) -> IResult<&str, Predicate> {
    let (input, first) = and_expr(input)?;
    let (input, rest) = many0(preceded(ws(tag("||")), and_expr))(input)?;

    let result = rest.into_iter().fold(first, Predicate::or);
    Ok((input, result))
}

/// Parse AND expressions
fn and_expr(input: &str) -> IResult<&str, Predicate> {
    let (input, first) = not_expr(input)?;
    let (input, rest) = many0(preceded(ws(tag("&&")), not_expr))(input)?;

    let result = rest.into_iter().fold(first, Predicate::and);
    Ok((input, result))
}

/// Parse NOT expressions
fn not_expr(input: &str) -> IResult<&str, Predicate> {
    alt((
        map(preceded(ws(char('!')), not_expr), Predicate::not),
        atom,
    ))(input)
}

/// Parse atomic expressions
fn atom(input: &str) -> IResult<&str, Predicate> {
    ws(alt((
        value(Predicate::All, keyword("all")),
        value(Predicate::None, keyword("none")),
        delimited(char('('), expr, char(')')),
        map(comparison, Predicate::Comparison),
    )))(input)
}

/// A bare word that is not the prefix of a longer identifier
fn keyword<'a>(word: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    move |input: &'a str| {
        let (rest, ident) = identifier(input)?;
        if ident == word {
            Ok((rest, ident))
        } else {
            Err(nom::Err::Error(nom::error::Error::new(input, ErrorKind::Tag)))
        }
    }
}

/// Parse a comparison
fn comparison(input: &str) -> IResult<&str, Comparison> {
    let (rest, name) = identifier(input)?;
    let field = Field::from_name(name).ok_or_else(|| {
        nom::Err::Failure(nom::error::Error::new(input, ErrorKind::Verify))
    })?;
    let (rest, op) = ws(comparison_op)(rest)?;
    let (rest, literal) = parse_literal(rest)?;
    Ok((rest, Comparison::new(field, op, literal)))
}

/// Parse a comparison operator
fn comparison_op(input: &str) -> IResult<&str, ComparisonOp> {
    alt((
        value(ComparisonOp::Le, tag("<=")),
        value(ComparisonOp::Ge, tag(">=")),
        value(ComparisonOp::Eq, tag("==")),
        value(ComparisonOp::Ne, tag("!=")),
        value(ComparisonOp::Lt, tag("<")),
        value(ComparisonOp::Gt, tag(">")),
    ))(input)
}

/// Parse a literal
fn parse_literal(input: &str) -> IResult<&str, Literal> {
    alt((
        value(Literal::Bool(true), tag_no_case("true")),
        value(Literal::Bool(false), tag_no_case("false")),
        map(string_literal, |s| Literal::Text(s.to_string())),
        map(double, Literal::Number),
    ))(input)
}

/// Parse an identifier (starts with letter or underscore, followed by alphanumeric or underscore)
fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        take_while1(|c: char| c.is_alphabetic() || c == '_'),
        take_while(|c: char| c.is_alphanumeric() || c == '_'),
    ))(input)
}

/// Parse a string literal
fn string_literal(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('"'), take_while(|c| c != '"'), char('"')),
        delimited(char('\''), take_while(|c| c != '\''), char('\'')),
    ))(input)
}
