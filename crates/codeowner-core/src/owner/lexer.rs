//! nom-based lexer for owner handles.

use nom::{
    IResult, Parser,
    bytes::complete::take_while1,
    character::complete::char,
    combinator::{all_consuming, recognize},
};

/// Characters allowed after the leading `@` of a handle.
///
/// `/` separates organization and team, and a further `@` is tolerated.
fn is_handle_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '/' | '@')
}

/// Parses a complete owner handle, returning the recognised text.
///
/// The whole input must be consumed: `@` followed by at least one handle
/// character. This makes a lone `@` invalid.
fn parse_owner(input: &str) -> IResult<&str, &str> {
    all_consuming(recognize((char('@'), take_while1(is_handle_char)))).parse(input)
}

/// Returns true if `token` is a valid owner handle.
pub fn is_valid_owner(token: &str) -> bool {
    parse_owner(token).is_ok()
}
