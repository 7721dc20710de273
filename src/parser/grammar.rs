//! Path data parser using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::error::PathDataError;
use crate::geometry::Point;
use crate::parser::lexer::{lex, Token};
use crate::path::{Path, PathCommand};

/// Parse an SVG path `d` string into a [`Path`].
///
/// Only absolute `M`, `L`, `Q` and `C` commands are accepted, each with its
/// full list of coordinates. An empty (or whitespace-only) string is an
/// empty path.
pub fn parse_path_data(input: &str) -> Result<Path, Vec<PathDataError>> {
    let len = input.len();

    let mut tokens = Vec::new();
    let mut lex_errors = Vec::new();
    for (tok, span) in lex(input) {
        match tok {
            Ok(t) => tokens.push((t, SimpleSpan::from(span))),
            Err(()) => lex_errors.push(PathDataError::invalid_token(input, span)),
        }
    }
    if !lex_errors.is_empty() {
        return Err(lex_errors);
    }

    // Turn the token list into a stream that chumsky can use
    let token_stream = Stream::from_iter(tokens)
        // Split (Token, SimpleSpan) into token and span parts
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    path_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect())
}

fn path_parser<'a, I>() -> impl Parser<'a, I, Path, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let number = select! {
        Token::Number(n) => n,
    };

    let point = number
        .clone()
        .then(number)
        .map(|(x, y)| Point::new(x, y));

    let move_to = just(Token::MoveTo)
        .ignore_then(point.clone())
        .map(PathCommand::MoveTo);

    let line_to = just(Token::LineTo)
        .ignore_then(point.clone())
        .map(PathCommand::LineTo);

    let quad_to = just(Token::QuadTo)
        .ignore_then(point.clone())
        .then(point.clone())
        .map(|(control, end)| PathCommand::QuadraticTo { control, end });

    let cubic_to = just(Token::CubicTo)
        .ignore_then(point.clone())
        .then(point.clone())
        .then(point)
        .map(|((control1, control2), end)| PathCommand::CubicTo {
            control1,
            control2,
            end,
        });

    let command = choice((move_to.clone(), line_to, quad_to, cubic_to));

    // A path must open with a move; later moves start new subpaths
    move_to
        .then(command.repeated().collect::<Vec<_>>())
        .or_not()
        .then_ignore(end())
        .map(|parsed| match parsed {
            Some((first, rest)) => {
                let mut commands = Vec::with_capacity(rest.len() + 1);
                commands.push(first);
                commands.extend(rest);
                Path::from_commands(commands)
            }
            None => Path::empty(),
        })
}
