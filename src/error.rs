//! Error types for path data parsing

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::parser::lexer::Token;
use crate::parser::Span;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathDataError {
    #[error("Path data error at {span:?}: {message}")]
    Syntax {
        span: Span,
        message: String,
        expected: Vec<String>,
    },
}

impl PathDataError {
    /// Error for input the lexer rejected: a character that starts no
    /// token, or a number too large to be finite
    pub fn invalid_token(source: &str, span: Span) -> Self {
        let found = source.get(span.clone()).unwrap_or("?");
        let message = if found.parse::<f64>().is_ok() {
            format!("Number '{}' is out of range", found)
        } else {
            format!("Unexpected character '{}'", found)
        };
        PathDataError::Syntax {
            span,
            message,
            expected: vec![],
        }
    }

    /// Byte range the error points at
    pub fn span(&self) -> &Span {
        match self {
            PathDataError::Syntax { span, .. } => span,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        match self {
            PathDataError::Syntax {
                span,
                message,
                expected,
            } => {
                let expected_str = if expected.is_empty() {
                    String::new()
                } else {
                    format!("\nExpected: {}", expected.join(", "))
                };

                let written = Report::build(ReportKind::Error, filename, span.start)
                    .with_message(message)
                    .with_label(
                        Label::new((filename, span.clone()))
                            .with_message(format!("{}{}", message, expected_str))
                            .with_color(Color::Red),
                    )
                    .finish()
                    .write((filename, Source::from(source)), &mut buf);

                if written.is_err() {
                    return self.to_string();
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl<'a> From<chumsky::error::Rich<'a, Token>> for PathDataError {
    fn from(err: chumsky::error::Rich<'a, Token>) -> Self {
        use chumsky::error::RichReason;

        let message = match err.reason() {
            RichReason::ExpectedFound { found, .. } => {
                let found_str = match found {
                    Some(tok) => format_token(tok),
                    None => "end of input".to_string(),
                };
                format!("Unexpected {}", found_str)
            }
            RichReason::Custom(msg) => msg.to_string(),
        };

        let expected: Vec<String> = err
            .expected()
            .filter_map(|e| match e {
                chumsky::error::RichPattern::Token(tok) => Some(format_token(tok)),
                chumsky::error::RichPattern::Label(label) => Some(label.to_string()),
                chumsky::error::RichPattern::EndOfInput => Some("end of input".to_string()),
                chumsky::error::RichPattern::Identifier(s) => Some(format!("identifier '{}'", s)),
                chumsky::error::RichPattern::Any => Some("any token".to_string()),
                chumsky::error::RichPattern::SomethingElse => None,
            })
            .collect();

        PathDataError::Syntax {
            span: err.span().into_range(),
            message,
            expected,
        }
    }
}

/// Format a token for human-readable error messages
fn format_token(tok: &Token) -> String {
    match tok {
        Token::MoveTo => "command 'M'".to_string(),
        Token::LineTo => "command 'L'".to_string(),
        Token::QuadTo => "command 'Q'".to_string(),
        Token::CubicTo => "command 'C'".to_string(),
        Token::Unsupported(c) => format!("unsupported command '{}'", c),
        Token::Number(n) => format!("number {}", n),
    }
}
