//! Lexer for SVG path data using logos

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r,]+")]
pub enum Token {
    #[token("M")]
    MoveTo,
    #[token("L")]
    LineTo,
    #[token("Q")]
    QuadTo,
    #[token("C")]
    CubicTo,

    /// Any other command letter (relative commands, arcs, close...)
    #[regex(r"[A-Za-z]", priority = 1, callback = |lex| lex.slice().chars().next())]
    Unsupported(char),

    /// Numbers too large to be finite are lex errors
    #[regex(r"-?([0-9]+(\.[0-9]+)?|\.[0-9]+)", parse_number)]
    Number(f64),
}

fn parse_number(lex: &mut logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Lex input string into tokens with spans.
///
/// Characters that start no token come back as `Err(())` with their span.
pub fn lex(input: &str) -> impl Iterator<Item = (Result<Token, ()>, Span)> + '_ {
    Token::lexer(input).spanned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        lex(input).filter_map(|(tok, _)| tok.ok()).collect()
    }

    #[test]
    fn test_command_letters() {
        assert_eq!(
            tokens("M L Q C"),
            vec![Token::MoveTo, Token::LineTo, Token::QuadTo, Token::CubicTo]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            tokens("28.00 -3.5 .25 7"),
            vec![
                Token::Number(28.0),
                Token::Number(-3.5),
                Token::Number(0.25),
                Token::Number(7.0)
            ]
        );
    }

    #[test]
    fn test_commas_and_packed_commands() {
        assert_eq!(
            tokens("M1,2L3-4"),
            vec![
                Token::MoveTo,
                Token::Number(1.0),
                Token::Number(2.0),
                Token::LineTo,
                Token::Number(3.0),
                Token::Number(-4.0)
            ]
        );
    }

    #[test]
    fn test_unsupported_command() {
        assert_eq!(tokens("Z"), vec![Token::Unsupported('Z')]);
        assert_eq!(tokens("l"), vec![Token::Unsupported('l')]);
    }

    #[test]
    fn test_invalid_character_reports_span() {
        let errors: Vec<_> = lex("M 1 # 2").filter(|(tok, _)| tok.is_err()).collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].1, 4..5);
    }

    #[test]
    fn test_command_letters_win_over_unsupported() {
        assert_eq!(
            tokens("MmLlQqCc"),
            vec![
                Token::MoveTo,
                Token::Unsupported('m'),
                Token::LineTo,
                Token::Unsupported('l'),
                Token::QuadTo,
                Token::Unsupported('q'),
                Token::CubicTo,
                Token::Unsupported('c'),
            ]
        );
    }

    #[test]
    fn test_overflowing_number_is_rejected() {
        let huge = "1".repeat(400);
        let lexed: Vec<_> = lex(&huge).collect();
        assert_eq!(lexed, vec![(Err(()), 0..400)]);
    }
}
