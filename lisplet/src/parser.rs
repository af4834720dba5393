// recursive descent over an immutable token slice; every step returns
// the node it built plus the tokens it did not consume
use crate::expr::Node;
use crate::lexer::{self, Token};
use thiserror::Error;

/// Enum representing parser errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty input!")]
    EmptyInput,
    #[error("Unclosed list!")]
    UnclosedList,
    #[error("Unexpected ')'!")]
    UnexpectedRParen,
}

type PResult<'tok, T, E = ParseError> = Result<(T, &'tok [Token]), E>;

/// module dedicated to parsing a singular form
mod single_form {
    use super::*;

    #[derive(Error, Debug, Clone)]
    /// implementation error representing `parse` errors
    pub enum Error {
        #[error("Empty slice!")]
        EmptySlice,
        #[error(transparent)]
        ParseErr(#[from] ParseError),
    }

    impl Error {
        pub fn on_empty(self, slice_alt: ParseError) -> ParseError {
            match self {
                Error::EmptySlice => slice_alt,
                Error::ParseErr(e) => e,
            }
        }
    }

    /// Recursively parse the tokens until a [`Node`] is built,
    /// the [`Token::RParen`] is hit or an error occurs
    pub fn parse(tokens: &[Token]) -> PResult<Option<Node>, Error> {
        let (first, mut rest) = tokens.split_first().ok_or(Error::EmptySlice)?;
        let result = match first {
            Token::RParen => None,
            Token::Number(_) | Token::Symbol(_) => Some(parse_atom(first)),
            Token::LParen => {
                let l = parse_list(rest)?;
                rest = l.1;
                Some(Node::List(l.0))
            }
        };
        Ok((result, rest))
    }

    #[inline]
    /// Parses an atom into a [`Node`].
    /// panics when passed a variant other than
    /// [`Token::Number`] or [`Token::Symbol`]
    fn parse_atom(token: &Token) -> Node {
        match token {
            Token::Number(n) => Node::Literal(*n),
            Token::Symbol(s) => Node::Identifier(s.clone()),
            _ => panic!("Received a token not convertible to an atom!"),
        }
    }

    #[inline]
    /// Parses a list into [`Node`]s.
    fn parse_list(mut tokens: &[Token]) -> PResult<Vec<Node>> {
        let mut list: Vec<Node> = vec![];
        loop {
            let (maybe_node, rest) =
                parse(tokens).map_err(|e| e.on_empty(ParseError::UnclosedList))?;
            let Some(node) = maybe_node else {
                return Ok((list, rest));
            };
            list.push(node);
            tokens = rest;
        }
    }
}

pub fn parse_tokens(tokens: &[Token]) -> PResult<Node> {
    let (res, rest) =
        single_form::parse(tokens).map_err(|e| e.on_empty(ParseError::EmptyInput))?;
    let Some(node) = res else {
        return Err(ParseError::UnexpectedRParen);
    };
    Ok((node, rest))
}

/// Parse one input line into its root [`Node`].
///
/// A line holding several sibling top-level forms yields only the last
/// one; earlier siblings are still parsed, so their syntax is checked,
/// then dropped.
pub fn parse_line(source: &str) -> Result<Node, ParseError> {
    let tokens = lexer::tokenize(source);
    let mut unparsed: &[Token] = &tokens;
    let mut last = None;

    while !unparsed.is_empty() {
        let (node, rest) = parse_tokens(unparsed)?;
        last = Some(node);
        unparsed = rest;
    }

    last.ok_or(ParseError::EmptyInput)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::node_list;
    use anyhow::Result;

    /// macro to setup test boilerplate for parser::parse_line
    macro_rules! parser_test {
        ($fn_name:ident, $code:literal, $expected:expr) => {
            #[test]
            fn $fn_name() -> Result<()> {
                assert_eq!(parse_line($code)?, $expected);
                Ok(())
            }
        };
    }

    parser_test!(symbol, "test", Node::ident("test"));

    parser_test!(number, "42", Node::lit(42.)?);

    parser_test!(float, "3.12", Node::lit(3.12)?);

    parser_test!(neg_float, "-0.12", Node::lit(-0.12)?);

    parser_test!(empty_list, "()", node_list![]);

    parser_test!(empty_nested_lists, "(())", node_list![node_list![]]);

    parser_test!(
        application,
        "(first (rest (1 2 3)))",
        node_list![
            Node::ident("first"),
            node_list![
                Node::ident("rest"),
                node_list![Node::lit(1.)?, Node::lit(2.)?, Node::lit(3.)?],
            ],
        ]
    );

    parser_test!(
        lambda,
        "(lambda (x y) x)",
        node_list![
            Node::ident("lambda"),
            node_list![Node::ident("x"), Node::ident("y")],
            Node::ident("x"),
        ]
    );

    /// a line with several sibling top-level forms keeps only the last
    mod last_form_wins {
        use super::*;

        parser_test!(atoms, "1 2 3", Node::lit(3.)?);

        parser_test!(
            lists,
            "(1) (2 3)",
            node_list![Node::lit(2.)?, Node::lit(3.)?]
        );

        parser_test!(mixed, "(1 2) x", Node::ident("x"));
    }

    mod malformed {
        use super::*;

        #[test]
        fn empty_input_is_rejected() {
            assert_eq!(parse_line(""), Err(ParseError::EmptyInput));
        }

        #[test]
        fn blank_input_is_rejected() {
            assert_eq!(parse_line("   "), Err(ParseError::EmptyInput));
        }

        #[test]
        fn unclosed_lists_are_rejected() {
            for code in ["(", "(1 2", "(1 (2)"] {
                assert_eq!(parse_line(code), Err(ParseError::UnclosedList), "{code}");
            }
        }

        #[test]
        fn stray_closing_parens_are_rejected() {
            for code in [")", "1)", "(1))"] {
                assert_eq!(
                    parse_line(code),
                    Err(ParseError::UnexpectedRParen),
                    "{code}"
                );
            }
        }
    }
}
