use ordered_float::NotNan;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// (
    LParen,
    /// )
    RParen,
    /// float literal
    Number(NotNan<f64>),
    /// Any other group of characters
    Symbol(String),
}

impl Token {
    pub fn sym(s: &str) -> Self {
        Self::Symbol(s.to_owned())
    }

    /// Number token helper, panics on NaN.
    pub fn num(f: f64) -> Self {
        Self::Number(NotNan::new(f).expect("don't put NaN here"))
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        match s {
            "(" => Token::LParen,
            ")" => Token::RParen,
            // a lexeme that reads as a finite float is a number,
            // everything else is a symbol
            x => match x
                .parse()
                .ok()
                .filter(|f: &f64| f.is_finite())
                .and_then(|f| NotNan::new(f).ok())
            {
                Some(n) => Token::Number(n),
                None => Token::Symbol(x.to_owned()),
            },
        }
    }
}

pub fn tokenize(source: &str) -> Vec<Token> {
    source
        .replace('(', " ( ")
        .replace(')', " ) ")
        .split_whitespace()
        .map(Token::from)
        .collect()
}
