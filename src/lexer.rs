use thiserror::Error;

use crate::ast::binary::BinaryOperator;

#[derive(Error, Debug, Clone)]
pub enum LexerError {
    #[error("Unrecognized character '{0}'")]
    Unrecognized(char),
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenType {
    Float,
    Integer,
    BinaryOperator(BinaryOperator),
    EOF,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub value: String,
    pub token_type: TokenType,
}

impl Token {
    pub fn new(token_type: TokenType, value: &str) -> Self {
        Self {
            value: value.to_string(),
            token_type,
        }
    }
}

/// Splits a calculator expression into tokens. Only numeric literals and
/// the four operator symbols exist; anything else is a lex error, so
/// identifiers, quotes and brackets can never reach the parser.
pub fn tokenize(txt: String) -> Result<Vec<Token>, LexerError> {
    let mut tokens = Vec::new();
    let mut buffer: Vec<char> = txt.chars().collect();

    while buffer.len() > 0 {
        let first = buffer.first().unwrap();

        if let Some(op) = BinaryOperator::from_symbol(*first) {
            tokens.push(Token::new(
                TokenType::BinaryOperator(op),
                &buffer.remove(0).to_string(),
            ));
        } else if first.is_whitespace() {
            let _ = buffer.remove(0);
        } else if first.is_ascii_digit() || first == &'.' {
            let mut number = String::new();
            let mut is_int = true;

            while buffer.len() > 0 && (buffer[0].is_ascii_digit() || buffer[0] == '.') {
                if buffer[0] == '.' {
                    is_int = false;
                }
                number.push(buffer.remove(0));
            }

            if is_int {
                tokens.push(Token::new(TokenType::Integer, number.trim()));
            } else {
                tokens.push(Token::new(TokenType::Float, number.trim()));
            }
        } else {
            return Err(LexerError::Unrecognized(*first));
        }
    }

    tokens.push(Token::new(TokenType::EOF, "EndOfFile"));

    Ok(tokens)
}
