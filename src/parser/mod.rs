use thiserror::Error;

use crate::{
    ast::NodeType,
    lexer::{LexerError, Token, TokenType, tokenize},
};

pub mod parse;

#[derive(Debug, Default)]
pub struct Parser {
    tokens: Vec<Token>,
}

impl Parser {
    fn is_eof(&self) -> bool {
        if let Some(token) = self.tokens.first() {
            token.token_type == TokenType::EOF
        } else {
            true
        }
    }

    /// Parses the source as exactly one arithmetic expression. Anything
    /// left over before EOF is a syntax error, so partial input like
    /// "1+" or stray trailing tokens never produce a tree.
    pub fn produce_ast(&mut self, source: String) -> Result<NodeType, ParserError> {
        self.tokens = tokenize(source)?;

        let expression = self.parse_additive_expression()?;
        let _ = self.expect_eat(&TokenType::EOF, SyntaxErr::TrailingInput)?;

        Ok(expression)
    }
}

impl From<LexerError> for ParserError {
    fn from(value: LexerError) -> Self {
        Self::Lexer(value)
    }
}

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("{0}")]
    Lexer(LexerError),
    #[error("{0}\nFound : {1:?}")]
    Syntax(SyntaxErr, Token),
}

#[derive(Error, Debug)]
pub enum SyntaxErr {
    #[error("Expected a number or unary minus.")]
    ExpectedExpression,
    #[error("Expected end of expression.")]
    TrailingInput,
    #[error("Malformed number literal, '{0}'.")]
    MalformedNumber(String),
}
