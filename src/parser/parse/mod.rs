pub mod binary;
pub mod expressions;

use crate::{
    lexer::{Token, TokenType},
    parser::{Parser, ParserError, SyntaxErr},
};

impl Parser {
    pub(crate) fn first(&self) -> &Token {
        self.tokens.first().unwrap()
    }

    pub(crate) fn eat(&mut self) -> Token {
        self.tokens.remove(0)
    }

    pub(crate) fn get_err(&self, err: SyntaxErr) -> ParserError {
        ParserError::Syntax(err, self.first().clone())
    }

    pub(crate) fn expect_eat(
        &mut self,
        t: &TokenType,
        err: SyntaxErr,
    ) -> Result<Token, ParserError> {
        let value = self.eat();

        if &value.token_type != t {
            return Err(ParserError::Syntax(err, value));
        }

        Ok(value)
    }
}
