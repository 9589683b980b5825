use crate::{
    ast::{NodeType, binary::BinaryOperator},
    lexer::TokenType,
    parser::{Parser, ParserError, SyntaxErr},
};

impl Parser {
    pub fn parse_primary_expression(&mut self) -> Result<NodeType, ParserError> {
        Ok(match &self.first().token_type {
            TokenType::Float => {
                let val = self.eat();
                match val.value.trim().parse() {
                    Ok(x) => NodeType::FloatLiteral(x),
                    Err(_) => {
                        return Err(ParserError::Syntax(
                            SyntaxErr::MalformedNumber(val.value.clone()),
                            val,
                        ));
                    }
                }
            }
            TokenType::Integer => {
                let val = self.eat();
                // digit runs wider than i64 still evaluate, as floats
                match val.value.trim().parse::<i64>() {
                    Ok(x) => NodeType::IntLiteral(x),
                    Err(_) => match val.value.trim().parse::<f64>() {
                        Ok(x) => NodeType::FloatLiteral(x),
                        Err(_) => {
                            return Err(ParserError::Syntax(
                                SyntaxErr::MalformedNumber(val.value.clone()),
                                val,
                            ));
                        }
                    },
                }
            }
            TokenType::BinaryOperator(x) if x == &BinaryOperator::Sub => {
                let _ = self.eat();
                // negation wraps only the next primary, so -4+3 is (-4)+3
                NodeType::NegExpression {
                    value: Box::new(self.parse_primary_expression()?),
                }
            }
            _ => return Err(self.get_err(SyntaxErr::ExpectedExpression)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{Token, tokenize};

    fn parser_with_tokens(tokens: Vec<Token>) -> Parser {
        Parser { tokens }
    }

    #[test]
    fn test_parse_primary_expression_integer() {
        let tokens = tokenize(String::from("42")).unwrap();
        let mut parser = parser_with_tokens(tokens);
        let node = parser.parse_primary_expression().unwrap();
        assert_eq!(node, NodeType::IntLiteral(42));
    }

    #[test]
    fn test_parse_primary_expression_float() {
        let tokens = tokenize(String::from("2.5")).unwrap();
        let mut parser = parser_with_tokens(tokens);
        let node = parser.parse_primary_expression().unwrap();
        assert_eq!(node, NodeType::FloatLiteral(2.5));
    }

    #[test]
    fn test_parse_primary_expression_negation() {
        let tokens = tokenize(String::from("-4")).unwrap();
        let mut parser = parser_with_tokens(tokens);
        let node = parser.parse_primary_expression().unwrap();
        match node {
            NodeType::NegExpression { value } => {
                assert_eq!(*value, NodeType::IntLiteral(4));
            }
            _ => panic!("Expected NegExpression"),
        }
    }

    #[test]
    fn test_negation_binds_tighter_than_addition() {
        let tokens = tokenize(String::from("-4+3")).unwrap();
        let mut parser = parser_with_tokens(tokens);
        let node = parser.parse_additive_expression().unwrap();
        match node {
            NodeType::BinaryExpression { left, operator, .. } => {
                assert_eq!(operator, BinaryOperator::Add);
                match *left {
                    NodeType::NegExpression { .. } => {}
                    _ => panic!("Expected NegExpression on the left"),
                }
            }
            _ => panic!("Expected BinaryExpression"),
        }
    }

    #[test]
    fn test_parse_primary_expression_malformed_float() {
        let tokens = tokenize(String::from("2.5.3")).unwrap();
        let mut parser = parser_with_tokens(tokens);
        assert!(parser.parse_primary_expression().is_err());
    }

    #[test]
    fn test_parse_primary_expression_bare_operator() {
        let tokens = tokenize(String::from("*")).unwrap();
        let mut parser = parser_with_tokens(tokens);
        assert!(parser.parse_primary_expression().is_err());
    }
}
