use crate::{
    ast::{NodeType, binary::BinaryOperator},
    lexer::TokenType,
    parser::{Parser, ParserError},
};

impl Parser {
    pub fn parse_additive_expression(&mut self) -> Result<NodeType, ParserError> {
        let mut left = self.parse_multiplicative_expression()?;

        while let TokenType::BinaryOperator(op) = self.first().token_type.clone() {
            if [BinaryOperator::Add, BinaryOperator::Sub].contains(&op) {
                let _ = self.eat();
                let right = self.parse_multiplicative_expression()?;

                left = NodeType::BinaryExpression {
                    left: Box::new(left),
                    right: Box::new(right),
                    operator: op,
                };
            } else {
                break;
            }
        }

        Ok(left)
    }

    pub fn parse_multiplicative_expression(&mut self) -> Result<NodeType, ParserError> {
        let mut left = self.parse_primary_expression()?;

        while let TokenType::BinaryOperator(op) = self.first().token_type.clone() {
            if [BinaryOperator::Mul, BinaryOperator::Div].contains(&op) {
                let _ = self.eat();
                let right = self.parse_primary_expression()?;

                left = NodeType::BinaryExpression {
                    left: Box::new(left),
                    right: Box::new(right),
                    operator: op,
                };
            } else {
                break;
            }
        }

        Ok(left)
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
    fn test_parse_additive_expression_left_assoc() {
        let tokens = tokenize(String::from("1 + 2 - 3")).unwrap();
        let mut parser = parser_with_tokens(tokens);
        let node = parser.parse_additive_expression().unwrap();
        match node {
            NodeType::BinaryExpression { operator, .. } => {
                assert_eq!(operator, BinaryOperator::Sub);
            }
            _ => panic!("Expected BinaryExpression"),
        }
    }

    #[test]
    fn test_parse_multiplicative_expression() {
        let tokens = tokenize(String::from("2 * 3 / 4")).unwrap();
        let mut parser = parser_with_tokens(tokens);
        let node = parser.parse_multiplicative_expression().unwrap();
        match node {
            NodeType::BinaryExpression { operator, .. } => {
                assert_eq!(operator, BinaryOperator::Div);
            }
            _ => panic!("Expected BinaryExpression"),
        }
    }

    #[test]
    fn test_multiplication_binds_tighter_than_addition() {
        let tokens = tokenize(String::from("2 + 3 * 4")).unwrap();
        let mut parser = parser_with_tokens(tokens);
        let node = parser.parse_additive_expression().unwrap();
        match node {
            NodeType::BinaryExpression {
                operator, right, ..
            } => {
                assert_eq!(operator, BinaryOperator::Add);
                match *right {
                    NodeType::BinaryExpression { operator, .. } => {
                        assert_eq!(operator, BinaryOperator::Mul);
                    }
                    _ => panic!("Expected BinaryExpression on the right"),
                }
            }
            _ => panic!("Expected BinaryExpression"),
        }
    }

    #[test]
    fn test_missing_right_operand_is_error() {
        let tokens = tokenize(String::from("4*")).unwrap();
        let mut parser = parser_with_tokens(tokens);
        assert!(parser.parse_multiplicative_expression().is_err());
    }
}
