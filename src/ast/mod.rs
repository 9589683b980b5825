pub mod binary;

use crate::ast::binary::BinaryOperator;

/// The only node kinds an expression tree can hold. Evaluation matches
/// exhaustively over these, so nothing outside the calculator's grammar
/// can ever be reduced.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeType {
    FloatLiteral(f64),
    IntLiteral(i64),
    NegExpression {
        value: Box<NodeType>,
    },
    BinaryExpression {
        left: Box<NodeType>,
        right: Box<NodeType>,
        operator: BinaryOperator,
    },
}
