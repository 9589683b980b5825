use thiserror::Error;

use crate::{
    ast::{NodeType, binary::ASTError},
    runtime::values::RuntimeValue,
};

#[derive(Error, Debug, Clone)]
pub enum InterpreterErr {
    #[error("{0}")]
    AST(ASTError),
}

impl From<ASTError> for InterpreterErr {
    fn from(value: ASTError) -> Self {
        Self::AST(value)
    }
}

/// Reduces an expression tree bottom-up to a single value. Pure: no scope,
/// no side effects, each call independent.
pub fn evaluate(node: NodeType) -> Result<RuntimeValue, InterpreterErr> {
    match node {
        NodeType::FloatLiteral(x) => Ok(RuntimeValue::Float(x)),
        NodeType::IntLiteral(x) => Ok(RuntimeValue::Integer(x)),
        NodeType::NegExpression { value } => Ok(-evaluate(*value)?),
        NodeType::BinaryExpression {
            left,
            right,
            operator,
        } => {
            let left = evaluate(*left)?;
            let right = evaluate(*right)?;

            Ok(operator.handle(left, right)?)
        }
    }
}
