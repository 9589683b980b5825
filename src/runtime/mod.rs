pub mod interpreter;
pub mod values;
