pub mod evaluator;
pub mod quantity;
pub mod types;

pub use evaluator::{EvaluationError, Evaluator};
