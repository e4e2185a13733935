pub mod evaluator;
pub mod preview;
pub mod scope;

#[cfg(test)]
mod tests_rendering;

pub use evaluator::{
    render, resolve_condition, resolve_text, EvalError, Evaluator, EvaluatorOptions,
    DEFAULT_BINDING,
};
pub use preview::{Axis, Preview, RenderNode, Style};
pub use scope::Scope;
