//! Solution checking: recomputed route times, budget, and load coverage.

mod evaluator;

pub use evaluator::RouteEvaluator;
