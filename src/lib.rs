pub mod chudnovsky;
pub mod cli;
pub mod errors;
pub mod output;

pub use chudnovsky::evaluator::compute_pi;
