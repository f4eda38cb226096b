pub mod evaluator;
pub mod series;
pub mod sqrt;
