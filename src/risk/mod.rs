pub mod engine;
pub mod recommendations;
pub mod rules;

pub use engine::{RiskEngine, RiskReport};
