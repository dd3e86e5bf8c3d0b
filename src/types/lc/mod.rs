mod gen;
mod lc;
mod grading;
mod super_grading;

pub use gen::{Gen, FreeGen};
pub use lc::Lc;
pub use grading::{GradedGen, GradingError};
pub use super_grading::SuperGen;
