//! Password generation, scoring, and output.

pub mod charset;
mod generate;
pub mod output;
pub mod strength;

pub use generate::generate;
pub use generate::generate_batch;
pub use strength::Strength;
