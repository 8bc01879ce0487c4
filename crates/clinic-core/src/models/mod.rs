//! Domain models for the clinic record store.

mod history;
mod patient;
mod validation;
mod visit;

pub use history::*;
pub use patient::*;
pub use validation::*;
pub use visit::*;
