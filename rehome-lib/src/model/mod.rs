//! Record types for adoptable dogs and their current owners.

mod dog;
mod owner;

pub use dog::*;
pub use owner::*;
