//! Active period resolution per schedule type.

pub mod resolver;

pub use resolver::Period;
