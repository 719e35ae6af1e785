//! Application services - the two generators.

pub mod layout_generator;
pub mod service_generator;

pub use layout_generator::{LayoutEntry, LayoutGenerator, LayoutReport};
pub use service_generator::ServiceGenerator;
