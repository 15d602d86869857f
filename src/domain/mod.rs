// Domain layer: core models and ports (interfaces). No dependencies beyond
// std/serde/chrono/rust_decimal.

pub mod model;
pub mod ports;
