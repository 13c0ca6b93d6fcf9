// Domain layer: menu records and the provider port. Only std/serde types here.

pub mod model;
pub mod ports;
