// Domain layer: core models and ports (interfaces). No rendering or I/O here.

pub mod model;
pub mod ports;
