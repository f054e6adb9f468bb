// Domain layer: membership models and ports (capability traits). No I/O here.

pub mod model;
pub mod ports;
