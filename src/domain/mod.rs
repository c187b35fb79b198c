// Domain layer: page content, models and ports. No I/O here.

pub mod content;
pub mod model;
pub mod ports;
