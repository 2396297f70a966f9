// Domain layer: core models and ports (interfaces). No knowledge of HTTP,
// filesystems or the page shell format lives here.

pub mod model;
pub mod ports;
