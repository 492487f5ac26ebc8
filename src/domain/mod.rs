// Domain layer: typed school data and the ports the pipeline talks through.

pub mod model;
pub mod ports;
