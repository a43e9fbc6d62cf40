// Domain layer: request-scoped models and the ports the handler talks through.

pub mod model;
pub mod ports;
