// Domain layer: request-scoped value objects and the capability ports the
// chart pipeline is assembled from.

pub mod model;
pub mod ports;
