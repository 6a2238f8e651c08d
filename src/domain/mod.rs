// Domain layer: value types and the capabilities (traits) they implement.

pub mod model;
pub mod ports;
