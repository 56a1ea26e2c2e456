// Adapters layer: concrete implementations of the domain ports that talk to
// the outside world (or stand in for it).

pub mod nominatim;
pub mod predictions;
