// Domain layer: canonical lead models and ports for the external
// collaborators (HTTP transport, log sinks).

pub mod model;
pub mod ports;
