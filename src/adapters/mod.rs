// Adapters layer: concrete implementations of the collaborator ports
// (CSV reading, HTTP transport, log sinks).

pub mod csv_reader;
pub mod http;
pub mod log_sink;
