pub mod dispatch;
pub mod normalize;
pub mod parsers;
pub mod payload;
pub mod processor;

pub use dispatch::Dispatcher;
pub use processor::LeadEngine;
