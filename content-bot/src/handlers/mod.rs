//! Handler implementations that wrap the dialogue in the chain.

mod logging;

pub use logging::LoggingHandler;
