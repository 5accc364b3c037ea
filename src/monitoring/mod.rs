/*!
 * Monitoring Module
 * Logging and tracing setup
 */

pub mod tracer;

pub use tracer::init_tracing;
