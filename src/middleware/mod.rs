pub mod redirect;
pub mod tracing;
