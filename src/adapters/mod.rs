// Adapters layer: shared plumbing for talking to external systems.

pub mod http;
