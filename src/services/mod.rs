pub mod blackhole;
pub mod in_memory;
pub mod service;
