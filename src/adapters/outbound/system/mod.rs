/// System identity adapters
mod host_probe;

pub use host_probe::SystemHostProbe;
