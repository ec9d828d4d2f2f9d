mod fake_host_probe;
mod fixtures;

pub use fake_host_probe::FakeHostProbe;
pub use fixtures::valid_configuration;
