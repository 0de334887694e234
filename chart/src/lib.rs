// Chart presentation layer: declarative radar-chart configuration.
// Nothing here draws anything; the output is plain data handed to an
// external charting frontend.

pub mod config;
pub mod radar;
