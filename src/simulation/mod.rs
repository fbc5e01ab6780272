//! Simulation drivers: scaffold generation, run parameters, the
//! end-to-end engine, and its builder.

pub mod builder;
pub mod engine;
pub mod parameters;
pub mod scaffold;

pub use builder::PrepBuilder;
pub use engine::LibraryPrep;
pub use parameters::PrepConfig;
pub use scaffold::generate_scaffold;
