//! UCI option registry for a chess engine
//!
//! Options are registered once, in announcement order, by
//! [`options::registrations::init`]. After that the GUI drives them through
//! [`OptionsRegistry::set`], and accepted values reach the engine's
//! subsystems through the hooks bound at registration.

pub mod config;
pub mod options;

pub use config::EngineConfig;
pub use options::{AssignError, OptionKind, OptionsRegistry, Setting, Subsystems};
