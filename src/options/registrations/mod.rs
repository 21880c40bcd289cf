//! Registration of every engine option
//!
//! The modules are called in a fixed order; that order is the order in which
//! the options are announced to the GUI.

pub mod books;
pub mod evaluation;
pub mod experience;
pub mod general;
pub mod tablebases;

use super::hooks::Subsystems;
use super::registry::{OptionsRegistry, Registration};
use anyhow::Result;

/// Largest transposition table the `Hash` option allows, in MB
#[cfg(target_pointer_width = "64")]
pub const MAX_HASH_MB: i64 = 33_554_432;
#[cfg(not(target_pointer_width = "64"))]
pub const MAX_HASH_MB: i64 = 2048;

/// Network file loaded when `EvalFile` is left alone
pub const EVAL_FILE_DEFAULT_NAME: &str = "nn-3475407dc199.nnue";

/// Register all options from all modules
pub fn register_all(
    registry: &mut OptionsRegistry,
    registration: &mut Registration,
    subsystems: &Subsystems,
) -> Result<()> {
    general::register(registry, registration, subsystems)?;
    tablebases::register(registry, registration, subsystems)?;
    books::register(registry, registration, subsystems)?;
    experience::register(registry, registration, subsystems)?;
    evaluation::register(registry, registration, subsystems)?;

    log::debug!("Registered {} engine options", registration.issued());
    Ok(())
}

/// Build a registry holding every engine option at its default
pub fn init(subsystems: &Subsystems) -> Result<OptionsRegistry> {
    let mut registry = OptionsRegistry::new();
    let mut registration = Registration::new();
    register_all(&mut registry, &mut registration, subsystems)?;
    Ok(registry)
}
