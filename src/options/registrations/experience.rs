//! Experience store options

use crate::options::{Hook, OptionsRegistry, Registration, Setting, Subsystems};
use anyhow::Result;
use std::sync::Arc;

/// Register the experience options
pub fn register(
    registry: &mut OptionsRegistry,
    registration: &mut Registration,
    subsystems: &Subsystems,
) -> Result<()> {
    // Both the switch and the file name reload the whole store
    let experience = subsystems.experience.clone();
    let reload: Hook = Arc::new(move |_: &Setting| experience.init());

    registry.register(
        registration,
        "Experience Enabled",
        Setting::boolean(true).with_hook(reload.clone()),
    )?;
    registry.register(
        registration,
        "Experience File",
        Setting::text("SugaR.exp").with_hook(reload),
    )?;
    registry.register(registration, "Experience Readonly", Setting::boolean(false))?;
    registry.register(registration, "Experience Book", Setting::boolean(false))?;
    registry.register(registration, "Experience Book Best Move", Setting::boolean(true))?;
    registry.register(
        registration,
        "Experience Book Eval Importance",
        Setting::spin(5.0, 0, 10),
    )?;
    registry.register(
        registration,
        "Experience Book Max Moves",
        Setting::spin(16.0, 1, 100),
    )?;

    Ok(())
}
