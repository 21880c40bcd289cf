//! Syzygy tablebase options

use crate::options::{OptionsRegistry, Registration, Setting, Subsystems};
use anyhow::Result;

/// Register the tablebase options
pub fn register(
    registry: &mut OptionsRegistry,
    registration: &mut Registration,
    subsystems: &Subsystems,
) -> Result<()> {
    let tablebases = subsystems.tablebases.clone();
    registry.register(
        registration,
        "SyzygyPath",
        Setting::text("<empty>").on_change(move |o: &Setting| tablebases.init(o.as_str())),
    )?;

    registry.register(registration, "SyzygyProbeDepth", Setting::spin(1.0, 1, 100))?;
    registry.register(registration, "Syzygy50MoveRule", Setting::boolean(true))?;
    registry.register(registration, "SyzygyProbeLimit", Setting::spin(7.0, 0, 7))?;

    Ok(())
}
