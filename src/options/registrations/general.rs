//! Logging, search and time management options

use crate::options::{OptionsRegistry, Registration, Setting, Subsystems};
use anyhow::Result;

use super::MAX_HASH_MB;

/// Register the general search options
pub fn register(
    registry: &mut OptionsRegistry,
    registration: &mut Registration,
    subsystems: &Subsystems,
) -> Result<()> {
    let debug_log = subsystems.debug_log.clone();
    registry.register(
        registration,
        "Debug Log File",
        Setting::text("").on_change(move |o: &Setting| {
            debug_log.start(o.as_str());
        }),
    )?;

    registry.register(registration, "Contempt", Setting::spin(24.0, -100, 100))?;
    registry.register(
        registration,
        "Analysis Contempt",
        Setting::combo("Both var Off var White var Black var Both", "Both"),
    )?;

    let threads = subsystems.threads.clone();
    registry.register(
        registration,
        "Threads",
        Setting::spin(1.0, 1, 512).on_change(move |o: &Setting| {
            threads.set_size(o.as_usize());
        }),
    )?;

    let hash = subsystems.hash.clone();
    registry.register(
        registration,
        "Hash",
        Setting::spin(16.0, 1, MAX_HASH_MB).on_change(move |o: &Setting| {
            hash.resize(o.as_usize());
        }),
    )?;

    let search = subsystems.search.clone();
    registry.register(
        registration,
        "Clear Hash",
        Setting::button().on_change(move |_: &Setting| search.clear()),
    )?;

    registry.register(registration, "Ponder", Setting::boolean(false))?;
    registry.register(registration, "MultiPV", Setting::spin(1.0, 1, 500))?;
    registry.register(registration, "Skill Level", Setting::spin(20.0, 0, 20))?;

    // Time management
    registry.register(registration, "Move Overhead", Setting::spin(10.0, 0, 5000))?;
    registry.register(registration, "Minimum Thinking Time", Setting::spin(5.0, 0, 5000))?;
    registry.register(registration, "Slow Mover", Setting::spin(100.0, 10, 1000))?;
    registry.register(registration, "nodestime", Setting::spin(0.0, 0, 10000))?;

    // Standard UCI_ options
    registry.register(registration, "UCI_Chess960", Setting::boolean(false))?;
    registry.register(registration, "UCI_AnalyseMode", Setting::boolean(false))?;
    registry.register(registration, "UCI_LimitStrength", Setting::boolean(false))?;
    registry.register(registration, "UCI_Elo", Setting::spin(1350.0, 1350, 2850))?;
    registry.register(registration, "UCI_ShowWDL", Setting::boolean(false))?;

    Ok(())
}
