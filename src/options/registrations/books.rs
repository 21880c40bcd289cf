//! Opening book options, one group per book slot

use crate::options::{BookSlot, OptionsRegistry, Registration, Setting, Subsystems};
use anyhow::Result;

/// Register `Book1 ...` followed by `Book2 ...`
pub fn register(
    registry: &mut OptionsRegistry,
    registration: &mut Registration,
    subsystems: &Subsystems,
) -> Result<()> {
    for slot in BookSlot::ALL {
        let prefix = slot.prefix();
        let book = subsystems.book(slot).clone();

        registry.register(registration, prefix, Setting::boolean(false))?;
        registry.register(
            registration,
            &format!("{prefix} File"),
            Setting::text("<empty>").on_change(move |o: &Setting| book.init(o.as_str())),
        )?;
        registry.register(
            registration,
            &format!("{prefix} BestBookMove"),
            Setting::boolean(true),
        )?;
        registry.register(
            registration,
            &format!("{prefix} Depth"),
            Setting::spin(100.0, 1, 350),
        )?;
    }

    Ok(())
}
