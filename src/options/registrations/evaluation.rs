//! Evaluation options

use crate::options::{Hook, OptionsRegistry, Registration, Setting, Subsystems};
use anyhow::Result;
use std::sync::Arc;

use super::EVAL_FILE_DEFAULT_NAME;

/// Register the evaluation options
pub fn register(
    registry: &mut OptionsRegistry,
    registration: &mut Registration,
    subsystems: &Subsystems,
) -> Result<()> {
    let evaluator = subsystems.evaluator.clone();
    let reload: Hook = Arc::new(move |_: &Setting| evaluator.init());

    registry.register(
        registration,
        "EvalFile",
        Setting::text(EVAL_FILE_DEFAULT_NAME).with_hook(reload.clone()),
    )?;
    registry.register(
        registration,
        "Use NNUE Evaluation",
        Setting::boolean(true).with_hook(reload),
    )?;
    registry.register(registration, "Use Classical Evaluation", Setting::boolean(true))?;

    Ok(())
}
