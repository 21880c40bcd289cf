//! Registry of engine options, keyed case-insensitively

use super::caseless::CaselessKey;
use super::types::{AssignError, OptionValue, Setting};
use anyhow::Result;
use std::collections::BTreeMap;
use std::fmt;

/// Hands out announcement indices during initialization
///
/// Indices start at zero and increase by one per registered option. One
/// `Registration` is threaded through the whole initialization table.
#[derive(Debug, Default)]
pub struct Registration {
    next: usize,
}

impl Registration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the next index
    pub fn next_index(&mut self) -> usize {
        let index = self.next;
        self.next += 1;
        index
    }

    /// Number of indices handed out so far
    pub fn issued(&self) -> usize {
        self.next
    }
}

/// All engine options, looked up without regard to case
#[derive(Debug, Default)]
pub struct OptionsRegistry {
    options: BTreeMap<CaselessKey, Setting>,
}

impl OptionsRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `setting` under `key` and give it the next announcement index
    ///
    /// Returns an error if an option with an equivalent key is already
    /// registered. A blank entry left by [`resolve_or_create`] is replaced,
    /// and the name keeps the spelling given here.
    ///
    /// [`resolve_or_create`]: Self::resolve_or_create
    pub fn register(
        &mut self,
        registration: &mut Registration,
        key: &str,
        mut setting: Setting,
    ) -> Result<&mut Setting> {
        let key = CaselessKey::from(key);
        if let Some((existing_key, existing)) = self.options.remove_entry(&key) {
            if existing.index().is_some() {
                self.options.insert(existing_key, existing);
                anyhow::bail!("Option '{}' is already registered", key);
            }
        }

        let index = registration.next_index();
        setting.set_index(index);
        log::debug!("Registered option: {} ({}, index {})", key, setting.kind(), index);

        Ok(self.options.entry(key).or_insert(setting))
    }

    /// Get the option for `key`, inserting a blank entry if there is none
    pub fn resolve_or_create(&mut self, key: &str) -> &mut Setting {
        self.options.entry(CaselessKey::from(key)).or_default()
    }

    /// Get option by name, ignoring case
    pub fn get(&self, key: &str) -> Option<&Setting> {
        self.options.get(&CaselessKey::from(key))
    }

    /// Get mutable option by name, ignoring case
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Setting> {
        self.options.get_mut(&CaselessKey::from(key))
    }

    /// Check if an option is present
    pub fn contains(&self, key: &str) -> bool {
        self.options.contains_key(&CaselessKey::from(key))
    }

    /// Number of distinct option names
    pub fn count(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Assign `value` to the option named `key`
    ///
    /// This is the `setoption` boundary: the result exists for internal
    /// callers, the protocol itself never reports a rejection. Blank entries
    /// left by [`resolve_or_create`] are not options and are refused.
    ///
    /// [`resolve_or_create`]: Self::resolve_or_create
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), AssignError> {
        let setting = self
            .get_mut(key)
            .filter(|setting| setting.index().is_some())
            .ok_or_else(|| AssignError::UnknownOption(key.to_string()))?;

        setting.assign(value).inspect_err(|err| {
            log::debug!("Ignoring setoption name {} value {}: {}", key, value, err);
        })
    }

    /// Registered options in announcement order, with their names as spelled
    /// at registration
    pub fn list_all(&self) -> Vec<(&str, &Setting)> {
        let mut options: Vec<_> = self
            .options
            .iter()
            .filter(|(_, setting)| setting.index().is_some())
            .map(|(key, setting)| (key.as_str(), setting))
            .collect();

        options.sort_by_key(|(_, setting)| setting.index());
        options
    }

    /// Write one `option name ...` line per registered option, in
    /// registration order
    pub fn announce<W: fmt::Write>(&self, sink: &mut W) -> fmt::Result {
        for (key, setting) in self.list_all() {
            write_option_line(sink, key, setting)?;
            sink.write_char('\n')?;
        }
        Ok(())
    }
}

impl fmt::Display for OptionsRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.announce(f)
    }
}

fn write_option_line<W: fmt::Write>(sink: &mut W, key: &str, setting: &Setting) -> fmt::Result {
    write!(sink, "option name {} type {}", key, setting.kind())?;

    match setting.value() {
        OptionValue::Text { default, .. } => write!(sink, " default {}", default),
        OptionValue::Boolean { default, .. } => write!(sink, " default {}", default),
        OptionValue::Combo { choices, .. } => write!(sink, " default {}", choices),
        OptionValue::Spin {
            default, min, max, ..
        } => write!(sink, " default {} min {} max {}", default.trunc() as i64, min, max),
        OptionValue::Button => Ok(()),
    }
}
