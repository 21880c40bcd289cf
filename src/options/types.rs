//! Core types for the options system

use super::caseless::{eq_caseless, CaselessKey};
use super::hooks::{Hook, OnChange};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Token separating combo choices inside the default text
pub const COMBO_SEPARATOR: &str = "var";

/// The five kinds of UCI option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Text,
    Boolean,
    Spin,
    Combo,
    Button,
}

impl OptionKind {
    /// Name used on the wire after `type`
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::Text => "string",
            OptionKind::Boolean => "check",
            OptionKind::Spin => "spin",
            OptionKind::Combo => "combo",
            OptionKind::Button => "button",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated value of an option, one variant per kind
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Text {
        default: String,
        current: String,
    },
    Boolean {
        default: bool,
        current: bool,
    },
    Spin {
        default: f64,
        current: f64,
        min: i64,
        max: i64,
    },
    /// `choices` is the full `var`-separated text, announced verbatim
    Combo {
        choices: String,
        current: String,
    },
    Button,
}

impl OptionValue {
    pub fn kind(&self) -> OptionKind {
        match self {
            OptionValue::Text { .. } => OptionKind::Text,
            OptionValue::Boolean { .. } => OptionKind::Boolean,
            OptionValue::Spin { .. } => OptionKind::Spin,
            OptionValue::Combo { .. } => OptionKind::Combo,
            OptionValue::Button => OptionKind::Button,
        }
    }
}

/// Why an assignment was refused
///
/// The protocol never reports these back to the GUI; they exist so internal
/// callers and tests can tell rejections apart.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssignError {
    #[error("empty value for {kind} option")]
    Empty { kind: OptionKind },

    #[error("'{0}' is neither 'true' nor 'false'")]
    NotBoolean(String),

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("{value} is outside the range {min}..={max}")]
    OutOfRange { value: f64, min: i64, max: i64 },

    #[error("'{0}' is not one of the combo choices")]
    UnknownChoice(String),

    #[error("no option named '{0}'")]
    UnknownOption(String),
}

/// One engine option: its value, announcement slot and change hook
#[derive(Clone)]
pub struct Setting {
    value: OptionValue,
    index: Option<usize>,
    on_change: Option<Hook>,
}

impl Setting {
    /// Free-form string option
    pub fn text(default: &str) -> Self {
        Self::from_value(OptionValue::Text {
            default: default.to_string(),
            current: default.to_string(),
        })
    }

    /// `check` option
    pub fn boolean(default: bool) -> Self {
        Self::from_value(OptionValue::Boolean {
            default,
            current: default,
        })
    }

    /// Numeric option bounded to `min..=max`
    pub fn spin(default: f64, min: i64, max: i64) -> Self {
        debug_assert!(min <= max, "spin bounds {min}..={max} are inverted");
        Self::from_value(OptionValue::Spin {
            default,
            current: default,
            min,
            max,
        })
    }

    /// Combo option; `choices` lists the candidates separated by `var`
    pub fn combo(choices: &str, current: &str) -> Self {
        Self::from_value(OptionValue::Combo {
            choices: choices.to_string(),
            current: current.to_string(),
        })
    }

    /// Valueless trigger
    pub fn button() -> Self {
        Self::from_value(OptionValue::Button)
    }

    fn from_value(value: OptionValue) -> Self {
        Self {
            value,
            index: None,
            on_change: None,
        }
    }

    /// Bind the hook run after every accepted assignment
    pub fn on_change(mut self, hook: impl OnChange + 'static) -> Self {
        self.on_change = Some(Arc::new(hook));
        self
    }

    /// Bind an already shared hook
    pub fn with_hook(mut self, hook: Hook) -> Self {
        self.on_change = Some(hook);
        self
    }

    pub fn kind(&self) -> OptionKind {
        self.value.kind()
    }

    pub fn value(&self) -> &OptionValue {
        &self.value
    }

    /// Position in the announcement order, `None` until registered
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = Some(index);
    }

    pub fn has_hook(&self) -> bool {
        self.on_change.is_some()
    }

    /// Default value as announced by `option name ... default`
    pub fn default_text(&self) -> String {
        match &self.value {
            OptionValue::Text { default, .. } => default.clone(),
            OptionValue::Boolean { default, .. } => default.to_string(),
            OptionValue::Spin { default, .. } => default.to_string(),
            OptionValue::Combo { choices, .. } => choices.clone(),
            OptionValue::Button => String::new(),
        }
    }

    /// Current value in its textual protocol form
    pub fn current_text(&self) -> String {
        match &self.value {
            OptionValue::Text { current, .. } => current.clone(),
            OptionValue::Boolean { current, .. } => current.to_string(),
            OptionValue::Spin { current, .. } => current.to_string(),
            OptionValue::Combo { current, .. } => current.clone(),
            OptionValue::Button => String::new(),
        }
    }

    /// Read a `check` option
    ///
    /// # Panics
    ///
    /// Panics if the option is of any other kind.
    pub fn as_bool(&self) -> bool {
        match &self.value {
            OptionValue::Boolean { current, .. } => *current,
            other => kind_mismatch(OptionKind::Boolean, other.kind()),
        }
    }

    /// Read a `spin` option
    ///
    /// # Panics
    ///
    /// Panics if the option is of any other kind.
    pub fn as_f64(&self) -> f64 {
        match &self.value {
            OptionValue::Spin { current, .. } => *current,
            other => kind_mismatch(OptionKind::Spin, other.kind()),
        }
    }

    /// Read a `spin` option truncated toward zero
    pub fn as_int(&self) -> i64 {
        self.as_f64() as i64
    }

    /// Read a `spin` option as a size or count
    pub fn as_usize(&self) -> usize {
        self.as_int().max(0) as usize
    }

    /// Read a `string` option
    ///
    /// # Panics
    ///
    /// Panics if the option is of any other kind.
    pub fn as_str(&self) -> &str {
        match &self.value {
            OptionValue::Text { current, .. } => current,
            other => kind_mismatch(OptionKind::Text, other.kind()),
        }
    }

    /// Whether the combo's current value equals `candidate`, ignoring case
    ///
    /// # Panics
    ///
    /// Panics if the option is not a combo.
    pub fn matches(&self, candidate: &str) -> bool {
        match &self.value {
            OptionValue::Combo { current, .. } => eq_caseless(current, candidate),
            other => kind_mismatch(OptionKind::Combo, other.kind()),
        }
    }

    /// Combo candidates in declaration order, without the separator tokens
    pub fn choices(&self) -> Vec<&str> {
        match &self.value {
            OptionValue::Combo { choices, .. } => choices
                .split_whitespace()
                .filter(|token| !eq_caseless(token, COMBO_SEPARATOR))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Assign a new value received as text
    ///
    /// Nothing changes and the hook is not called unless the value passes
    /// validation for this option's kind. Buttons accept any text, store
    /// nothing and always run their hook.
    pub fn assign(&mut self, value: &str) -> Result<(), AssignError> {
        let kind = self.kind();

        if kind != OptionKind::Button && value.is_empty() {
            return Err(AssignError::Empty { kind });
        }

        match &mut self.value {
            OptionValue::Text { current, .. } => {
                *current = value.to_string();
            }
            OptionValue::Boolean { current, .. } => {
                *current = match value {
                    "true" => true,
                    "false" => false,
                    _ => return Err(AssignError::NotBoolean(value.to_string())),
                };
            }
            OptionValue::Spin {
                current, min, max, ..
            } => {
                let parsed: f64 = value
                    .trim()
                    .parse()
                    .map_err(|_| AssignError::NotANumber(value.to_string()))?;
                if !(*min as f64..=*max as f64).contains(&parsed) {
                    return Err(AssignError::OutOfRange {
                        value: parsed,
                        min: *min,
                        max: *max,
                    });
                }
                *current = parsed;
            }
            OptionValue::Combo { choices, current } => {
                let candidates: BTreeSet<CaselessKey> = choices
                    .split_whitespace()
                    .map(CaselessKey::from)
                    .collect();
                if !candidates.contains(&CaselessKey::from(value))
                    || eq_caseless(value, COMBO_SEPARATOR)
                {
                    return Err(AssignError::UnknownChoice(value.to_string()));
                }
                *current = value.to_string();
            }
            OptionValue::Button => {}
        }

        if let Some(hook) = &self.on_change {
            log::trace!("Running change hook for {} option", kind);
            hook.on_change(self);
        }
        Ok(())
    }
}

impl Default for Setting {
    /// Inert placeholder: a button with no hook and no index
    fn default() -> Self {
        Self::button()
    }
}

impl fmt::Debug for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Setting")
            .field("value", &self.value)
            .field("index", &self.index)
            .field("has_hook", &self.on_change.is_some())
            .finish()
    }
}

fn kind_mismatch(expected: OptionKind, actual: OptionKind) -> ! {
    panic!("option read as {expected} but it is a {actual} option")
}
