//! Engine options exposed over UCI
//!
//! The options system provides:
//! - Case-insensitive option names, as UCI requires
//! - Kind-specific validation of `setoption` values
//! - Announcement in registration order
//! - Change hooks into the subsystems an option reconfigures

pub mod caseless;
pub mod hooks;
pub mod registrations;
pub mod registry;
pub mod types;

pub use caseless::{cmp_caseless, eq_caseless, CaselessKey};
pub use hooks::{
    BookSlot, DebugLog, Evaluator, ExperienceStore, HashTable, Hook, OnChange, OpeningBook,
    SearchControl, Subsystems, Tablebases, ThreadPool,
};
pub use registry::{OptionsRegistry, Registration};
pub use types::{AssignError, OptionKind, OptionValue, Setting, COMBO_SEPARATOR};
