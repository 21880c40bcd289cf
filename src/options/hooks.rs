//! Change hooks and the engine subsystems they reconfigure
//!
//! A [`Setting`] only ever sees an opaque [`Hook`]. The initialization table
//! binds each hook to one of the subsystem traits below, so the registry has
//! no compile-time knowledge of hash tables, thread pools or books.
//!
//! Every subsystem call may be repeated with an unchanged value (GUIs resend
//! options freely), so implementations must be idempotent.

use super::types::Setting;
use std::fmt;
use std::sync::Arc;

/// Side effect run after a setting accepts a new value
pub trait OnChange: Send + Sync {
    fn on_change(&self, setting: &Setting);
}

impl<F> OnChange for F
where
    F: Fn(&Setting) + Send + Sync,
{
    fn on_change(&self, setting: &Setting) {
        self(setting)
    }
}

/// Shared, type-erased hook as stored on a setting
pub type Hook = Arc<dyn OnChange>;

/// Search state reset ("Clear Hash")
pub trait SearchControl: Send + Sync {
    fn clear(&self);
}

/// Transposition table
pub trait HashTable: Send + Sync {
    fn resize(&self, megabytes: usize);
}

/// Search worker pool
pub trait ThreadPool: Send + Sync {
    fn set_size(&self, threads: usize);
}

/// Debug log file
pub trait DebugLog: Send + Sync {
    /// Start logging to `path`; an empty path stops logging
    fn start(&self, path: &str);
}

/// Endgame tablebases
pub trait Tablebases: Send + Sync {
    /// `paths` is the raw option text; `<empty>` disables probing
    fn init(&self, paths: &str);
}

/// Polyglot opening book
pub trait OpeningBook: Send + Sync {
    fn init(&self, path: &str);
}

/// Persistent experience store
pub trait ExperienceStore: Send + Sync {
    /// Reload from the current experience options
    fn init(&self);
}

/// Neural network evaluation
pub trait Evaluator: Send + Sync {
    /// Reload the network named by the current evaluation options
    fn init(&self);
}

/// Which of the two opening books an option drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookSlot {
    First,
    Second,
}

impl BookSlot {
    pub const ALL: [BookSlot; 2] = [BookSlot::First, BookSlot::Second];

    /// Option name prefix, `Book1` or `Book2`
    pub fn prefix(&self) -> &'static str {
        match self {
            BookSlot::First => "Book1",
            BookSlot::Second => "Book2",
        }
    }
}

impl fmt::Display for BookSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Every subsystem the option table can reconfigure
#[derive(Clone)]
pub struct Subsystems {
    pub search: Arc<dyn SearchControl>,
    pub hash: Arc<dyn HashTable>,
    pub threads: Arc<dyn ThreadPool>,
    pub debug_log: Arc<dyn DebugLog>,
    pub tablebases: Arc<dyn Tablebases>,
    pub books: [Arc<dyn OpeningBook>; 2],
    pub experience: Arc<dyn ExperienceStore>,
    pub evaluator: Arc<dyn Evaluator>,
}

impl Subsystems {
    /// Subsystems that only log what they were asked to do
    pub fn detached() -> Self {
        let detached = Arc::new(Detached);
        let book1: Arc<dyn OpeningBook> = Arc::new(DetachedBook(BookSlot::First));
        let book2: Arc<dyn OpeningBook> = Arc::new(DetachedBook(BookSlot::Second));
        Self {
            search: detached.clone(),
            hash: detached.clone(),
            threads: detached.clone(),
            debug_log: detached.clone(),
            tablebases: detached.clone(),
            books: [book1, book2],
            experience: detached.clone(),
            evaluator: detached,
        }
    }

    pub fn book(&self, slot: BookSlot) -> &Arc<dyn OpeningBook> {
        match slot {
            BookSlot::First => &self.books[0],
            BookSlot::Second => &self.books[1],
        }
    }
}

impl Default for Subsystems {
    fn default() -> Self {
        Self::detached()
    }
}

struct Detached;

impl SearchControl for Detached {
    fn clear(&self) {
        log::info!("Search state clear requested");
    }
}

impl HashTable for Detached {
    fn resize(&self, megabytes: usize) {
        log::info!("Hash resize to {} MB requested", megabytes);
    }
}

impl ThreadPool for Detached {
    fn set_size(&self, threads: usize) {
        log::info!("Thread pool resize to {} requested", threads);
    }
}

impl DebugLog for Detached {
    fn start(&self, path: &str) {
        if path.is_empty() {
            log::info!("Debug log stop requested");
        } else {
            log::info!("Debug log to {} requested", path);
        }
    }
}

impl Tablebases for Detached {
    fn init(&self, paths: &str) {
        log::info!("Tablebase init from '{}' requested", paths);
    }
}

impl ExperienceStore for Detached {
    fn init(&self) {
        log::info!("Experience store init requested");
    }
}

impl Evaluator for Detached {
    fn init(&self) {
        log::info!("Evaluation network reload requested");
    }
}

struct DetachedBook(BookSlot);

impl OpeningBook for DetachedBook {
    fn init(&self, path: &str) {
        log::info!("{} init from '{}' requested", self.0, path);
    }
}
