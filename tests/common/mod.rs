//! Shared fixtures for the integration tests

use std::sync::{Arc, Mutex};
use uci_options::options::{
    DebugLog, Evaluator, ExperienceStore, HashTable, OpeningBook, SearchControl, Subsystems,
    Tablebases, ThreadPool,
};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Records every subsystem call as a short string
#[derive(Default)]
pub struct Recorder {
    calls: Mutex<Vec<String>>,
}

impl Recorder {
    fn push(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    /// Drain the calls recorded so far
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.calls.lock().unwrap())
    }
}

impl SearchControl for Recorder {
    fn clear(&self) {
        self.push("clear".to_string());
    }
}

impl HashTable for Recorder {
    fn resize(&self, megabytes: usize) {
        self.push(format!("hash {megabytes}"));
    }
}

impl ThreadPool for Recorder {
    fn set_size(&self, threads: usize) {
        self.push(format!("threads {threads}"));
    }
}

impl DebugLog for Recorder {
    fn start(&self, path: &str) {
        self.push(format!("log {path}"));
    }
}

impl Tablebases for Recorder {
    fn init(&self, paths: &str) {
        self.push(format!("tablebases {paths}"));
    }
}

impl ExperienceStore for Recorder {
    fn init(&self) {
        self.push("experience".to_string());
    }
}

impl Evaluator for Recorder {
    fn init(&self) {
        self.push("eval".to_string());
    }
}

struct RecordingBook {
    name: &'static str,
    recorder: Arc<Recorder>,
}

impl OpeningBook for RecordingBook {
    fn init(&self, path: &str) {
        self.recorder.push(format!("{} {path}", self.name));
    }
}

/// Subsystems that all report into one recorder
pub fn recording_subsystems() -> (Arc<Recorder>, Subsystems) {
    let recorder = Arc::new(Recorder::default());
    let book1: Arc<dyn OpeningBook> = Arc::new(RecordingBook {
        name: "book1",
        recorder: recorder.clone(),
    });
    let book2: Arc<dyn OpeningBook> = Arc::new(RecordingBook {
        name: "book2",
        recorder: recorder.clone(),
    });

    let subsystems = Subsystems {
        search: recorder.clone(),
        hash: recorder.clone(),
        threads: recorder.clone(),
        debug_log: recorder.clone(),
        tablebases: recorder.clone(),
        books: [book1, book2],
        experience: recorder.clone(),
        evaluator: recorder.clone(),
    };

    (recorder, subsystems)
}
