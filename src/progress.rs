// src/progress.rs
/// Lightweight progress reporting for the scrape pipeline.
/// The CLI implements this to surface status lines to the user;
/// diagnostics go through `tracing` instead.
pub trait Progress {
    /// Called with the number of items about to be processed.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one item (e.g. a book container) was processed.
    fn item_done(&mut self, _index: usize) {}

    /// Called when one item was dropped.
    fn item_skipped(&mut self, _index: usize, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints status lines on stdout.
#[derive(Default)]
pub struct ConsoleProgress {
    done: usize,
    skipped: usize,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, _total: usize) {
        self.done = 0;
        self.skipped = 0;
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_done(&mut self, _index: usize) {
        self.done += 1;
    }

    fn item_skipped(&mut self, _index: usize, _reason: &str) {
        self.skipped += 1;
    }

    fn finish(&mut self) {
        if self.skipped > 0 {
            println!("Extracted {} books ({} skipped)", self.done, self.skipped);
        }
    }
}

/// Collects everything; handy for tests and embedding.
#[derive(Default, Debug)]
pub struct RecordingProgress {
    pub total: Option<usize>,
    pub lines: Vec<String>,
    pub done: Vec<usize>,
    pub skipped: Vec<(usize, String)>,
    pub finished: bool,
}

impl Progress for RecordingProgress {
    fn begin(&mut self, total: usize) {
        self.total = Some(total);
    }

    fn log(&mut self, msg: &str) {
        self.lines.push(s!(msg));
    }

    fn item_done(&mut self, index: usize) {
        self.done.push(index);
    }

    fn item_skipped(&mut self, index: usize, reason: &str) {
        self.skipped.push((index, s!(reason)));
    }

    fn finish(&mut self) {
        self.finished = true;
    }
}
