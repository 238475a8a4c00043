//! The debug stage: observe each item, log, pass it through unchanged.
//!
//! `DebugStage` holds the per-stream state (resolved config, item counter,
//! optional output-mutex guard). `DebugIter` adapts any iterator of items
//! into a pass-through stage, and `PipeDebug` bolts `.debug(..)` onto such
//! iterators so a pipeline reads as a chain of adapters.

use crate::format;
use crate::item::Item;
use crate::mutex::OutputMutexGuard;
use crate::options::{DebugConfig, DebugOptions};

#[derive(Clone, Copy, Debug, PartialEq)]
enum State {
    Idle,
    Running,
    Done,
}

/// A pass-through diagnostic stage for one stream of items.
///
/// Items are observed one at a time; each observation logs (subject to
/// configuration), increments the counter, and leaves the item untouched.
/// `finish` logs the summary line and releases the shared output mutex if
/// one was acquired. Dropping the stage without finishing still releases
/// the mutex via the guard's Drop.
pub struct DebugStage {
    config: DebugConfig,
    count: u64,
    state: State,
    guard: Option<OutputMutexGuard>,
}

impl DebugStage {
    pub fn new(options: DebugOptions) -> Self {
        Self {
            config: DebugConfig::resolve(options),
            count: 0,
            state: State::Idle,
            guard: None,
        }
    }

    /// Construct with an explicit title, overriding any title in `options`.
    pub fn with_title(title: impl Into<String>, options: DebugOptions) -> Self {
        Self::new(options.title(title))
    }

    /// Observe one item: log its diagnostic line and count it.
    ///
    /// On the first item this blocks until the shared output mutex (if
    /// configured) is acquired, so the whole span through `finish` is
    /// contiguous in the merged output of competing stages.
    pub fn observe(&mut self, item: &Item) {
        debug_assert_ne!(self.state, State::Done, "observe after finish");

        if self.count == 0
            && let Some(mutex) = &self.config.mutex
        {
            log::debug!("{} waiting for shared output mutex", self.config.title);
            self.guard = Some(mutex.lock());
        }
        self.state = State::Running;

        if self.config.show_files
            && let Some(line) = format::item_line(item, &self.config)
        {
            (self.config.logger)(&line);
        }

        self.count += 1;
    }

    /// Flush the stage: emit the summary line and release the mutex.
    ///
    /// Idempotent; a second call is a no-op. A stage that saw zero items
    /// never acquired the mutex, so there is nothing to release.
    pub fn finish(&mut self) {
        if self.state == State::Done {
            return;
        }

        if self.config.show_count {
            (self.config.logger)(&format::count_line(self.count, &self.config));
        }

        if self.guard.take().is_some() {
            log::debug!("{} released shared output mutex", self.config.title);
        }
        self.state = State::Done;
    }

    /// Number of items observed so far.
    pub fn count(&self) -> u64 {
        self.count
    }
}

/// Iterator adapter driving a [`DebugStage`]: observes each inner item,
/// yields it unchanged, and finishes the stage when the inner iterator is
/// first exhausted.
pub struct DebugIter<I> {
    inner: I,
    stage: DebugStage,
}

impl<I: Iterator<Item = Item>> Iterator for DebugIter<I> {
    type Item = Item;

    fn next(&mut self) -> Option<Item> {
        match self.inner.next() {
            Some(item) => {
                self.stage.observe(&item);
                Some(item)
            }
            None => {
                self.stage.finish();
                None
            }
        }
    }
}

/// Extension trait adding the debug stage to any iterator of items.
pub trait PipeDebug: Iterator<Item = Item> + Sized {
    fn debug(self, options: DebugOptions) -> DebugIter<Self> {
        DebugIter {
            inner: self,
            stage: DebugStage::new(options),
        }
    }

    fn debug_with_title(self, title: impl Into<String>, options: DebugOptions) -> DebugIter<Self> {
        DebugIter {
            inner: self,
            stage: DebugStage::with_title(title, options),
        }
    }
}

impl<I: Iterator<Item = Item> + Sized> PipeDebug for I {}
