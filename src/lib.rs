pub mod format;
pub mod item;
pub mod mutex;
pub mod options;
pub mod path;
pub mod stage;
pub mod styling;

// Re-export the types most callers need
pub use item::Item;
pub use mutex::{OutputMutex, OutputMutexGuard};
pub use options::{DebugOptions, Logger, verbose_flag};
pub use stage::{DebugIter, DebugStage, PipeDebug};
