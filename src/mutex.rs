//! Mutual exclusion for output spans across concurrent debug stages.
//!
//! When several pipeline branches each carry their own debug stage and log
//! to the same terminal, their output interleaves. Sharing one
//! `OutputMutex` across those stages serializes the whole span from a
//! stage's first per-item line through its summary line.

use std::sync::{Arc, Condvar, Mutex};

/// A cloneable binary lock guarding a contiguous span of output.
///
/// Acquisition blocks indefinitely; there is no timeout or deadlock
/// detection. Wakeup order among waiters is whatever `Condvar` provides.
#[derive(Clone)]
pub struct OutputMutex {
    state: Arc<(Mutex<bool>, Condvar)>,
}

/// RAII guard that releases the lock on drop.
pub struct OutputMutexGuard {
    state: Arc<(Mutex<bool>, Condvar)>,
}

impl OutputMutex {
    pub fn new() -> Self {
        Self {
            state: Arc::new((Mutex::new(false), Condvar::new())),
        }
    }

    /// Acquire the lock, blocking until it is free.
    ///
    /// Returns a guard that releases the lock when dropped.
    pub fn lock(&self) -> OutputMutexGuard {
        let (lock, cvar) = &*self.state;
        let mut held = lock.lock().unwrap();

        while *held {
            held = cvar.wait(held).unwrap();
        }
        *held = true;

        OutputMutexGuard {
            state: Arc::clone(&self.state),
        }
    }

    /// Try to acquire the lock without blocking.
    ///
    /// Returns Some(guard) if successful, None if another holder has it.
    pub fn try_lock(&self) -> Option<OutputMutexGuard> {
        let (lock, _) = &*self.state;
        let mut held = lock.lock().unwrap();

        if *held {
            None
        } else {
            *held = true;
            Some(OutputMutexGuard {
                state: Arc::clone(&self.state),
            })
        }
    }
}

impl Default for OutputMutex {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for OutputMutexGuard {
    fn drop(&mut self) {
        let (lock, cvar) = &*self.state;
        let mut held = lock.lock().unwrap();
        *held = false;
        cvar.notify_one();
    }
}
