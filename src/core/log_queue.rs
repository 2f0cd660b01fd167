//! Blocking FIFO hand-off between producer threads and the log worker
//!
//! [`LogQueue`] is an unbounded queue guarded by a single mutex/condvar pair.
//! Any number of threads may [`push`](LogQueue::push); exactly one consumer is
//! expected to call [`pop`](LogQueue::pop) in a loop until it returns `None`.
//!
//! # Example
//!
//! ```
//! use oak_logger::LogQueue;
//!
//! let queue = LogQueue::new();
//! queue.push("first".to_string());
//! queue.push("second".to_string());
//! queue.shutdown();
//!
//! // Items queued before shutdown are still drained
//! assert_eq!(queue.pop().as_deref(), Some("first"));
//! assert_eq!(queue.pop().as_deref(), Some("second"));
//! assert_eq!(queue.pop(), None);
//! ```

use parking_lot::{Condvar, Mutex};
use std::collections::VecDeque;

struct QueueState<T> {
    items: VecDeque<T>,
    shutting_down: bool,
}

pub struct LogQueue<T = String> {
    state: Mutex<QueueState<T>>,
    available: Condvar,
}

impl<T> LogQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(QueueState {
                items: VecDeque::new(),
                shutting_down: false,
            }),
            available: Condvar::new(),
        }
    }

    /// Append an item to the tail and wake one waiting consumer.
    ///
    /// Never fails. An item pushed after [`shutdown`](Self::shutdown) is still
    /// appended, but it is only observed if the consumer has not yet drained
    /// the queue and exited its loop. The return value is `false` for such
    /// late pushes.
    pub fn push(&self, item: T) -> bool {
        let mut state = self.state.lock();
        state.items.push_back(item);
        let open = !state.shutting_down;
        drop(state);
        self.available.notify_one();
        open
    }

    /// Block until an item is available or the queue has been shut down.
    ///
    /// Returns `Some(item)` in FIFO order while items remain, even after
    /// shutdown. Returns `None` only once shutdown is signaled and the queue
    /// is empty.
    pub fn pop(&self) -> Option<T> {
        let mut state = self.state.lock();
        // Re-checked on every wake so spurious wakeups go back to sleep
        while state.items.is_empty() && !state.shutting_down {
            self.available.wait(&mut state);
        }
        state.items.pop_front()
    }

    /// Signal shutdown and wake every waiter. Idempotent.
    pub fn shutdown(&self) {
        let mut state = self.state.lock();
        state.shutting_down = true;
        drop(state);
        self.available.notify_all();
    }

    pub fn is_shutdown(&self) -> bool {
        self.state.lock().shutting_down
    }

    pub fn len(&self) -> usize {
        self.state.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().items.is_empty()
    }
}

impl<T> Default for LogQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for LogQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("LogQueue")
            .field("len", &state.items.len())
            .field("shutting_down", &state.shutting_down)
            .finish()
    }
}
