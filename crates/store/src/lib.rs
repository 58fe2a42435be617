use std::sync::Arc;

use shared::protocol::{Command, DispatchOutcome};
use tracing::debug;

mod ids;
mod reducer;
mod seed;
mod snapshot;

pub use ids::{IdAllocator, IdGenerator, SequentialIds, UuidIds};
pub use reducer::reduce;
pub use snapshot::{display_or_blank, Snapshot};

/// Owns the current snapshot and is the only mutation path for it.
#[derive(Debug)]
pub struct Store {
    snapshot: Arc<Snapshot>,
    ids: IdAllocator,
}

impl Store {
    pub fn new(initial: Snapshot) -> Self {
        Self::with_generator(initial, UuidIds)
    }

    pub fn with_generator(initial: Snapshot, generator: impl IdGenerator + 'static) -> Self {
        let mut ids = IdAllocator::new(generator);
        ids.reserve(initial.all_ids());
        Self {
            snapshot: Arc::new(initial),
            ids,
        }
    }

    /// The most recently committed snapshot. Later dispatches never alter it.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot)
    }

    pub fn dispatch(&mut self, command: Command) -> Arc<Snapshot> {
        self.dispatch_with_outcome(command).0
    }

    pub fn dispatch_with_outcome(&mut self, command: Command) -> (Arc<Snapshot>, DispatchOutcome) {
        let kind = command.kind();
        let (next, outcome) = reduce(&self.snapshot, command, &mut self.ids);
        if outcome.is_not_found() {
            debug!(kind, "target id not present; snapshot unchanged");
            return (self.snapshot(), outcome);
        }
        match outcome.created_id() {
            Some(id) => debug!(kind, id, "record created"),
            None => debug!(kind, "command applied"),
        }
        self.snapshot = Arc::new(next);
        (self.snapshot(), outcome)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(Snapshot::default())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
