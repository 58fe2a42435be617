use std::collections::HashSet;

use shared::domain::Record;
use uuid::Uuid;

const MAX_FRESH_ATTEMPTS: usize = 8;

pub trait IdGenerator: Send {
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs, the production default.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// `prefix-1`, `prefix-2`, ... for reproducible fixtures.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("id")
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Hands out ids that were never issued before and are absent from the target collection.
pub struct IdAllocator {
    generator: Box<dyn IdGenerator>,
    issued: HashSet<String>,
}

impl IdAllocator {
    pub fn new(generator: impl IdGenerator + 'static) -> Self {
        Self {
            generator: Box::new(generator),
            issued: HashSet::new(),
        }
    }

    /// Marks ids that already exist (e.g. from a seed) as taken.
    pub fn reserve<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        self.issued.extend(ids.into_iter().map(str::to_string));
    }

    pub fn allocate<T: Record>(&mut self, collection: &[T]) -> String {
        let taken = |issued: &HashSet<String>, candidate: &str| {
            issued.contains(candidate) || collection.iter().any(|r| r.record_id() == candidate)
        };

        let mut candidate = self.generator.next_id();
        let mut attempt = 0;
        while taken(&self.issued, &candidate) {
            attempt += 1;
            candidate = if attempt < MAX_FRESH_ATTEMPTS {
                self.generator.next_id()
            } else {
                // generator keeps colliding; disambiguate deterministically
                format!("{}-{attempt}", self.generator.next_id())
            };
        }

        self.issued.insert(candidate.clone());
        candidate
    }
}

impl std::fmt::Debug for IdAllocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdAllocator")
            .field("issued", &self.issued.len())
            .finish_non_exhaustive()
    }
}
