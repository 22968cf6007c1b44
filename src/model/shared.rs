//! Single-writer access to a city model with a FIFO edit queue
//!
//! Input handlers on any thread submit edits. Once per update cycle the
//! writer drains the queue under the write lock, so a region fill and its
//! full recompute are never observed half done by readers.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError, RwLock, RwLockReadGuard};
use std::time::{Duration, Instant};

use crate::model::city::CityModel;
use crate::model::edits::Edit;
use crate::model::timing::UpdateTimer;

/// Outcome of one update cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateReport {
    /// Edits that changed the city
    pub applied: usize,
    /// Edits that were refused or fell outside the city
    pub rejected: usize,
    /// Time spent holding the write lock
    pub elapsed: Duration,
}

/// City model shared between one writer and any number of readers
#[derive(Debug)]
pub struct SharedCity {
    model: RwLock<CityModel>,
    pending: Mutex<VecDeque<Edit>>,
    timer: Mutex<UpdateTimer>,
}

impl SharedCity {
    /// Wrap a model for shared access
    pub fn new(model: CityModel) -> Self {
        Self {
            model: RwLock::new(model),
            pending: Mutex::new(VecDeque::new()),
            timer: Mutex::new(UpdateTimer::new()),
        }
    }

    /// Queue an edit for the next update cycle
    pub fn submit(&self, edit: impl Into<Edit>) {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(edit.into());
    }

    /// Number of edits waiting for the next update cycle
    pub fn pending_len(&self) -> usize {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Apply every queued edit in submission order
    ///
    /// The queue is taken before the write lock, so edits submitted while
    /// the cycle runs wait for the next one.
    pub fn update(&self) -> UpdateReport {
        let edits = std::mem::take(
            &mut *self
                .pending
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        );

        let start = Instant::now();
        let mut report = UpdateReport::default();
        {
            let mut model = self.model.write().unwrap_or_else(PoisonError::into_inner);
            for edit in &edits {
                if model.apply(edit) {
                    report.applied += 1;
                } else {
                    report.rejected += 1;
                }
            }
        }
        report.elapsed = start.elapsed();

        let average = self
            .timer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .record(report.elapsed);

        if !edits.is_empty() {
            log::debug!(
                "Update applied {} and rejected {} edits in {:?} (average {average:?})",
                report.applied,
                report.rejected,
                report.elapsed
            );
        }
        report
    }

    /// Shared read access to the model
    pub fn read(&self) -> RwLockReadGuard<'_, CityModel> {
        self.model.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Rolling average duration of recent update cycles
    pub fn average_update_time(&self) -> Duration {
        self.timer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .average()
    }

    /// Take the model back once no other handles remain
    pub fn into_inner(self) -> CityModel {
        self.model
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
