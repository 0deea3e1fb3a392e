use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a widget asked its host for a repaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidationReason {
    Sequence,
    Padding,
}

pub type InvalidationCallback = Box<dyn FnMut(InvalidationReason)>;

/// Pending-repaint bookkeeping plus the optional host hook.
///
/// Requests coalesce: any number of invalidations before the host polls
/// `take` produce a single pending repaint.
#[derive(Default)]
pub(super) struct RedrawRequests {
    pending: Option<InvalidationReason>,
    total: u64,
    callback: Option<InvalidationCallback>,
}

impl RedrawRequests {
    pub(super) fn request(&mut self, reason: InvalidationReason) {
        self.pending = Some(reason);
        self.total += 1;
        if let Some(callback) = self.callback.as_mut() {
            callback(reason);
        }
    }

    pub(super) fn take(&mut self) -> Option<InvalidationReason> {
        self.pending.take()
    }

    pub(super) fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub(super) fn total(&self) -> u64 {
        self.total
    }

    pub(super) fn set_callback(&mut self, callback: Option<InvalidationCallback>) {
        self.callback = callback;
    }
}

impl fmt::Debug for RedrawRequests {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedrawRequests")
            .field("pending", &self.pending)
            .field("total", &self.total)
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}
