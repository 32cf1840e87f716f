//! Bounded sample buffering between a push-style source and the
//! single consumer.
//!
//! ## Purpose
//!
//! This module provides `SampleQueue`, a fixed-capacity FIFO that sits
//! between a motion source delivering samples at sensor rate and the
//! single serialized consumer that integrates them. The queue enforces
//! an explicit drop-oldest policy when the consumer cannot keep pace.
//!
//! ## Design notes
//!
//! * **Storage**: Uses a fixed-size circular buffer (VecDeque).
//! * **Eviction**: Automatically evicts the oldest sample when capacity
//!   is reached, and counts every eviction.
//! * **Single consumer**: The queue itself is not a synchronization
//!   primitive; wrap it in whatever mutex the surrounding system uses.
//!
//! ## Invariants
//!
//! * Queue length never exceeds capacity.
//! * Samples are popped in insertion order (oldest first).
//! * The dropped-sample counter is monotonically non-decreasing until
//!   `clear`.
//!
//! ## Non-goals
//!
//! * This queue does not reorder, merge, or deduplicate samples.
//! * This queue does not block; overflow is resolved by eviction.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::VecDeque;
#[cfg(feature = "std")]
use std::collections::VecDeque;

// Internal dependencies
use crate::primitives::errors::KinelabError;
use crate::primitives::sample::MotionSample;

// ============================================================================
// Sample Queue
// ============================================================================

/// Minimum sensible queue capacity.
const MIN_CAPACITY: usize = 1;

/// Bounded FIFO of motion samples with a drop-oldest overflow policy.
#[derive(Debug, Clone)]
pub struct SampleQueue<T> {
    queue: VecDeque<MotionSample<T>>,
    capacity: usize,
    dropped: u64,
}

impl<T> SampleQueue<T> {
    /// Create a queue holding at most `capacity` samples.
    pub fn with_capacity(capacity: usize) -> Result<Self, KinelabError> {
        if capacity < MIN_CAPACITY {
            return Err(KinelabError::InvalidQueueCapacity {
                got: capacity,
                min: MIN_CAPACITY,
            });
        }
        Ok(Self {
            queue: VecDeque::with_capacity(capacity),
            capacity,
            dropped: 0,
        })
    }

    /// Push a sample, evicting the oldest one if the queue is full.
    ///
    /// Returns the evicted sample, if any.
    pub fn push(&mut self, sample: MotionSample<T>) -> Option<MotionSample<T>> {
        let evicted = if self.queue.len() == self.capacity {
            self.dropped += 1;
            self.queue.pop_front()
        } else {
            None
        };
        self.queue.push_back(sample);
        evicted
    }

    /// Pop the oldest sample.
    pub fn pop(&mut self) -> Option<MotionSample<T>> {
        self.queue.pop_front()
    }

    /// Number of samples currently buffered.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Maximum number of samples the queue retains.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total number of samples evicted since creation or last `clear`.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Discard all buffered samples and reset the dropped counter.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.dropped = 0;
    }
}
