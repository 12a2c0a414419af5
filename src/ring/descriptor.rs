use crate::error::RingError;

/// Index metadata for a circular buffer, kept separate from the element
/// storage so the same arithmetic serves an owned in-process ring and a
/// snapshot loaded from another execution context.
///
/// One slot is always sacrificed to tell a full ring apart from an empty one
/// using only the two indices, so callers can hold at most
/// `capacity - 1` items at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RingDescriptor {
    capacity: u32,
    start: u32,
    end: u32,
    step: u32,
}

impl RingDescriptor {
    pub const fn new(capacity: u32) -> Self {
        Self {
            capacity,
            start: 0,
            end: 0,
            step: 0,
        }
    }

    #[inline(always)]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    #[inline(always)]
    pub const fn start(&self) -> u32 {
        self.start
    }

    #[inline(always)]
    pub const fn end(&self) -> u32 {
        self.end
    }

    /// Element stride in bytes. Informational only; never read back by the
    /// queue once set.
    #[inline(always)]
    pub const fn step(&self) -> u32 {
        self.step
    }

    pub fn set_capacity(&mut self, capacity: u32) {
        self.capacity = capacity;
    }

    pub fn set_start(&mut self, start: u32) {
        self.start = start;
    }

    pub fn set_end(&mut self, end: u32) {
        self.end = end;
    }

    pub fn set_step(&mut self, step: u32) {
        self.step = step;
    }

    /// Number of occupied slots.
    #[inline(always)]
    pub const fn len(&self) -> u32 {
        if self.capacity == 0 {
            0
        } else if self.end >= self.start {
            // standard case
            self.end - self.start
        } else {
            // wrapping case
            (self.capacity - self.start) + self.end
        }
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline(always)]
    pub const fn is_full(&self) -> bool {
        self.capacity != 0 && self.len() == self.capacity - 1
    }

    /// Maximum number of items the ring can hold at once.
    #[inline(always)]
    pub const fn usable_capacity(&self) -> u32 {
        self.capacity.saturating_sub(1)
    }

    #[inline(always)]
    pub const fn free_len(&self) -> u32 {
        self.usable_capacity().saturating_sub(self.len())
    }

    #[inline(always)]
    pub fn advance_start(&mut self) {
        self.start = (self.start + 1) % self.capacity;
    }

    #[inline(always)]
    pub fn advance_end(&mut self) {
        self.end = (self.end + 1) % self.capacity;
    }

    /// Checks that the descriptor can safely index element storage of
    /// `capacity` slots. Required before trusting a snapshot that crossed a
    /// transport, since the far side's initialization is taken on faith.
    pub fn validate(&self) -> Result<(), RingError> {
        if self.capacity < 2 {
            return Err(RingError::InvalidCapacity(self.capacity));
        }

        if self.start >= self.capacity || self.end >= self.capacity {
            return Err(RingError::IndexOutOfBounds {
                start: self.start,
                end: self.end,
                capacity: self.capacity,
            });
        }

        Ok(())
    }
}
