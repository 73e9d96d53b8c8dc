//! Reorder Buffer (ROB) for in-order retirement.
//!
//! The ROB is a circular buffer tracking every instruction from rename
//! through retire. It provides:
//! 1. **Allocation:** Assigns tags in program order at the tail.
//! 2. **Completion:** Writeback marks a slot ready once the result exists.
//! 3. **In-order retire:** Slots are reclaimed from the head in program order.
//!
//! A tag is the slot index, so presence is a circular range test against
//! `head`/`tail` and the explicit `full` flag rather than a search.

/// Tag identifying an in-flight instruction; equal to its ROB slot index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct RobTag(pub usize);

/// A single ROB slot.
#[derive(Clone, Debug, Default)]
pub struct RobEntry {
    /// Tag of this slot.
    pub tag: RobTag,
    /// Architectural destination register of the occupying instruction.
    pub dest: Option<usize>,
    /// Set by writeback; retire only reclaims ready slots.
    pub ready: bool,
}

/// Reorder buffer: circular slot array with head, tail, and a full flag.
///
/// `head == tail` is ambiguous between empty and full, so the flag
/// disambiguates: it is set when an allocation advances the tail onto the
/// head and cleared by any retirement.
pub struct Rob {
    entries: Vec<RobEntry>,
    head: usize,
    tail: usize,
    full: bool,
}

impl Rob {
    /// Creates a new ROB with the given capacity.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "ROB capacity must be positive");
        let mut entries = Vec::with_capacity(capacity);
        for index in 0..capacity {
            entries.push(RobEntry {
                tag: RobTag(index),
                ..Default::default()
            });
        }
        Self {
            entries,
            head: 0,
            tail: 0,
            full: false,
        }
    }

    /// Returns the ROB capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Returns the number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        if self.full {
            self.entries.len()
        } else if self.tail >= self.head {
            self.tail - self.head
        } else {
            self.entries.len() - self.head + self.tail
        }
    }

    /// Returns true if the ROB is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail && !self.full
    }

    /// Returns true if the ROB is full.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Returns the number of free slots.
    #[inline]
    pub fn free_slots(&self) -> usize {
        self.entries.len() - self.len()
    }

    /// Allocates the slot at the tail and returns its tag.
    ///
    /// The caller guards on [`Rob::free_slots`]; allocating into a full ROB
    /// is a stage-ordering bug.
    pub fn allocate(&mut self, dest: Option<usize>) -> RobTag {
        debug_assert!(!self.is_full(), "ROB allocate with no free slot");

        let tag = RobTag(self.tail);
        self.entries[self.tail] = RobEntry {
            tag,
            dest,
            ready: false,
        };
        self.tail = (self.tail + 1) % self.entries.len();
        if self.tail == self.head {
            self.full = true;
        }
        tag
    }

    /// Whether the slot for `tag` is currently occupied.
    ///
    /// A tag whose producer has already retired is absent even though the
    /// slot may since have been reallocated to a younger instruction.
    pub fn contains(&self, tag: RobTag) -> bool {
        if tag.0 >= self.entries.len() || self.is_empty() {
            return false;
        }
        if self.full {
            return true;
        }
        if self.tail > self.head {
            tag.0 >= self.head && tag.0 < self.tail
        } else {
            tag.0 >= self.head || tag.0 < self.tail
        }
    }

    /// Returns the occupied slot for `tag`, if present.
    pub fn get(&self, tag: RobTag) -> Option<&RobEntry> {
        if self.contains(tag) {
            Some(&self.entries[tag.0])
        } else {
            None
        }
    }

    /// Marks the slot for `tag` as ready to retire.
    pub fn set_ready(&mut self, tag: RobTag) {
        debug_assert!(self.contains(tag), "ROB ready bit set on a free slot");
        self.entries[tag.0].ready = true;
    }

    /// Returns the oldest occupied slot, if any.
    pub fn peek_head(&self) -> Option<&RobEntry> {
        if self.is_empty() {
            None
        } else {
            Some(&self.entries[self.head])
        }
    }

    /// Reclaims the head slot and returns its contents.
    pub fn retire_head(&mut self) -> RobEntry {
        debug_assert!(!self.is_empty(), "ROB retire from an empty buffer");
        debug_assert!(
            self.entries[self.head].ready,
            "ROB retire of a slot that never completed"
        );

        let entry = self.entries[self.head].clone();
        self.head = (self.head + 1) % self.entries.len();
        self.full = false;
        entry
    }
}
