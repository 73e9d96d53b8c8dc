//! Register Mapping Table (RMT) for register renaming.
//!
//! Maps each architectural register to the ROB tag of its youngest in-flight
//! producer, or nothing if the value is in the architectural register file.
//! Rename is the only writer of mappings; retire is the only remover, and it
//! removes a mapping only while it still points at the retiring instruction.

use std::collections::HashMap;

use crate::pipeline::rob::RobTag;

/// Architectural-register to ROB-tag map.
#[derive(Debug, Default)]
pub struct RegisterMap {
    table: HashMap<usize, RobTag>,
}

impl RegisterMap {
    /// Creates an empty mapping table.
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Marks `reg` as produced by the instruction holding `tag`, overwriting
    /// any older mapping.
    pub fn set_producer(&mut self, reg: usize, tag: RobTag) {
        self.table.insert(reg, tag);
    }

    /// Returns the tag of the youngest in-flight producer of `reg`, or `None`
    /// if the value is architectural.
    pub fn get_producer(&self, reg: usize) -> Option<RobTag> {
        self.table.get(&reg).copied()
    }

    /// Removes the mapping for `reg`, but only if it still equals `tag`.
    /// A mapping overwritten by a younger rename is left in place.
    pub fn clear_if_match(&mut self, reg: usize, tag: RobTag) {
        if self.table.get(&reg) == Some(&tag) {
            self.table.remove(&reg);
        }
    }

    /// Number of live mappings.
    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if no register is currently renamed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
