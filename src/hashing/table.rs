//! Linear-probing hash table with probe traces.

use log::debug;

use crate::error::{Error, Result};

/// Default slot count. Prime, so the visual distribution of `key % size`
/// stays interesting for small demos.
pub const DEFAULT_TABLE_SIZE: usize = 11;

/// What one probe found at its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The slot was empty. Terminal: insert stores here, search gives up.
    Empty,
    /// The slot holds the probed key. Terminal for insert and search.
    Match,
    /// The slot holds a different key; probing continues at the next slot.
    Collision,
}

/// One slot visit during an insert or search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeStep {
    pub index: usize,
    pub outcome: ProbeOutcome,
}

/// Result of an insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The key was stored at `index`.
    Inserted { index: usize },
    /// The key already sat at `index`; the table is unchanged.
    AlreadyPresent { index: usize },
    /// Every slot is occupied by some other key; the table is unchanged.
    Full,
}

/// Result of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Found { index: usize },
    NotFound,
}

/// An insert's probe sequence plus its outcome.
#[derive(Debug, Clone)]
pub struct InsertReport {
    pub probes: Vec<ProbeStep>,
    pub outcome: InsertOutcome,
}

/// A search's probe sequence plus its outcome.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub probes: Vec<ProbeStep>,
    pub outcome: SearchOutcome,
}

/// Fixed-size hash table storing `u32` keys with linear probing.
///
/// The probe step of 1 is coprime with every table size, so a probe
/// sequence visits each slot exactly once before it would repeat; both
/// operations stop after `size` probes at the latest.
#[derive(Debug, Clone)]
pub struct HashTable {
    slots: Vec<Option<u32>>,
}

impl HashTable {
    /// Create a table with `size` slots.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TableSize`] when `size` is zero.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::TableSize);
        }
        Ok(Self {
            slots: vec![None; size],
        })
    }

    /// Create a table with [`DEFAULT_TABLE_SIZE`] slots.
    pub fn with_default_size() -> Self {
        Self {
            slots: vec![None; DEFAULT_TABLE_SIZE],
        }
    }

    /// Home slot for a key: `key % size`.
    pub fn hash(&self, key: u32) -> usize {
        key as usize % self.slots.len()
    }

    /// Insert a key, probing from its home slot.
    ///
    /// The report lists every probed slot including the terminal one. A
    /// duplicate key and a full table both leave the slots untouched.
    pub fn insert(&mut self, key: u32) -> InsertReport {
        let mut probes = Vec::new();
        let mut index = self.hash(key);
        for _ in 0..self.slots.len() {
            match self.slots[index] {
                None => {
                    probes.push(ProbeStep {
                        index,
                        outcome: ProbeOutcome::Empty,
                    });
                    self.slots[index] = Some(key);
                    debug!("inserted {key} at slot {index} after {} probes", probes.len());
                    return InsertReport {
                        probes,
                        outcome: InsertOutcome::Inserted { index },
                    };
                }
                Some(existing) if existing == key => {
                    probes.push(ProbeStep {
                        index,
                        outcome: ProbeOutcome::Match,
                    });
                    return InsertReport {
                        probes,
                        outcome: InsertOutcome::AlreadyPresent { index },
                    };
                }
                Some(_) => {
                    probes.push(ProbeStep {
                        index,
                        outcome: ProbeOutcome::Collision,
                    });
                    index = (index + 1) % self.slots.len();
                }
            }
        }
        debug!("insert of {key} found no free slot");
        InsertReport {
            probes,
            outcome: InsertOutcome::Full,
        }
    }

    /// Search for a key, probing from its home slot.
    ///
    /// Stops at the first empty slot (the key cannot sit beyond it) or
    /// after a full cycle of occupied slots.
    pub fn search(&self, key: u32) -> SearchReport {
        let mut probes = Vec::new();
        let mut index = self.hash(key);
        for _ in 0..self.slots.len() {
            match self.slots[index] {
                None => {
                    probes.push(ProbeStep {
                        index,
                        outcome: ProbeOutcome::Empty,
                    });
                    return SearchReport {
                        probes,
                        outcome: SearchOutcome::NotFound,
                    };
                }
                Some(existing) if existing == key => {
                    probes.push(ProbeStep {
                        index,
                        outcome: ProbeOutcome::Match,
                    });
                    return SearchReport {
                        probes,
                        outcome: SearchOutcome::Found { index },
                    };
                }
                Some(_) => {
                    probes.push(ProbeStep {
                        index,
                        outcome: ProbeOutcome::Collision,
                    });
                    index = (index + 1) % self.slots.len();
                }
            }
        }
        SearchReport {
            probes,
            outcome: SearchOutcome::NotFound,
        }
    }

    /// Clear every slot.
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }

    // ========== Accessors ==========

    /// Number of slots.
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Whether the table holds no keys.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_none())
    }

    /// Whether every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_some())
    }

    /// The raw slots, for rendering.
    pub fn slots(&self) -> &[Option<u32>] {
        &self.slots
    }
}
