//! Hash table engine.
//!
//! A fixed-size table with open addressing: collisions resolve by stepping
//! to the next slot, wrapping at the end. Every operation reports the exact
//! slot sequence it probed, so a presentation layer can animate the walk.

pub mod table;

pub use table::{
    HashTable, InsertOutcome, InsertReport, ProbeOutcome, ProbeStep, SearchOutcome, SearchReport,
    DEFAULT_TABLE_SIZE,
};
