//! Scroll and timer driven presentation logic, kept free of DOM access
//! except for the document scroll lock.

pub mod counter;
pub mod interpolate;
pub mod scroll_lock;
pub mod sequencer;

pub use scroll_lock::{document_lock, ScrollLock, ScrollLockGuard};
pub use sequencer::{CardFrame, ScrollSequencer, SectionBounds, WheelOutcome};
