//! Script replay for the navstack controller
//!
//! Library half of the `navstack` binary, kept separate so the replay logic
//! can be tested without spawning a process.

pub mod replay;
pub mod script;

pub use replay::{list_kinds, replay};
pub use script::{Script, ScreenRef, Step};
