//! Platform abstraction layer
//!
//! Browser-agnostic pieces of the frame driver:
//! - Frame timing from animation-frame timestamps
//! - Keyboard mapping onto game actions
//! - Auto-pause when the page loses visibility/focus

pub mod clock;
pub mod input;

pub use clock::FrameClock;
pub use input::{Action, KeyEvent, apply_key, auto_pause, key_action};
