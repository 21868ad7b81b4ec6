//! Page sections.

mod confetti;
mod countdown;
mod features;
mod footer;
mod hero;
mod local_focus;
mod registration;
mod story;
mod theme;

pub use confetti::*;
pub use countdown::*;
pub use features::*;
pub use footer::*;
pub use hero::*;
pub use local_focus::*;
pub use registration::*;
pub use story::*;
pub use theme::*;
