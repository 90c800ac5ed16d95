pub mod breakdown;
pub mod theme;
pub mod timer;

pub use breakdown::TimeBreakdown;
pub use theme::{Preferences, Theme};
pub use timer::Timer;
