pub mod scheduler;
pub mod view;

pub use scheduler::TimerScheduler;
pub use view::{InMemoryViewSurface, MenuItem, ViewError, ViewSurface};
