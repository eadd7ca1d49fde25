pub mod event;
pub mod ids;
pub mod section;

pub use event::{ActivationOrigin, NavEvent, NavKey, Timer};
pub use ids::SectionId;
pub use section::{NavigationEntry, Section, SectionInfo};
