pub mod autoplay;
pub mod live;
pub mod replay;

pub use autoplay::AutoplayMode;
pub use live::LiveMode;
pub use replay::{ReplayMode, ReplayReport, ReplayScript};
