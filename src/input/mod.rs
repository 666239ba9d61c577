pub mod handler;

pub use handler::{InputHandler, IntentSampler, KeyAction};
