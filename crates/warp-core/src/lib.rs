pub mod animator;
pub mod config;
pub mod constants;
pub mod easing;
pub mod error;
pub mod field;
pub mod phase;
pub mod pose;
pub mod projection;
pub mod render;
pub mod scripts;
pub mod state;

pub use animator::*;
pub use config::*;
pub use error::ConfigError;
pub use field::*;
pub use phase::*;
pub use pose::*;
pub use projection::*;
pub use render::*;
pub use scripts::*;
pub use state::*;
