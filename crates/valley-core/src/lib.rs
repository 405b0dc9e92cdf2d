pub mod constants;
mod content;
pub mod dispatch;
pub mod error;
pub mod layout;
pub mod machine;
pub mod navigator;
pub mod registry;
pub mod scene;
pub mod state;
pub mod view;

pub use constants::*;
pub use dispatch::*;
pub use error::*;
pub use layout::*;
pub use machine::*;
pub use navigator::*;
pub use registry::*;
pub use scene::*;
pub use state::*;
pub use view::*;
