pub mod config;
pub mod item;
pub mod list;
pub mod view;

pub use config::*;
pub use item::*;
pub use list::*;
pub use view::*;
