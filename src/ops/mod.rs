pub mod item_ops;
pub mod search;
pub mod sort;
pub mod view_ops;
