pub mod aggregate;
pub mod normalize;
pub mod render;
pub mod reorder;
pub mod table;

pub mod error;
