pub mod check;
pub mod export;
pub mod list;
pub mod render;
pub mod show;
