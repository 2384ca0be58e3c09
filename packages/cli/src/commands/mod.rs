pub mod init;
pub mod kinds;
pub mod render;

pub use init::{init, InitArgs};
pub use kinds::{kinds, KindsArgs};
pub use render::{render, RenderArgs};
