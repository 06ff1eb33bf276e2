mod action;
mod catalog;
mod catalog_client;
mod detail;
mod event;
mod navigation_tree;

pub use action::*;
pub use catalog::*;
pub use catalog_client::*;
pub use detail::*;
pub use event::*;
pub use navigation_tree::*;
