pub mod actions;
mod app_state;
pub mod events;
mod tree_view;

pub use actions::ActionsService;
pub use app_state::*;
pub use events::EventsService;
pub use tree_view::*;
