pub mod controller;
pub mod event;
pub mod mode;
pub mod render_state;

pub use controller::Controller;
pub use event::AppEvent;
pub use mode::ReaderState;
pub use render_state::RenderState;
