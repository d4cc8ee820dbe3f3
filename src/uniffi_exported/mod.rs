mod networking;
mod request_helper;
mod session;
mod ui;

pub use networking::*;
pub use request_helper::*;
pub use session::*;
pub use ui::*;
