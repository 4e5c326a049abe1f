pub mod console;
pub mod session;

pub use console::Console;
pub use session::Session;
