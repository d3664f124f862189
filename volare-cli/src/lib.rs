pub mod session;
pub mod shell;
pub mod terminal;

pub use session::Session;
pub use shell::{ExitReason, Shell};
pub use terminal::Terminal;
