pub mod command;
pub mod scan;

pub use command::Command;
pub use scan::Scan;
