mod handlers;
mod parser;

pub use handlers::{CommandOutput, USAGE, handle_command};
pub use parser::{Command, Invocation, parse_command, parse_invocation};
