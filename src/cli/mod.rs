mod context;
mod flags;
mod help;
mod parse;
mod prompts;
mod quiet;

pub use context::{Context, apply_flags};
pub use flags::CliFlags;
pub use help::print_help;
pub use parse::{ParseError, parse};

use crate::error::Error;

/// Run the CLI and return the process exit code.
pub fn run(args: Vec<String>) -> i32 {
    let result = Context::new(&args).and_then(|mut ctx| ctx.run());

    match result {
        Ok(()) => 0,
        Err(e) => {
            tracing::debug!("run failed: {e:?}");
            prompts::error(&e.to_string());
            exit_code(&e)
        }
    }
}

fn exit_code(err: &Error) -> i32 {
    match err {
        Error::Parse(_)
        | Error::InvalidEntropyRequest(_)
        | Error::InvalidLength(_)
        | Error::InvalidSymbols(_) => 2,
        _ => 1,
    }
}
