use std::env;

use entropass::{cli, exits};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::new(
            env::var("ENTROPASS_LOG").unwrap_or_else(|_| "entropass=warn".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() {
    exits::install_handlers();
    exits::disable_core_dumps();
    init_tracing();

    let code = cli::run(env::args().collect());
    std::process::exit(code);
}
