use clap::Parser;
use milk::args::Cli;
use tracing::debug;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    milk::init_tracing(cli.verbose, cli.quiet);

    debug!("milk v{} starting", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", cli);

    let exit_code = milk::run(&cli).await;
    std::process::exit(exit_code);
}
