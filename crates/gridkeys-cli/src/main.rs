// Gridkeys CLI Entry Point

use clap::Parser;
use gridkeys_cli::{output, router::Cli, router::CommandRouter};

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    if let Err(e) = CommandRouter::dispatch(cli) {
        output::print_error(&e.report(verbose));
        std::process::exit(1);
    }
}
