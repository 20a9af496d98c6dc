use anyhow::Result;
use po_summary::cli::Cli;
use po_summary::logging::setup_logger;

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logger(cli.common.log_level.as_deref());
    cli.execute()
}
