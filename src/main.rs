use clap::Parser;
use flexi_logger::{AdaptiveFormat, Logger, WriteMode};
use hexchess::prelude::*;

fn main() -> Result<()>
{
    // Read the dotenv file.
    dotenvy::dotenv().ok();

    // Parse the cli options.
    let options = ServerOptions::parse();

    // Buffer the log so it never interleaves with protocol output on stdout.
    let _logger = Logger::try_with_env_or_str(options.log_level.clone())?
        .write_mode(WriteMode::BufferAndFlush)
        .log_to_stderr()
        .adaptive_format_for_stderr(AdaptiveFormat::WithThread)
        .set_palette("b196;208;195;111;67".to_owned())
        .start()?;

    print_header();

    if let Err(e) = Server::new(options).run()
    {
        log::error!("fatal error: {}", e);
    }

    Ok(())
}

fn print_header()
{
    log::info!("starting {} server v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
}
