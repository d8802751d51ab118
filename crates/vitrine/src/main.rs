use clap::Parser;
use color_eyre::Result;

use vitrine::app::App;
use vitrine::cli::Cli;
use vitrine::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    vitrine::errors::init()?;
    vitrine::logging::init()?;

    vitrine::config::ensure_data_and_config_dirs_exist()?;
    let config = Config::new()?;
    let mut app = App::new(args, config)?;
    app.run().await?;
    Ok(())
}
