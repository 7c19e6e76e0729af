use clap::Args;
use mentra_config::Config;

#[derive(Args, Debug)]
pub struct Command {}

pub async fn handle(_: Command, _config: Config) -> eyre::Result<()> {
    println!("mentra-server {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
