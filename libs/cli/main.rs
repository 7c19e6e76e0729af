use clap::Parser;

mod commands;
mod tracing;

// Note: for uniformity, we dont use clap `default_value` or `default_value_t` options
#[derive(Parser, Debug)]
#[command(
    name = "mentra",
    version,
    long_about = Some("Terminal front end for the mentra mentorship tracker.")
)]
struct Args {
    /// Base URL of the activity store service (default: "http://127.0.0.1:4117")
    #[arg(long)]
    server: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    command: commands::Command,
}

impl Args {
    fn get_server_url(&self) -> String {
        self.server
            .clone()
            .unwrap_or_else(|| "http://127.0.0.1:4117".to_owned())
    }
}

#[tokio::main]
pub async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing::setup()?;

    let args = Args::parse();
    let server_url = args.get_server_url();

    args.command.execute(server_url).await?;
    Ok(())
}
