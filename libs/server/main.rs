use clap::{Parser, Subcommand};
use directories_next::ProjectDirs;
use mentra_server::{commands, core};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the activity store HTTP service
    Start(commands::start::Command),
    /// Print the server version
    Version(commands::version::Command),
}

impl Command {
    pub async fn execute(self, conf: mentra_config::Config) -> eyre::Result<()> {
        use commands::*;
        match self {
            Self::Start(o) => start::handle(o, conf).await?,
            Self::Version(o) => version::handle(o, conf).await?,
        };

        Ok(())
    }
}

// Note: for uniformity, we dont use clap `default_value` or `default_value_t` options
#[derive(Parser, Debug)]
#[command(
    name = "mentra-server",
    version,
    long_about = Some("Activity store service of the mentra mentorship tracker.")
)]
struct Args {
    /// Path of configuration file (default: "~/.config/mentra/config.toml")
    #[arg(short, long)]
    config: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Command,
}

impl Args {
    fn get_config_path(&self) -> eyre::Result<String> {
        let config_path = match &self.config {
            Some(x) => Ok(x.clone()),
            None => {
                if let Some(proj_dirs) = ProjectDirs::from("", "", "mentra") {
                    let config_dir = proj_dirs.config_dir();
                    let config_path: PathBuf = config_dir.join("config.toml");

                    config_path
                        .to_str()
                        .map(|t| t.to_owned())
                        .ok_or_else(|| eyre::eyre!("couldn't convert os path to string"))
                } else {
                    Err(eyre::eyre!("Project directories could not be found."))
                }
            }
        }?;

        Ok(shellexpand::full(&config_path)?.into_owned())
    }
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = Args::parse();
    let config_path = args.get_config_path()?;

    core::tracing::setup()?;
    color_eyre::install()?;

    let config = if std::path::Path::new(&config_path).exists() {
        mentra_config::load(&config_path).map_err(|e| {
            eyre::eyre!(
                "An error occured when trying to open the configuration file '{}': {}",
                config_path,
                e
            )
        })?
    } else {
        tracing::warn!("no configuration file at '{config_path}', using defaults");
        mentra_config::Config::default()
    };

    args.command.execute(config).await?;
    Ok(())
}
