use clap::Subcommand;
use mentra_client::ActivityClient;

pub mod add;
pub mod list;
pub mod show;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the activities recorded for a mentee
    List(list::Command),
    /// Record a new activity for a mentee
    Add(add::Command),
    /// Display the full detail of one activity
    Show(show::Command),
}

impl Command {
    pub async fn execute(self, server_url: String) -> eyre::Result<()> {
        let client = ActivityClient::new(&server_url)?;

        match self {
            Self::List(o) => list::handle(o, &client).await?,
            Self::Add(o) => add::handle(o, &client).await?,
            Self::Show(o) => show::handle(o, &client).await?,
        };

        Ok(())
    }
}
