use clap::Args;
use colored::Colorize;
use mentra_client::{ActivityClient, ActivityList};

#[derive(Args, Debug)]
pub struct Command {
    /// Identifier of the mentee
    mentee_id: String,

    /// Identifier of the activity to display
    activity_id: String,
}

pub async fn handle(command: Command, client: &ActivityClient) -> eyre::Result<()> {
    let mut list = ActivityList::new();
    list.load(client.list(&command.mentee_id).await?);

    let Some(activity) = list.select(&command.activity_id) else {
        return Err(eyre::eyre!(
            "No activity '{}' recorded for mentee '{}'",
            command.activity_id,
            command.mentee_id
        ));
    };

    println!("{}", activity.name.cyan());
    println!("Type: {}", activity.kind);
    println!("Description: {}", activity.description);
    if let Some(url) = client.file_url(activity) {
        println!("Proof: {}", url);
    }

    Ok(())
}
