use chrono::{DateTime, Local};
use clap::Args;
use mentra_client::ActivityClient;
use prettytable::{row, Table};

#[derive(Args, Debug)]
pub struct Command {
    /// Identifier of the mentee
    mentee_id: String,
}

pub async fn handle(command: Command, client: &ActivityClient) -> eyre::Result<()> {
    let activities = client.list(&command.mentee_id).await?;

    if activities.is_empty() {
        println!("No activities recorded for '{}'.", command.mentee_id);
        return Ok(());
    }

    let mut table = Table::new();
    table.add_row(row!["ID", "NAME", "TYPE", "RECORDED", "PROOF"]);

    for activity in &activities {
        table.add_row(row![
            activity.id,
            activity.name,
            activity.kind,
            format_timestamp(activity.created_at),
            if activity.pdf_path.is_some() { "pdf" } else { "-" },
        ]);
    }

    table.printstd();
    Ok(())
}

fn format_timestamp(unix_ms: u64) -> String {
    DateTime::from_timestamp_millis(unix_ms as i64)
        .map(|utc| {
            utc.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
                .to_string()
        })
        .unwrap_or_else(|| "-".to_owned())
}
