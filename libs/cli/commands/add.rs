use clap::Args;
use colored::Colorize;
use mentra_client::{ActivityClient, ActivityForm};

#[derive(Args, Debug)]
pub struct Command {
    /// Identifier of the mentee the activity belongs to
    mentee_id: String,

    /// Name of the activity
    #[clap(short, long)]
    name: Option<String>,

    /// Type of the activity (free text, e.g. "Sports")
    #[clap(short, long)]
    r#type: Option<String>,

    /// What the mentee accomplished
    #[clap(short, long)]
    description: Option<String>,

    /// Path of a PDF proof document to attach
    #[clap(long)]
    pdf: Option<String>,
}

pub async fn handle(command: Command, client: &ActivityClient) -> eyre::Result<()> {
    let mut form = ActivityForm::new(command.mentee_id);
    if let Some(name) = command.name {
        form.set_name(name);
    }
    if let Some(kind) = command.r#type {
        form.set_kind(kind);
    }
    if let Some(description) = command.description {
        form.set_description(description);
    }
    if let Some(path) = &command.pdf {
        let bytes = std::fs::read(path)
            .map_err(|e| eyre::eyre!("Couldn't read pdf file '{path}': {e}"))?;
        let file_name = std::path::Path::new(path)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload.pdf")
            .to_owned();
        form.attach_pdf(file_name, bytes);
    }

    let Some(request) = form.submission() else {
        let errors = form.errors();
        for message in [&errors.name, &errors.kind, &errors.description]
            .into_iter()
            .flatten()
        {
            eprintln!("{}", message.red());
        }
        return Err(eyre::eyre!("All fields are required"));
    };

    let activity = client.create(request).await?;

    println!("{}", activity.name.cyan());
    println!("Id: {}", activity.id);
    if let Some(url) = client.file_url(&activity) {
        println!("Proof: {}", url);
    }

    Ok(())
}
