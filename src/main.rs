//! Contact Book - command-line entry point
//!
//! Parses arguments, runs one contact book operation against the configured
//! store file, and prints the outcome. Logs go to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use contact_book::report::contact_table;
use contact_book::{
    Config, Contact, ContactBookResult, ContactDraft, ContactRepository, ContactService,
    ContactServiceImpl, JsonFileContactRepository, Report,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "contact-book", version, about = "Manage a local contact book")]
struct Cli {
    /// Store file to use instead of CONTACTS_PATH.
    #[arg(short, long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Print reports without colors.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every contact.
    List,
    /// Show the contact with the given id.
    Get {
        #[arg(short, long)]
        id: String,
    },
    /// Add a new contact.
    Add {
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        email: Option<String>,
        #[arg(short, long)]
        phone: Option<String>,
    },
    /// Remove the contact with the given id.
    Remove {
        #[arg(short, long)]
        id: String,
    },
}

/// What a command prints on success.
enum Output {
    Contacts(Vec<Contact>),
    Report(Report),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env().context("failed to load configuration")?;
    if let Some(path) = cli.file.as_deref() {
        config = config.with_contacts_path(path);
    }
    let color = config.color && !cli.no_color;

    // Logs go to stderr so stdout only carries command output
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(path = %config.contacts_path.display(), "using contact store");

    let repository =
        Arc::new(JsonFileContactRepository::new(&config.contacts_path)) as Arc<dyn ContactRepository>;
    let service = ContactServiceImpl::new(repository);

    let report = match execute(&service, cli.command).await {
        Ok(Output::Contacts(contacts)) => {
            println!("{}", contact_table(&contacts));
            return Ok(());
        }
        Ok(Output::Report(report)) => report,
        Err(err) => {
            debug!(kind = ?err.kind(), "operation failed");
            Report::from_error(&err)
        }
    };

    if report.is_failure() {
        eprintln!("{}", report.render_for(color, &std::io::stderr()));
        std::process::exit(1);
    }
    println!("{}", report.render_for(color, &std::io::stdout()));
    Ok(())
}

async fn execute(service: &dyn ContactService, command: Command) -> ContactBookResult<Output> {
    match command {
        Command::List => Ok(Output::Contacts(service.list_contacts().await?)),
        Command::Get { id } => Ok(match service.get_contact_by_id(&id).await? {
            Some(contact) => Output::Contacts(vec![contact]),
            None => Output::Report(Report::not_found(&id)),
        }),
        Command::Add { name, email, phone } => {
            let draft = ContactDraft { name, email, phone };
            let contact = service.add_contact(draft).await?;
            Ok(Output::Report(Report::added(&contact)))
        }
        Command::Remove { id } => {
            let contact = service.remove_contact(&id).await?;
            Ok(Output::Report(Report::removed(&contact)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add_with_missing_fields() {
        let cli = Cli::try_parse_from(["contact-book", "add", "--name", "alice1"]).unwrap();
        match cli.command {
            Command::Add { name, email, phone } => {
                assert_eq!(name.as_deref(), Some("alice1"));
                assert!(email.is_none());
                assert!(phone.is_none());
            }
            _ => panic!("expected add command"),
        }
    }

    #[test]
    fn test_parse_global_file_after_subcommand() {
        let cli =
            Cli::try_parse_from(["contact-book", "remove", "--id", "42", "--file", "/tmp/c.json"])
                .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/c.json")));
        assert!(matches!(cli.command, Command::Remove { ref id } if id == "42"));
    }

    #[test]
    fn test_get_requires_id() {
        assert!(Cli::try_parse_from(["contact-book", "get"]).is_err());
    }
}
