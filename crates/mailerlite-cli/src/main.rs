//! Command-line client for the MailerLite v2 REST API.
//!
//! Every command maps onto one API call and prints the decoded payload as
//! pretty JSON on stdout. Logs go to stderr.

use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use mailerlite::{
    FieldType, FieldUpdate, MailerLiteClient, NewField, NewGroupSubscriber, StatsOptions,
    SubscriberListOptions, SubscriptionType,
};
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

// ============================================================================
// CLI Arguments
// ============================================================================

/// Command-line client for the MailerLite API.
#[derive(Parser, Debug)]
#[command(name = "mailerlite")]
#[command(version, about, long_about = None)]
struct Cli {
    /// MailerLite API key
    #[arg(long, env = "MAILERLITE_API_KEY", hide_env_values = true)]
    api_key: String,

    /// API base URL (must end with a slash)
    #[arg(long, env = "MAILERLITE_BASE_URL", default_value = mailerlite::DEFAULT_BASE_URL)]
    base_url: String,

    /// Override the User-Agent header
    #[arg(long)]
    user_agent: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Enable verbose logging (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage custom fields
    #[command(subcommand)]
    Fields(FieldsCommand),
    /// Read subscribers
    #[command(subcommand)]
    Subscribers(SubscribersCommand),
    /// Manage group membership
    #[command(subcommand)]
    Groups(GroupsCommand),
    /// Show account statistics
    Stats {
        /// Read values as of this Unix timestamp
        #[arg(long)]
        timestamp: Option<i64>,
    },
}

#[derive(Subcommand, Debug)]
enum FieldsCommand {
    /// List all fields
    List,
    /// Create a field
    Create {
        /// Field title
        #[arg(long)]
        title: String,
        /// Field type: text, number or date
        #[arg(long = "type", default_value = "text")]
        field_type: FieldType,
    },
    /// Rename a field
    Update {
        /// Field ID
        id: i64,
        /// New title
        #[arg(long)]
        title: String,
    },
    /// Delete a field
    Delete {
        /// Field ID
        id: i64,
    },
}

#[derive(Subcommand, Debug)]
enum SubscribersCommand {
    /// List subscribers
    List {
        /// Only subscribers in this state
        #[arg(long = "type")]
        subscription_type: Option<SubscriptionType>,
        /// Maximum number of subscribers
        #[arg(long)]
        limit: Option<u32>,
        /// Number of subscribers to skip
        #[arg(long)]
        offset: Option<u32>,
    },
    /// Show one subscriber
    Get {
        /// Email address or subscriber ID
        email: String,
    },
}

#[derive(Subcommand, Debug)]
enum GroupsCommand {
    /// Add a subscriber to a group
    AddSubscriber(AddSubscriberArgs),
}

#[derive(Args, Debug)]
struct AddSubscriberArgs {
    /// Group ID
    group_id: i64,
    /// Subscriber email
    #[arg(long)]
    email: String,
    /// Subscriber name
    #[arg(long)]
    name: Option<String>,
    /// Custom field value as key=value (repeatable)
    #[arg(long = "field", value_parser = parse_key_value)]
    fields: Vec<(String, String)>,
    /// Reactivate a previously unsubscribed subscriber
    #[arg(long)]
    resubscribe: bool,
    /// Trigger the group's autoresponders
    #[arg(long)]
    autoresponders: bool,
    /// Initial subscription state
    #[arg(long = "type")]
    subscription_type: Option<SubscriptionType>,
}

impl From<AddSubscriberArgs> for NewGroupSubscriber {
    fn from(args: AddSubscriberArgs) -> Self {
        let mut subscriber = NewGroupSubscriber::new(args.email);
        if let Some(name) = args.name {
            subscriber = subscriber.name(name);
        }
        for (key, value) in args.fields {
            subscriber = subscriber.field(key, value);
        }
        if args.resubscribe {
            subscriber = subscriber.resubscribe(true);
        }
        if args.autoresponders {
            subscriber = subscriber.autoresponders(true);
        }
        if let Some(kind) = args.subscription_type {
            subscriber = subscriber.subscription_type(kind);
        }
        subscriber
    }
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("Invalid field: {s}. Use key=value")),
    }
}

// ============================================================================
// Commands
// ============================================================================

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(
    client: &MailerLiteClient,
    command: Command,
    token: &CancellationToken,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Fields(cmd) => {
            let fields = client.fields().cancel_on(token);
            match cmd {
                FieldsCommand::List => {
                    let response = fields.list().await?;
                    debug!(count = response.data.len(), "Listed fields");
                    print_json(&response.data)?;
                }
                FieldsCommand::Create { title, field_type } => {
                    let response = fields.create(&NewField::new(title, field_type)).await?;
                    info!(id = %response.data.id, key = %response.data.key, "Field created");
                    print_json(&response.data)?;
                }
                FieldsCommand::Update { id, title } => {
                    let response = fields.update(id, &FieldUpdate::title(title)).await?;
                    info!(id, "Field updated");
                    print_json(&response.data)?;
                }
                FieldsCommand::Delete { id } => {
                    let response = fields.delete(id).await?;
                    info!(id, status = response.status.as_u16(), "Field deleted");
                }
            }
        }
        Command::Subscribers(cmd) => {
            let subscribers = client.subscribers().cancel_on(token);
            match cmd {
                SubscribersCommand::List {
                    subscription_type,
                    limit,
                    offset,
                } => {
                    let mut opts = SubscriberListOptions::new();
                    opts.subscription_type = subscription_type;
                    opts.page.limit = limit;
                    opts.page.offset = offset;

                    let response = subscribers.list(&opts).await?;
                    debug!(count = response.data.len(), "Listed subscribers");
                    print_json(&response.data)?;
                }
                SubscribersCommand::Get { email } => {
                    let response = subscribers.get(&email).await?;
                    print_json(&response.data)?;
                }
            }
        }
        Command::Groups(GroupsCommand::AddSubscriber(args)) => {
            let group_id = args.group_id;
            let subscriber = NewGroupSubscriber::from(args);
            debug!(group_id, email = %subscriber.email, "Adding subscriber to group");

            let response = client
                .groups()
                .cancel_on(token)
                .add_subscriber(group_id, &subscriber)
                .await?;
            info!(group_id, id = response.data.id, "Subscriber added to group");
            print_json(&response.data)?;
        }
        Command::Stats { timestamp } => {
            let opts = StatsOptions { timestamp };
            let response = client.stats().cancel_on(token).get(&opts).await?;
            print_json(&response.data)?;
        }
    }

    Ok(())
}

fn log_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG takes precedence over -v
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_directive(cli.verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut builder = MailerLiteClient::builder(cli.api_key).base_url(&cli.base_url);
    if let Some(agent) = cli.user_agent {
        builder = builder.user_agent(agent);
    }
    if let Some(secs) = cli.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = builder.build()?;
    info!(base_url = %client.base_url(), "Using MailerLite API");

    let token = CancellationToken::new();
    let ctrl_c = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling request");
            ctrl_c.cancel();
        }
    });

    run(&client, cli.command, &token).await
}
