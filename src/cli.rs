//! Command Line Interface
//!
//! Subcommand definitions and their dispatch onto `WitClient`.

use anyhow::{Context, Result};
use clap::{Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use witai::{DictationRequest, MessageRequest, Speech, WitClient};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn render<T: Serialize + ?Sized>(self, value: &T) -> Result<String> {
        let text = match self {
            OutputFormat::Json => serde_json::to_string_pretty(value)?,
            OutputFormat::Yaml => serde_yaml::to_string(value)?,
        };
        Ok(text.trim_end().to_string())
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage apps
    #[command(subcommand)]
    Apps(AppsCommand),

    /// Manage entities
    #[command(subcommand)]
    Entities(EntitiesCommand),

    /// Manage intents
    #[command(subcommand)]
    Intents(IntentsCommand),

    /// Manage traits
    #[command(subcommand)]
    Traits(TraitsCommand),

    /// Inspect training utterances
    #[command(subcommand)]
    Utterances(UtterancesCommand),

    /// Extract meaning from text
    Message {
        text: String,
        /// Maximum number of results per kind
        #[arg(long)]
        n: Option<u32>,
        /// App tag to query instead of the live version
        #[arg(long)]
        tag: Option<String>,
    },

    /// Extract meaning from an audio file
    Speech {
        file: PathBuf,
        /// Audio MIME type, e.g. audio/wav
        #[arg(long)]
        content_type: String,
        #[arg(long)]
        n: Option<u32>,
        #[arg(long)]
        tag: Option<String>,
    },

    /// Transcribe an audio file
    Dictation {
        file: PathBuf,
        #[arg(long)]
        content_type: String,
    },

    /// Detect the language of a text
    Language { text: String },

    /// Print the download URI of an app backup
    Export,

    /// Save connection settings given as global flags
    Configure,
}

#[derive(Subcommand, Debug)]
pub enum AppsCommand {
    List {
        #[arg(long, default_value_t = 10, allow_hyphen_values = true)]
        limit: i64,
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i64,
    },
    Get { id: String },
    Delete { id: String },
    /// List an app's tags
    Tags { id: String },
}

#[derive(Subcommand, Debug)]
pub enum EntitiesCommand {
    List,
    Get { name: String },
    Delete { name: String },
}

#[derive(Subcommand, Debug)]
pub enum IntentsCommand {
    List,
    Get { name: String },
    Create { name: String },
    Delete { name: String },
}

#[derive(Subcommand, Debug)]
pub enum TraitsCommand {
    List,
    Get { name: String },
    Delete { name: String },
}

#[derive(Subcommand, Debug)]
pub enum UtterancesCommand {
    List {
        #[arg(long, default_value_t = 10, allow_hyphen_values = true)]
        limit: i64,
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i64,
    },
}

#[derive(Serialize)]
struct Deleted<'a> {
    deleted: &'a str,
}

async fn read_audio(file: &Path) -> Result<Vec<u8>> {
    tokio::fs::read(file)
        .await
        .with_context(|| format!("Failed to read audio file {:?}", file))
}

/// Run one API command and render its result
pub async fn run(client: &WitClient, command: Command, output: OutputFormat) -> Result<String> {
    tracing::debug!("Running {:?}", command);

    match command {
        Command::Apps(cmd) => match cmd {
            AppsCommand::List { limit, offset } => {
                output.render(&client.list_apps(limit, offset).await?)
            }
            AppsCommand::Get { id } => output.render(&client.get_app(&id).await?),
            AppsCommand::Delete { id } => {
                client.delete_app(&id).await?;
                output.render(&Deleted { deleted: &id })
            }
            AppsCommand::Tags { id } => output.render(&client.list_app_tags(&id).await?),
        },
        Command::Entities(cmd) => match cmd {
            EntitiesCommand::List => output.render(&client.list_entities().await?),
            EntitiesCommand::Get { name } => output.render(&client.get_entity(&name).await?),
            EntitiesCommand::Delete { name } => {
                client.delete_entity(&name).await?;
                output.render(&Deleted { deleted: &name })
            }
        },
        Command::Intents(cmd) => match cmd {
            IntentsCommand::List => output.render(&client.list_intents().await?),
            IntentsCommand::Get { name } => output.render(&client.get_intent(&name).await?),
            IntentsCommand::Create { name } => output.render(&client.create_intent(&name).await?),
            IntentsCommand::Delete { name } => {
                client.delete_intent(&name).await?;
                output.render(&Deleted { deleted: &name })
            }
        },
        Command::Traits(cmd) => match cmd {
            TraitsCommand::List => output.render(&client.list_traits().await?),
            TraitsCommand::Get { name } => output.render(&client.get_trait(&name).await?),
            TraitsCommand::Delete { name } => {
                client.delete_trait(&name).await?;
                output.render(&Deleted { deleted: &name })
            }
        },
        Command::Utterances(UtterancesCommand::List { limit, offset }) => {
            output.render(&client.list_utterances(limit, offset).await?)
        }
        Command::Message { text, n, tag } => {
            let req = MessageRequest {
                n,
                tag,
                ..MessageRequest::new(text)
            };
            output.render(&client.parse(&req).await?)
        }
        Command::Speech {
            file,
            content_type,
            n,
            tag,
        } => {
            let audio = read_audio(&file).await?;
            let req = MessageRequest {
                n,
                tag,
                ..Default::default()
            };
            let response = client
                .speech(&req, Speech::new(audio, content_type))
                .await?;
            output.render(&response)
        }
        Command::Dictation { file, content_type } => {
            let audio = read_audio(&file).await?;
            let response = client
                .dictation(DictationRequest::new(audio, content_type))
                .await?;
            output.render(&response)
        }
        Command::Language { text } => output.render(&client.detect_language(&text).await?),
        Command::Export => Ok(client.export().await?),
        Command::Configure => anyhow::bail!("configure does not talk to the API"),
    }
}
