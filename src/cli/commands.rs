//! Command dispatch

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::Document;
use crate::exitcode;
use crate::infrastructure::ServiceContainer;
use crate::tree_traits::TreeNodeConvert;

/// Path argument that reads the document from stdin.
const STDIN_PATH: &str = "-";

/// Run the selected command and return the process exit code.
pub fn execute_command(cli: &Cli) -> CliResult<i32> {
    let Some(command) = &cli.command else {
        return Ok(exitcode::OK);
    };

    if let Commands::Completion { shell } = command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(*shell, &mut cmd, name, &mut io::stdout());
        return Ok(exitcode::OK);
    }

    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);
    let container = ServiceContainer::new(settings);

    match command {
        Commands::Get { file, query } => cmd_get(&container, file, query),
        Commands::Exists { file, query } => cmd_exists(&container, file, query),
        Commands::Count { file, query } => cmd_count(&container, file, query),
        Commands::Tree { file } => cmd_tree(&container, file),
        Commands::Config { command } => cmd_config(&container, command),
        Commands::Completion { .. } => Ok(exitcode::OK),
    }
}

fn load(container: &ServiceContainer, file: &Path) -> CliResult<Document> {
    let documents = &container.documents;
    let document = if file.as_os_str() == STDIN_PATH {
        documents.load_reader(io::stdin().lock())?
    } else {
        documents.load(file)?
    };
    Ok(document)
}

#[instrument(skip(container))]
fn cmd_get(container: &ServiceContainer, file: &Path, query: &str) -> CliResult<i32> {
    if query.is_empty() {
        return Err(CliError::Usage("query must not be empty".into()));
    }
    let document = load(container, file)?;
    let value = container.documents.get(&document, query)?;
    output::info(value.as_deref().unwrap_or_default());
    Ok(exitcode::OK)
}

#[instrument(skip(container))]
fn cmd_exists(container: &ServiceContainer, file: &Path, query: &str) -> CliResult<i32> {
    let document = load(container, file)?;
    let found = container.documents.exists(&document, query);
    output::info(&found);
    Ok(if found { exitcode::OK } else { exitcode::NOTFOUND })
}

#[instrument(skip(container))]
fn cmd_count(container: &ServiceContainer, file: &Path, query: &str) -> CliResult<i32> {
    let document = load(container, file)?;
    let count = container.documents.count(&document, query)?;
    output::info(&count);
    Ok(exitcode::OK)
}

#[instrument(skip(container))]
fn cmd_tree(container: &ServiceContainer, file: &Path) -> CliResult<i32> {
    let document = load(container, file)?;
    output::header(&file.display());
    output::info(&document.to_tree_string(container.settings.show_values));
    Ok(exitcode::OK)
}

fn cmd_config(container: &ServiceContainer, command: &ConfigCommands) -> CliResult<i32> {
    match command {
        ConfigCommands::Show => {
            let rendered = container.settings.to_toml()?;
            output::info(rendered.trim_end());
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => {
                return Err(CliError::Usage(
                    "no home directory to place a global config in".into(),
                ))
            }
        },
    }
    Ok(exitcode::OK)
}
