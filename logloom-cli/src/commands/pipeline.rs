//! Pipeline command handlers
//!
//! Drives the pipeline editor against the JSON-backed record list:
//! listing, creating and editing pipelines.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use logloom_core::domain::pipeline::PipelineRecord;
use logloom_editor::{ActionMode, PipelineEditor, Submission};

use crate::config::Config;
use crate::store;

/// Pipeline subcommands
#[derive(Subcommand)]
pub enum PipelineCommands {
    /// Create a new pipeline
    Add {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Description text
        #[arg(short, long)]
        description: Option<String>,

        /// Filter expression selecting the logs this pipeline applies to
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// List all pipelines in order
    List,
    /// Edit an existing pipeline
    Edit {
        /// Id of the pipeline to edit
        id: String,

        /// New display name
        #[arg(short, long)]
        name: Option<String>,

        /// New description text
        #[arg(short, long)]
        description: Option<String>,

        /// New filter expression
        #[arg(short, long)]
        filter: Option<String>,
    },
}

/// Handle pipeline commands
pub fn handle_pipeline_command(command: PipelineCommands, config: &Config) -> Result<()> {
    match command {
        PipelineCommands::Add {
            name,
            description,
            filter,
        } => add_pipeline(config, name, description, filter),
        PipelineCommands::List => list_pipelines(config),
        PipelineCommands::Edit {
            id,
            name,
            description,
            filter,
        } => edit_pipeline(config, &id, name, description, filter),
    }
}

/// Create a new pipeline and append it to the list
fn add_pipeline(
    config: &Config,
    name: String,
    description: Option<String>,
    filter: Option<String>,
) -> Result<()> {
    let mut records = store::load(&config.file)?;

    let mut editor = PipelineEditor::new(config.user.as_deref());
    editor.set_action(Some(ActionMode::AddPipeline), None);
    editor.form.name = name;
    editor.form.description = description.unwrap_or_default();
    editor.form.filter = filter.unwrap_or_default();

    let outcome = editor.submit(&mut records)?;
    store::save(&config.file, &records)?;

    if let Submission::Added(record) = outcome {
        println!("{}", "✓ Pipeline created".green().bold());
        print_record(&record);
    }

    Ok(())
}

/// Edit an existing pipeline in place
fn edit_pipeline(
    config: &Config,
    id: &str,
    name: Option<String>,
    description: Option<String>,
    filter: Option<String>,
) -> Result<()> {
    let mut records = store::load(&config.file)?;

    let selected = records
        .iter()
        .find(|record| record.id == id)
        .cloned()
        .with_context(|| format!("no pipeline with id {}", id))?;

    let mut editor = PipelineEditor::new(config.user.as_deref());
    editor.set_action(Some(ActionMode::EditPipeline), Some(selected));

    // The form is pre-filled from the record; absent flags keep the
    // current values.
    if let Some(name) = name {
        editor.form.name = name;
    }
    if let Some(description) = description {
        editor.form.description = description;
    }
    if let Some(filter) = filter {
        editor.form.filter = filter;
    }

    let outcome = editor.submit(&mut records)?;
    store::save(&config.file, &records)?;

    if let Submission::Updated(record) = outcome {
        println!("{}", "✓ Pipeline updated".green().bold());
        print_record(&record);
    }

    Ok(())
}

/// List the pipelines in their stored order
fn list_pipelines(config: &Config) -> Result<()> {
    let records = store::load(&config.file)?;

    if records.is_empty() {
        println!("{}", "No pipelines found.".yellow());
        return Ok(());
    }

    println!("{}", format!("Found {} pipeline(s):", records.len()).bold());
    println!();
    for record in &records {
        print_record(record);
    }

    Ok(())
}

fn print_record(record: &PipelineRecord) {
    let status = if record.enabled {
        "enabled".green()
    } else {
        "disabled".yellow()
    };

    println!(
        "{} {} ({})",
        format!("[{}]", record.order_id).dimmed(),
        record.name.bold(),
        status
    );
    println!("    id:      {}", record.id.cyan());
    if !record.alias.is_empty() {
        println!("    alias:   {}", record.alias);
    }
    if !record.description.is_empty() {
        println!("    about:   {}", record.description);
    }
    if !record.filter.is_empty() {
        println!("    filter:  {}", record.filter.dimmed());
    }
    println!(
        "    created: {} by {}",
        record.created_at.to_rfc3339().dimmed(),
        if record.created_by.is_empty() {
            "unknown"
        } else {
            record.created_by.as_str()
        }
    );
    if !record.config.is_empty() {
        println!("    steps:   {}", record.config.len());
    }
    println!();
}
