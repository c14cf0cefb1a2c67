//! `qabase`: record answers and ask questions against a SQLite store.

mod args;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use qabase_core::constants::{CONFIG_ENV_VAR, VERSION};
use qabase_core::observability::init_tracing;
use qabase_core::QaConfig;
use qabase_matching::MatchingEngine;
use qabase_nlp::MorphDictionary;
use qabase_storage::{import, StorageEngine};
use serde_json::json;

use crate::args::{Cli, Command};

fn load_config() -> Result<QaConfig> {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) => {
            let path = Path::new(&path);
            QaConfig::load(path).with_context(|| format!("loading {}", path.display()))
        }
        None => Ok(QaConfig::default()),
    }
}

fn run(cli: Cli, config: &QaConfig) -> Result<()> {
    let db_path = cli.db_path(&config.storage);
    let storage = StorageEngine::open_with_config(&db_path, &config.storage)
        .with_context(|| format!("opening {}", db_path.display()))?;

    // Imports don't need the analyzer or the engine.
    let engine_command = match cli.command {
        Command::ImportStopwords { path } => {
            let rows = import::import_service_words(&storage, &path)?;
            println!("{}", json!({ "imported": rows, "kind": "service_words" }));
            return Ok(());
        }
        Command::ImportSenses { path } => {
            let rows = import::import_senses(&storage, &path)?;
            println!("{}", json!({ "imported": rows, "kind": "senses" }));
            return Ok(());
        }
        other => other,
    };

    let analyzer = MorphDictionary::from_config(&config.nlp)?;
    let engine = MatchingEngine::new(&storage, &analyzer, config.matching.clone());

    match engine_command {
        Command::Record { question, answer } => {
            let id = engine.record_answer(&question, &answer)?;
            println!("{}", json!({ "id": id }));
        }
        Command::Ask { question } => {
            for ranked in engine.answer_query(&question)? {
                println!("{}", serde_json::to_string(&ranked)?);
            }
        }
        Command::Synonym { core_word, synonym } => {
            let id = engine.add_synonym(&core_word, &synonym)?;
            println!("{}", json!({ "id": id }));
        }
        Command::ImportStopwords { .. } | Command::ImportSenses { .. } => {}
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config()?;
    init_tracing(&config.observability);
    tracing::debug!(
        version = VERSION,
        db = %cli.db_path(&config.storage).display(),
        command = ?cli.command,
        "starting"
    );
    run(cli, &config)
}
