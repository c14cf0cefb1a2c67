//! Command-line parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use qabase_core::config::StorageConfig;

#[derive(Parser, Debug)]
#[command(
    name = "qabase",
    version,
    about = "Record answers and ask questions against a SQLite store",
    after_help = "env:\n  QABASE_CONFIG   optional TOML config file\n  QABASE_LOG      tracing filter, e.g. qabase_matching=debug"
)]
pub struct Cli {
    /// Database file. Defaults to `storage.db_path` from the config.
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// The database to open: `--db` if given, the configured path otherwise.
    pub fn db_path(&self, storage: &StorageConfig) -> PathBuf {
        self.db
            .clone()
            .unwrap_or_else(|| PathBuf::from(&storage.db_path))
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Store an answer under the normalized question
    Record { question: String, answer: String },
    /// Rank stored answers, one JSON object per line
    Ask { question: String },
    /// Register a query-side synonym
    Synonym { core_word: String, synonym: String },
    /// Bulk-import service words from XML
    ImportStopwords { path: PathBuf },
    /// Bulk-import sense entries from XML
    ImportSenses { path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn parses_record() {
        let cli = Cli::try_parse_from([
            "qabase",
            "--db",
            "qa.db",
            "record",
            "Как помыть машину?",
            "Взять шланг",
        ])
        .unwrap();
        assert_eq!(cli.db, Some(PathBuf::from("qa.db")));
        assert_eq!(
            cli.command,
            Command::Record {
                question: "Как помыть машину?".into(),
                answer: "Взять шланг".into(),
            }
        );
    }

    #[test]
    fn db_flag_is_accepted_after_the_subcommand() {
        let cli = Cli::try_parse_from(["qabase", "import-senses", "senses.xml", "--db", "qa.db"])
            .unwrap();
        assert_eq!(cli.db, Some(PathBuf::from("qa.db")));
        assert_eq!(
            cli.command,
            Command::ImportSenses {
                path: PathBuf::from("senses.xml")
            }
        );
    }

    #[test]
    fn db_path_falls_back_to_config() {
        let cli = Cli::try_parse_from(["qabase", "ask", "шланг"]).unwrap();
        let storage = StorageConfig {
            db_path: "/var/lib/qabase/answers.db".into(),
            ..StorageConfig::default()
        };
        assert_eq!(cli.db_path(&storage), PathBuf::from("/var/lib/qabase/answers.db"));

        let cli = Cli::try_parse_from(["qabase", "--db", "local.db", "ask", "шланг"]).unwrap();
        assert_eq!(cli.db_path(&storage), PathBuf::from("local.db"));
    }

    #[test]
    fn rejects_wrong_arity() {
        let err = Cli::try_parse_from(["qabase", "ask"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        let err = Cli::try_parse_from(["qabase", "synonym", "а", "б", "в"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn rejects_unknown_command() {
        let err = Cli::try_parse_from(["qabase", "forget", "x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
        assert!(Cli::try_parse_from(["qabase"]).is_err());
    }
}
