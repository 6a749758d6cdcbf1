//! Command-line surface. No subcommand starts the interactive menu.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chatbox")]
#[command(version, about = "Client for the chat backend", long_about = None)]
#[command(after_help = "Environment:\n  \
    CHATBOX_BASE_URL               Backend URL (default http://127.0.0.1:5000)\n  \
    CHATBOX_REQUEST_TIMEOUT_SECS   Request timeout (default: none)\n  \
    CHATBOX_MOCK=true              Use the offline mock backend\n  \
    CHATBOX_CONFIG                 Optional config file")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Send a single message and print the reply
    Send {
        /// Message text; words are joined with single spaces
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Upload a single file and print the backend's message
    Upload { path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("chatbox").chain(args.iter().copied()))
    }

    #[test]
    fn test_no_subcommand_runs_menu() {
        assert_eq!(parse(&[]).unwrap().command, None);
    }

    #[test]
    fn test_send_collects_words() {
        let cli = parse(&["send", "hello", "there"]).unwrap();
        match cli.command {
            Some(Commands::Send { text }) => assert_eq!(text, vec!["hello", "there"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_send_requires_text() {
        assert!(parse(&["send"]).is_err());
    }

    #[test]
    fn test_upload_takes_one_path() {
        let cli = parse(&["upload", "report.pdf"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Upload {
                path: PathBuf::from("report.pdf")
            })
        );
    }

    #[test]
    fn test_upload_rejects_extra_args() {
        assert!(parse(&["upload", "a.txt", "extra"]).is_err());
    }

    #[test]
    fn test_upload_requires_path() {
        assert!(parse(&["upload"]).is_err());
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        assert!(parse(&["sned", "hello"]).is_err());
    }
}
