//! Unit tests for CLI commands

use crate::cli::{run_command, Cli, Commands};
use crate::error::GenError;
use clap::Parser;

#[test]
fn test_generate_command_defaults() {
    let cli = Cli::try_parse_from(["gin-routegen", "generate", "--file", "api.yaml"]).unwrap();

    assert!(!cli.verbose);
    match cli.command {
        Commands::Generate {
            file,
            out,
            pkg,
            fmt,
        } => {
            assert_eq!(file.unwrap().to_string_lossy(), "api.yaml");
            assert!(out.is_none());
            assert_eq!(pkg, "main");
            assert!(!fmt);
        }
        _ => panic!("Expected Generate command"),
    }
}

#[test]
fn test_generate_command_with_flags() {
    let cli = Cli::try_parse_from([
        "gin-routegen",
        "-v",
        "generate",
        "-f",
        "api.json",
        "-o",
        "gen/routes.go",
        "-p",
        "server",
        "--fmt",
    ])
    .unwrap();

    assert!(cli.verbose);
    match cli.command {
        Commands::Generate {
            file,
            out,
            pkg,
            fmt,
        } => {
            assert_eq!(file.unwrap().to_string_lossy(), "api.json");
            assert_eq!(out.unwrap().to_string_lossy(), "gen/routes.go");
            assert_eq!(pkg, "server");
            assert!(fmt);
        }
        _ => panic!("Expected Generate command"),
    }
}

#[test]
fn test_inspect_command_parses() {
    let cli = Cli::try_parse_from([
        "gin-routegen",
        "inspect",
        "--file",
        "api.yaml",
        "--base-path",
        "api/",
        "--verbose",
    ])
    .unwrap();

    assert!(cli.verbose);
    match cli.command {
        Commands::Inspect { file, base_path } => {
            assert_eq!(file.unwrap().to_string_lossy(), "api.yaml");
            assert_eq!(base_path, "api/");
        }
        _ => panic!("Expected Inspect command"),
    }
}

#[test]
fn test_missing_file_is_usage_error() {
    let command = Commands::Generate {
        file: None,
        out: None,
        pkg: "main".to_string(),
        fmt: false,
    };
    let err = run_command(&command).unwrap_err();
    assert!(matches!(err, GenError::Usage(_)));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_unknown_subcommand_rejected() {
    assert!(Cli::try_parse_from(["gin-routegen", "serve", "--file", "api.yaml"]).is_err());
}
