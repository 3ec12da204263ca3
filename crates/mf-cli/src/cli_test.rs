use super::*;
use clap::CommandFactory;

#[test]
fn verify_cli_args() {
    // Validates the entire command tree: short flag conflicts,
    // duplicate args, and other clap definition errors.
    Cli::command().debug_assert();
}

#[test]
fn parse_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["mf", "status", "--prefix", "fb_", "-v"]).unwrap();
    assert!(cli.global.verbose);
    assert_eq!(cli.global.prefix.as_deref(), Some("fb_"));
    assert!(matches!(cli.command, Commands::Status(StatusArgs { json: false })));
}

#[test]
fn parse_ls_up_to() {
    let cli = Cli::try_parse_from(["mf", "ls", "--up-to", "5", "--json"]).unwrap();
    match cli.command {
        Commands::Ls(args) => {
            assert_eq!(args.up_to, Some(5));
            assert!(args.json);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn parse_ls_rejects_negative_version() {
    assert!(Cli::try_parse_from(["mf", "ls", "--up-to", "-1"]).is_err());
}
