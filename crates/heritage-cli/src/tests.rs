use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["heritage-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_sites_defaults() {
    let cli = Cli::try_parse_from(["heritage-cli", "sites"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Sites {
            expand: false,
            json: false
        })
    ));
}

#[test]
fn parses_sites_flags() {
    let cli = Cli::try_parse_from(["heritage-cli", "sites", "--expand", "--json"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Sites {
            expand: true,
            json: true
        })
    ));
}

#[test]
fn parses_share_title() {
    let cli = Cli::try_parse_from(["heritage-cli", "share", "--title", "Aksum"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Share { ref title }) if title == "Aksum"
    ));
}

#[test]
fn share_requires_title() {
    assert!(Cli::try_parse_from(["heritage-cli", "share"]).is_err());
}

#[test]
fn unknown_command_is_rejected() {
    assert!(Cli::try_parse_from(["heritage-cli", "login"]).is_err());
}

#[test]
fn help_is_answered_by_the_parser() {
    let err = Cli::try_parse_from(["heritage-cli", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}
