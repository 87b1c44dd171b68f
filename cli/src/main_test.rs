use clap::Parser;

use super::*;

#[test]
fn check_collects_repeated_roles() {
    let cli = Cli::try_parse_from([
        "lchaty-cli",
        "--base-url",
        "http://api.test",
        "check",
        "--username",
        "alice",
        "--password",
        "pw",
        "--role",
        "admin",
        "--role",
        "owner",
        "--path",
        "/admin",
    ])
    .unwrap();
    assert_eq!(cli.base_url, "http://api.test");
    match cli.command {
        Command::Check { credentials, roles, path } => {
            assert_eq!(credentials.username, "alice");
            assert_eq!(roles, vec!["admin".to_owned(), "owner".to_owned()]);
            assert_eq!(path, "/admin");
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn signup_email_is_optional() {
    let cli = Cli::try_parse_from(["lchaty-cli", "signup", "--username", "dave", "--password", "pw"]).unwrap();
    assert!(matches!(cli.command, Command::Signup { email: None, .. }));
    assert_eq!(cli.timeout_secs, session::config::DEFAULT_TIMEOUT_SECS);
}

#[test]
fn describe_names_every_decision() {
    assert_eq!(describe(&GuardDecision::Render), "render");
    assert_eq!(describe(&GuardDecision::NotAuthorized), "not authorized");
    assert_eq!(
        describe(&GuardDecision::RedirectToLogin {
            location: "/login?next=%2Fadmin".to_owned()
        }),
        "redirect /login?next=%2Fadmin"
    );
}
