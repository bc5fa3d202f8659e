//! Command Tests
//!
//! Tests for request line rendering and argument validation.

use varnishadm::protocol::{validate_line, Command, CommandType};
use varnishadm::AdminError;

fn line(command: Command) -> String {
    command.to_line().unwrap()
}

fn rejected(command: Command) -> bool {
    matches!(command.to_line(), Err(AdminError::InvalidArgument(_)))
}

// =============================================================================
// Rendering Tests
// =============================================================================

#[test]
fn test_plain_commands() {
    assert_eq!(line(Command::Status), "status");
    assert_eq!(line(Command::Start), "start");
    assert_eq!(line(Command::Stop), "stop");
    assert_eq!(line(Command::Ping), "ping");
    assert_eq!(line(Command::Stats), "stats");
    assert_eq!(line(Command::BanList), "ban.list");
    assert_eq!(line(Command::VclList), "vcl.list");
    assert_eq!(line(Command::PanicShow), "panic.show");
    assert_eq!(line(Command::PanicClear), "panic.clear");
    assert_eq!(line(Command::Banner), "banner");
    assert_eq!(line(Command::Quit), "quit");
}

#[test]
fn test_purge_pattern_inserted_verbatim() {
    let cmd = Command::Purge {
        pattern: "^/(a|b) .*$".to_string(),
    };
    assert_eq!(line(cmd), "url.purge ^/(a|b) .*$");
}

#[test]
fn test_param_show_with_and_without_filter() {
    assert_eq!(line(Command::ParamShow { filter: None }), "param.show");
    assert_eq!(
        line(Command::ParamShow {
            filter: Some("-l".to_string())
        }),
        "param.show -l"
    );
}

#[test]
fn test_param_set_keeps_value_text() {
    let cmd = Command::ParamSet {
        name: "cc_command".to_string(),
        value: "exec cc -o %o %s".to_string(),
    };
    assert_eq!(line(cmd), "param.set cc_command exec cc -o %o %s");
}

#[test]
fn test_help_for_command() {
    assert_eq!(line(Command::Help { command: None }), "help");
    assert_eq!(
        line(Command::Help {
            command: Some("vcl.use".to_string())
        }),
        "help vcl.use"
    );
}

#[test]
fn test_raw_passthrough() {
    assert_eq!(line(Command::Raw("vcl.show boot".to_string())), "vcl.show boot");
}

#[test]
fn test_command_type_verbs() {
    assert_eq!(
        Command::Purge {
            pattern: ".".to_string()
        }
        .command_type(),
        CommandType::UrlPurge
    );
    assert_eq!(CommandType::UrlPurge.verb(), "url.purge");
    assert_eq!(CommandType::VclDiscard.verb(), "vcl.discard");
    assert_eq!(CommandType::Raw.verb(), "");
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_control_characters_rejected() {
    assert!(rejected(Command::Purge {
        pattern: "foo\nstop".to_string()
    }));
    assert!(rejected(Command::Ban {
        expression: "req.url ~ a\r".to_string()
    }));
    assert!(rejected(Command::ParamSet {
        name: "a".to_string(),
        value: "1\u{0}".to_string()
    }));
    assert!(rejected(Command::Raw("status\nstop".to_string())));
}

#[test]
fn test_empty_arguments_rejected() {
    assert!(rejected(Command::Purge {
        pattern: String::new()
    }));
    assert!(rejected(Command::ParamSet {
        name: "default_ttl".to_string(),
        value: "  ".to_string()
    }));
    assert!(rejected(Command::VclUse {
        name: String::new()
    }));
    assert!(rejected(Command::Raw(String::new())));
}

#[test]
fn test_single_token_arguments_reject_whitespace() {
    assert!(rejected(Command::ParamSet {
        name: "default ttl".to_string(),
        value: "1".to_string()
    }));
    assert!(rejected(Command::VclUse {
        name: "my vcl".to_string()
    }));
    assert!(rejected(Command::ParamShow {
        filter: Some("a b".to_string())
    }));
}

#[test]
fn test_validate_line() {
    assert!(validate_line("command", "url.purge ^/a b$").is_ok());
    assert!(validate_line("command", "tab\there").is_err());
}
