use clap::Parser;
use texcards::cli::args::{Args, Command, MacroCommand};

#[test]
fn given_no_subcommand_when_parsing_then_fails() {
    // Arrange
    let args = vec!["texcards"];

    // Act & Assert
    let result = Args::try_parse_from(args);
    assert!(result.is_err(), "Should fail without subcommand");
}

#[test]
fn given_add_command_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["texcards", "add", "What is $e^{i\\pi}$?", "$-1$"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Add { front, back } => {
            assert_eq!(front, "What is $e^{i\\pi}$?");
            assert_eq!(back, "$-1$");
        }
        _ => panic!("Expected Add command"),
    }
    assert_eq!(parsed.deck, None);
    assert_eq!(parsed.config, None);
}

#[test]
fn given_global_deck_flag_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["texcards", "-d", "/path/to/deck.json", "delete", "2"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Delete { index } => {
            assert_eq!(index, 2);
        }
        _ => panic!("Expected Delete command"),
    }
    assert_eq!(
        parsed.deck,
        Some(std::path::PathBuf::from("/path/to/deck.json"))
    );
}

#[test]
fn given_deck_flag_after_subcommand_when_parsing_then_succeeds() {
    // Arrange - global flags work anywhere when marked as global
    let args = vec!["texcards", "delete", "-d", "/path/to/deck.json", "0"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Delete { index } => {
            assert_eq!(index, 0);
        }
        _ => panic!("Expected Delete command"),
    }
    assert_eq!(
        parsed.deck,
        Some(std::path::PathBuf::from("/path/to/deck.json"))
    );
}

#[test]
fn given_verbose_flag_when_parsing_then_increments_count() {
    // Arrange
    let args = vec!["texcards", "-vv", "list"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.verbose, 2);
}

#[test]
fn given_list_with_tag_filter_when_parsing_then_tag_captured() {
    // Arrange
    let args = vec!["texcards", "list", "--tag", "algebra"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::List { tag, json } => {
            assert_eq!(tag, Some("algebra".to_string()));
            assert!(!json);
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn given_tag_command_with_multiple_tags_when_parsing_then_collects_all() {
    // Arrange
    let args = vec!["texcards", "tag", "1", "algebra", "rings"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Tag { index, tags } => {
            assert_eq!(index, 1);
            assert_eq!(tags, vec!["algebra".to_string(), "rings".to_string()]);
        }
        _ => panic!("Expected Tag command"),
    }
}

#[test]
fn given_tag_command_without_tags_when_parsing_then_empty_assignment() {
    // Arrange - clearing a card's tags is a valid operation
    let args = vec!["texcards", "tag", "1"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Tag { index, tags } => {
            assert_eq!(index, 1);
            assert!(tags.is_empty());
        }
        _ => panic!("Expected Tag command"),
    }
}

#[test]
fn given_macro_add_with_index_when_parsing_then_index_captured() {
    // Arrange
    let args = vec![
        "texcards", "macro", "add", r"\C", r"\mathbb{C}", "--index", "3",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Macro {
            command:
                MacroCommand::Add {
                    command,
                    definition,
                    index,
                },
        } => {
            assert_eq!(command, r"\C");
            assert_eq!(definition, r"\mathbb{C}");
            assert_eq!(index, Some(3));
        }
        _ => panic!("Expected Macro Add command"),
    }
}

#[test]
fn given_export_without_path_when_parsing_then_path_is_none() {
    // Arrange
    let args = vec!["texcards", "export"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Export { path } => {
            assert_eq!(path, None);
        }
        _ => panic!("Expected Export command"),
    }
}

#[test]
fn given_view_with_html_flag_when_parsing_then_html_is_true() {
    // Arrange
    let args = vec!["texcards", "view", "--html", "--tag", "algebra"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::View { tag, html } => {
            assert_eq!(tag, Some("algebra".to_string()));
            assert!(html);
        }
        _ => panic!("Expected View command"),
    }
}
