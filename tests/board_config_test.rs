//! Tests for loading board configuration from disk.

use std::io::Write;
use strictly_chess::{BoardConfig, BoardController, Orientation, PromotionPiece};
use tempfile::NamedTempFile;

#[test]
fn test_from_file_reads_every_key() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
orientation = "black"
max_width = 640
min_width = 200
margin = 20
auto_promotion = "knight"
highlight_on_navigation = true
"#
    )
    .unwrap();

    let config = BoardConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.orientation(), Orientation::Black);
    assert_eq!(*config.max_width(), 640);
    assert_eq!(*config.min_width(), 200);
    assert_eq!(*config.margin(), 20);
    assert_eq!(*config.auto_promotion(), PromotionPiece::Knight);
    assert!(*config.highlight_on_navigation());

    let board = BoardController::with_config(config);
    assert_eq!(board.orientation(), Orientation::Black);
    assert_eq!(board.render_props(1000).width, 640);
    assert_eq!(board.render_props(100).width, 200);
}

#[test]
fn test_from_file_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = BoardConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_from_file_rejects_bad_values() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"auto_promotion = "king""#).unwrap();
    assert!(BoardConfig::from_file(file.path()).is_err());
}
