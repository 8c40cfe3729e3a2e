//! JSON file persistence tests.
//!
//! Sessions over real files in temporary directories: first start, restart
//! with saved bookings, the on-disk layout, and data that does not fit the
//! configured hall.
//!
//! Run with: `cargo test --test json_persistence_test`

#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use boxoffice::config::{LogConfig, StorageConfig};
use boxoffice::{
    BookingError, BookingSession, BookingStore, Config, ConfigError, Dataset, HallConfig,
    JsonFileStore, PricingPolicy, SeatPosition, SeatState, Showtime,
};
use boxoffice_core::snapshot_store::{SnapshotStore, SnapshotStoreError};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

fn config_for(path: &Path) -> Config {
    Config {
        storage: StorageConfig {
            bookings_file: path.to_path_buf(),
        },
        hall: HallConfig::default(),
        pricing: PricingPolicy::default(),
        log: LogConfig {
            level: "warn".into(),
        },
    }
}

fn bookings_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("bookings.json")
}

#[test]
fn test_first_start_creates_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = bookings_path(&dir);

    let session = BookingSession::open(&config_for(&path)).unwrap();

    assert_eq!(session.total_booked(), 0);
    assert!(!path.exists(), "loading must not write anything");
}

#[test]
fn test_bookings_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = bookings_path(&dir);
    let config = config_for(&path);

    let saved = {
        let mut session = BookingSession::open(&config).unwrap();
        session.toggle_select(0, 0).unwrap();
        session.toggle_select(3, 4).unwrap();
        session.book_selected().unwrap();
        session.change_showtime("7:00 PM").unwrap();
        session.toggle_select(1, 1).unwrap();
        session.book_selected().unwrap();
        session.dataset()
    };

    let session = BookingSession::open(&config).unwrap();

    assert_eq!(session.dataset(), saved);
    assert_eq!(session.total_booked(), 3);
    // 10 + 4 + 8
    assert_eq!(session.total_revenue().amount(), 22);
    assert!(session.selection().is_empty());
}

#[test]
fn test_file_layout_is_showtime_to_rows_of_letters() {
    let dir = tempfile::tempdir().unwrap();
    let path = bookings_path(&dir);
    let mut session = BookingSession::open(&config_for(&path)).unwrap();
    session.toggle_select(0, 1).unwrap();
    session.book_selected().unwrap();

    let document: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

    let object = document.as_object().unwrap();
    assert_eq!(object.len(), 5);
    assert_eq!(
        object["10:00 AM"][0],
        serde_json::json!(["O", "X", "O", "O", "O"])
    );
    assert_eq!(object["10:00 PM"].as_array().unwrap().len(), 5);
}

#[test]
fn test_reads_files_written_by_other_tools() {
    let dir = tempfile::tempdir().unwrap();
    let path = bookings_path(&dir);
    let row = r#"["O","O","O","O","O"]"#;
    let booked_row = r#"["X","O","O","O","X"]"#;
    let grid = |first: &str| format!("[{first},{row},{row},{row},{row}]");
    let document = format!(
        r#"{{"10:00 AM": {}, "1:00 PM": {}, "4:00 PM": {}, "7:00 PM": {}, "10:00 PM": {}}}"#,
        grid(row),
        grid(booked_row),
        grid(row),
        grid(row),
        grid(row)
    );
    std::fs::write(&path, document).unwrap();

    let session = BookingSession::open(&config_for(&path)).unwrap();

    let dataset = session.dataset();
    let matinee = dataset.grid(&Showtime::new("1:00 PM")).unwrap();
    assert_eq!(matinee.get(SeatPosition::new(0, 0)), Some(SeatState::Booked));
    assert_eq!(matinee.get(SeatPosition::new(0, 4)), Some(SeatState::Booked));
    assert_eq!(session.total_booked(), 2);
}

#[test]
fn test_missing_showtime_is_a_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = bookings_path(&dir);
    let mut hall = HallConfig::default();
    hall.showtimes.pop();
    JsonFileStore::<Dataset>::new(&path)
        .save(&Dataset::fresh(&hall))
        .unwrap();

    let result = BookingSession::open(&config_for(&path));

    match result {
        Err(BookingError::Configuration(ConfigError::ShowtimeMismatch { missing, unexpected })) => {
            assert_eq!(missing, vec!["10:00 PM".to_string()]);
            assert!(unexpected.is_empty());
        },
        Err(other) => panic!("expected a showtime mismatch, got {other}"),
        Ok(_) => panic!("expected a showtime mismatch, got a session"),
    }
}

#[test]
fn test_wrong_dimensions_are_a_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = bookings_path(&dir);
    let smaller = HallConfig {
        rows: 4,
        ..HallConfig::default()
    };
    JsonFileStore::<Dataset>::new(&path)
        .save(&Dataset::fresh(&smaller))
        .unwrap();

    let result = BookingSession::open(&config_for(&path));

    assert!(matches!(
        result,
        Err(BookingError::Configuration(ConfigError::GridDimensionMismatch {
            expected_rows: 5,
            found_rows: 4,
            ..
        }))
    ));
    // The mismatched file is left as it was.
    let persisted = JsonFileStore::<Dataset>::new(&path).load().unwrap().unwrap();
    assert_eq!(persisted, Dataset::fresh(&smaller));
}

#[test]
fn test_malformed_file_is_a_persistence_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = bookings_path(&dir);
    std::fs::write(&path, r#"{"10:00 AM": [["O", "maybe"]]}"#).unwrap();

    let result = BookingSession::open(&config_for(&path));

    assert!(matches!(
        result,
        Err(BookingError::Persistence(SnapshotStoreError::Serialization(_)))
    ));
}

#[test]
fn test_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = bookings_path(&dir);
    let hall = HallConfig::default();
    let store = BookingStore::new(Arc::new(JsonFileStore::<Dataset>::new(&path)), hall.clone());
    let mut dataset = Dataset::fresh(&hall);
    dataset
        .grid_mut(&Showtime::new("4:00 PM"))
        .unwrap()
        .set(SeatPosition::new(2, 2), SeatState::Booked);

    store.save(&dataset).unwrap();

    assert_eq!(store.load().unwrap(), dataset);
}
