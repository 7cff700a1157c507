use camino::Utf8PathBuf;
use parcel_watch::{Change, StateStore, extract};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn store(dir: &TempDir) -> StateStore {
    StateStore::new(Utf8PathBuf::try_from(dir.path().join("last_tracking_info.txt")).unwrap())
}

/// Runs the compare-and-persist rule the way a check does, without the notification.
fn settle(store: &StateStore, page: &[&str]) -> Change {
    let current = extract::snapshot(page);
    let change = Change::detect(&current, store.load());
    if let Change::Updated(ref snapshot) = change {
        store.save(snapshot).unwrap();
    }
    change
}

#[test]
fn status_history_over_several_runs() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);

    assert_eq!(
        settle(&store, &["Colis en transit", "Suivi"]),
        Change::Updated(String::from("Colis en transit"))
    );
    assert_eq!(settle(&store, &["Colis en transit"]), Change::Unchanged);
    assert_eq!(settle(&store, &[]), Change::Missing);
    assert_eq!(store.load(), "Colis en transit");
    assert_eq!(
        settle(&store, &["  ", "Colis livré", "Autre texte"]),
        Change::Updated(String::from("Colis livré"))
    );
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "Colis livré");
}

#[test]
fn hand_edited_state_is_trimmed() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir);
    fs::write(store.path(), "Colis livré\n").unwrap();
    assert_eq!(settle(&store, &["Colis livré"]), Change::Unchanged);
}
