use chrono::NaiveDate;
use retro_games_catalog::*;
use retro_games_db::*;

fn fields(title: &str, year: i32, condition: Option<Condition>) -> EntryFields {
    EntryFields::new(
        title,
        year,
        "SNES",
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        condition,
    )
    .unwrap()
}

#[test]
fn insert_and_find_entry() {
    let conn = open_memory().unwrap();
    let f = fields("Super Mario World", 1990, Some(Condition::Vgc));
    let id = insert_entry(&conn, &f).unwrap();

    let entry = find_entry(&conn, id).unwrap().unwrap();
    assert_eq!(entry.id, id);
    assert!(entry.matches(&f));
}

#[test]
fn date_is_stored_as_canonical_text() {
    let conn = open_memory().unwrap();
    let id = insert_entry(&conn, &fields("Chrono Trigger", 1995, None)).unwrap();

    let stored: String = conn
        .query_row(
            "SELECT date_acquired FROM games WHERE id = ?1",
            [id],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(stored, "2024-01-15");

    let condition: Option<String> = conn
        .query_row("SELECT condition FROM games WHERE id = ?1", [id], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(condition, None);
}

#[test]
fn find_missing_entry_is_none() {
    let conn = open_memory().unwrap();
    assert!(find_entry(&conn, 42).unwrap().is_none());
    assert!(matches!(
        get_entry(&conn, 42),
        Err(OperationError::NotFound { id: 42 })
    ));
}

#[test]
fn replace_entry_overwrites_every_field() {
    let conn = open_memory().unwrap();
    let id = insert_entry(&conn, &fields("Zelda", 1991, Some(Condition::Mint))).unwrap();

    let replacement = EntryFields::new(
        "A Link to the Past",
        1992,
        "Super Famicom",
        NaiveDate::from_ymd_opt(2020, 6, 1).unwrap(),
        None,
    )
    .unwrap();
    assert!(replace_entry(&conn, id, &replacement).unwrap());

    let entry = get_entry(&conn, id).unwrap();
    assert_eq!(entry.id, id);
    assert!(entry.matches(&replacement));
    assert_eq!(entry.condition, None);
}

#[test]
fn replace_missing_entry_creates_nothing() {
    let conn = open_memory().unwrap();
    assert!(!replace_entry(&conn, 9, &fields("Ghost", 1990, None)).unwrap());
    assert_eq!(count_entries(&conn).unwrap(), 0);
}

#[test]
fn delete_entry_reports_once() {
    let conn = open_memory().unwrap();
    let id = insert_entry(&conn, &fields("Earthbound", 1994, Some(Condition::Gc))).unwrap();

    assert!(delete_entry(&conn, id).unwrap());
    assert!(!delete_entry(&conn, id).unwrap());
    assert!(find_entry(&conn, id).unwrap().is_none());
}

#[test]
fn ids_are_not_reused_after_delete() {
    let conn = open_memory().unwrap();
    let first = insert_entry(&conn, &fields("A", 1990, None)).unwrap();
    let second = insert_entry(&conn, &fields("B", 1990, None)).unwrap();
    assert!(delete_entry(&conn, second).unwrap());

    let third = insert_entry(&conn, &fields("C", 1990, None)).unwrap();
    assert!(third > second);
    assert!(second > first);
}

#[test]
fn hostile_text_is_stored_verbatim() {
    let conn = open_memory().unwrap();
    let title = "Robert'); DROP TABLE games;--";
    let id = insert_entry(&conn, &fields(title, 1999, None)).unwrap();

    assert_eq!(get_entry(&conn, id).unwrap().title, title);
    assert_eq!(count_entries(&conn).unwrap(), 1);
}

#[test]
fn unknown_stored_condition_is_a_conversion_error() {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    // A table without the CHECK constraint, as a corrupted store might have.
    conn.execute_batch(
        "CREATE TABLE games (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            release_year INTEGER NOT NULL,
            platform TEXT NOT NULL,
            date_acquired TEXT NOT NULL,
            condition TEXT
        );
        INSERT INTO games (title, release_year, platform, date_acquired, condition)
        VALUES ('t', 1990, 'p', '1990-01-01', 'poor');",
    )
    .unwrap();

    assert!(matches!(
        find_entry(&conn, 1),
        Err(OperationError::Sqlite(_))
    ));
}
