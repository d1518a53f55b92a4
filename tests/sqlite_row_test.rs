use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rowbind::{RawValue, Row};
use rusqlite::Connection;
use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE accounts (
            id UUID,
            name TEXT,
            age INTEGER,
            score REAL,
            balance DECIMAL(12,2),
            active BOOLEAN,
            created_at DATETIME,
            opens_at TIME,
            avatar BLOB,
            notes TEXT
        );
        INSERT INTO accounts VALUES (
            '550e8400-e29b-41d4-a716-446655440000',
            'Ada',
            36,
            98.5,
            '1024.50',
            1,
            '2024-01-05 10:00:00',
            '08:30:15',
            X'CAFE',
            NULL
        );
        INSERT INTO accounts VALUES (
            'not-a-uuid',
            'Grace',
            'unknown',
            NULL,
            'n/a',
            0,
            'sometime',
            '7:5',
            NULL,
            'second row'
        );",
    )
    .unwrap();
    conn
}

fn load_rows(conn: &Connection, sql: &str) -> Vec<Row> {
    let mut stmt = conn.prepare(sql).unwrap();
    let rows = stmt.query_map([], |row| Row::from_sqlite(row)).unwrap();
    rows.collect::<Result<Vec<_>, _>>().unwrap()
}

#[test]
fn test_declared_types_refine_values() {
    let conn = setup();
    let rows = load_rows(&conn, "SELECT * FROM accounts ORDER BY name");
    let ada = &rows[0];

    assert_eq!(ada.len(), 10);
    assert_eq!(
        ada.get("id"),
        Some(&RawValue::Uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap()))
    );
    assert_eq!(ada.get("active"), Some(&RawValue::Boolean(true)));
    assert_eq!(ada.get("balance"), Some(&RawValue::Decimal(Decimal::from_str("1024.50").unwrap())));
    assert_eq!(ada.get("opens_at"), Some(&RawValue::Time("08:30:15".to_string())));
    assert_eq!(ada.get("avatar"), Some(&RawValue::Blob(vec![0xca, 0xfe])));
    assert_eq!(ada.get("notes"), Some(&RawValue::Null));

    assert_eq!(ada.read_string("name"), "Ada");
    assert_eq!(ada.read_int("age"), 36);
    assert_eq!(ada.read_double("score"), 98.5);
    assert!(ada.read_bool("active"));
    assert_eq!(
        ada.read_datetime("created_at"),
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap().and_hms_opt(10, 0, 0).unwrap()
    );
    assert_eq!(ada.read_time_text("opens_at", false), "08:30");
    assert_eq!(ada.read_string("avatar"), "cafe");
    assert_eq!(ada.read_nullable_string("notes"), None);
}

#[test]
fn test_malformed_stored_data_degrades() {
    let conn = setup();
    let rows = load_rows(&conn, "SELECT * FROM accounts ORDER BY name");
    let grace = &rows[1];

    // Unparseable refinements keep the stored text
    assert_eq!(grace.get("id"), Some(&RawValue::Text("not-a-uuid".to_string())));
    assert_eq!(grace.read_uuid("id"), Uuid::nil());
    assert_eq!(grace.read_nullable_uuid("id"), None);

    assert_eq!(grace.read_int("age"), 0);
    assert_eq!(grace.read_nullable_int("age"), None);
    assert_eq!(grace.read_nullable_double("score"), None);
    assert_eq!(grace.read_decimal("balance"), Decimal::ZERO);
    assert_eq!(grace.read_nullable_bool("active"), Some(false));
    assert_eq!(grace.read_nullable_datetime("created_at"), None);
    assert_eq!(grace.read_time_text("opens_at", true), "7:5");
    assert_eq!(grace.read_nullable_string("avatar"), None);
}

#[test]
fn test_aliases_and_expressions_use_storage_class() {
    let conn = setup();
    let rows = load_rows(
        &conn,
        "SELECT name AS display_name, age + 1 AS next_age, 'true' AS flag FROM accounts WHERE name = 'Ada'",
    );
    let row = &rows[0];

    assert!(row.contains_column("display_name"));
    assert!(!row.contains_column("name"));
    assert_eq!(row.get("next_age"), Some(&RawValue::Integer(37)));
    assert_eq!(row.read_int("next_age"), 37);
    assert!(row.read_bool("flag"));
}

#[test]
fn test_join_with_repeated_column_name_keeps_first() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE orders (id INTEGER, customer_id INTEGER);
        CREATE TABLE customers (id INTEGER, name TEXT);
        INSERT INTO orders VALUES (1, 99);
        INSERT INTO customers VALUES (99, 'Ada');",
    )
    .unwrap();

    let rows = load_rows(
        &conn,
        "SELECT o.id, c.id, c.name FROM orders o JOIN customers c ON c.id = o.customer_id",
    );
    let row = &rows[0];

    assert_eq!(row.len(), 2);
    assert_eq!(row.column_names().collect::<Vec<_>>(), vec!["id", "name"]);
    assert_eq!(row.read_int("id"), 1);
    assert_eq!(row.read_string("name"), "Ada");
}

#[test]
fn test_strict_accessor_on_sqlite_rows() {
    let conn = setup();
    let rows = load_rows(&conn, "SELECT age, notes FROM accounts ORDER BY name");

    assert_eq!(rows[0].try_read::<i32>("age"), Ok(Some(36)));
    assert_eq!(rows[0].try_read::<String>("notes"), Ok(None));
    assert!(rows[1].try_read::<i32>("age").is_err());
    assert_eq!(rows[1].try_read::<i32>("missing").unwrap_err().code(), "column_not_found");
}
