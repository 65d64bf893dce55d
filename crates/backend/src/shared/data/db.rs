use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Открыть соединение с SQLite и создать недостающие таблицы
pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<()> {
    let db_file = db_path.unwrap_or("target/db/po.db");
    if let Some(parent) = std::path::Path::new(db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_file).is_absolute() {
        std::path::PathBuf::from(db_file)
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;

    for sql in bootstrap_tables() {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            sql.to_string(),
        ))
        .await?;
    }

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Database connection already initialized"))?;

    tracing::info!("Database initialized at {}", normalized);
    Ok(())
}

/// Получить глобальное соединение с БД
pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection is not initialized")
}

/// DDL для всех таблиц (minimal schema bootstrap)
fn bootstrap_tables() -> Vec<&'static str> {
    vec![
        r#"
        CREATE TABLE IF NOT EXISTS a001_supplier (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS a002_warehouse (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS a003_product (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            price REAL NOT NULL DEFAULT 0,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS a004_vat_rate (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            rate REAL NOT NULL DEFAULT 0,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS a005_purchase_order (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            po_number TEXT NOT NULL,
            supplier TEXT NOT NULL,
            warehouse TEXT NOT NULL,
            shipping_address TEXT NOT NULL DEFAULT '',
            vat_rate REAL NOT NULL DEFAULT 0,
            order_date TEXT NOT NULL,
            lines_json TEXT,
            subtotal REAL NOT NULL DEFAULT 0,
            vat_amount REAL NOT NULL DEFAULT 0,
            grand_total REAL NOT NULL DEFAULT 0,
            status TEXT NOT NULL DEFAULT 'Draft',
            notes TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ]
}

/// Наполнить БД демо-данными, если справочники пустые
pub async fn ensure_seed_data() -> anyhow::Result<()> {
    use crate::domain::{
        a001_supplier, a002_warehouse, a003_product, a004_vat_rate, a005_purchase_order,
    };

    if !a001_supplier::repository::list_all().await?.is_empty() {
        return Ok(());
    }

    tracing::info!("Empty database, inserting seed data");
    a001_supplier::service::insert_test_data().await?;
    a002_warehouse::service::insert_test_data().await?;
    a003_product::service::insert_test_data().await?;
    a004_vat_rate::service::insert_test_data().await?;
    a005_purchase_order::service::insert_test_data().await?;
    Ok(())
}
