use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::params;

pub type DbPool = Pool<SqliteConnectionManager>;

pub const MIGRATIONS: &str = include_str!("schema.sql");

pub fn init_pool(database_url: &str) -> DbPool {
    let manager = SqliteConnectionManager::file(database_url).with_init(|conn| {
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
        Ok(())
    });
    Pool::builder()
        .max_size(8)
        .build(manager)
        .expect("Failed to create DB pool")
}

pub fn run_migrations(pool: &DbPool) {
    let conn = pool.get().expect("Failed to get DB connection for migrations");
    conn.execute_batch(MIGRATIONS)
        .expect("Failed to run migrations");
    log::info!("Database migrations complete");
}

/// The participant roles every installation needs.
pub const SEED_ROLES: &[(&str, &str)] = &[
    ("Reviewer", "Proposes and removes discussion topics"),
    ("Secretary", "Resolves topics and finalizes the meeting"),
    ("Observer", "Attends without moderation rights"),
];

/// Seed participant roles and the default manager account if the database is empty.
pub fn seed_base_data(pool: &DbPool, admin_password_hash: &str) {
    let conn = pool.get().expect("Failed to get DB connection for seeding");

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))
        .unwrap_or(0);
    if count > 0 {
        log::info!("Database already seeded ({} employees), skipping", count);
        return;
    }

    for (name, description) in SEED_ROLES {
        conn.execute(
            "INSERT OR IGNORE INTO roles (name, description) VALUES (?1, ?2)",
            params![name, description],
        )
        .expect("Failed to seed role");
    }

    conn.execute(
        "INSERT INTO employees (name, email, password_hash, profession, is_manager) \
         VALUES ('admin', 'admin@example.com', ?1, 'Manager', 1)",
        params![admin_password_hash],
    )
    .expect("Failed to seed admin employee");

    log::info!("Base seed complete (roles + admin manager)");
}
