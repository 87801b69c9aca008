// src/database.rs
use sqlx::{Row, SqlitePool, sqlite::SqlitePoolOptions};
use std::path::PathBuf;

use crate::models::{NewTodo, Todo};

pub async fn init_db() -> Result<SqlitePool, sqlx::Error> {
    let db_path = get_db_path()?;

    // Create parent directory BEFORE attempting to connect
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).map_err(sqlx::Error::Io)?;
    }

    let absolute_path = if db_path.is_relative() {
        std::env::current_dir()
            .map_err(sqlx::Error::Io)?
            .join(&db_path)
    } else {
        db_path.clone()
    };

    // SQLite connection string needs to be properly formatted
    let db_url = format!("sqlite://{}?mode=rwc", absolute_path.display());
    log::info!("Connecting to database: {}", db_url);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    log::info!("Database connected and migrations completed");

    Ok(pool)
}

fn get_db_path() -> Result<PathBuf, sqlx::Error> {
    let db_url = std::env::var("DATABASE_URL")
        .map_err(|_| sqlx::Error::Configuration("DATABASE_URL must be set".into()))?;

    let db_path_str = db_url.strip_prefix("sqlite:").ok_or_else(|| {
        sqlx::Error::Configuration("DATABASE_URL must start with 'sqlite:'".into())
    })?;

    Ok(PathBuf::from(db_path_str))
}

/// Inserts a todo and returns the persisted row, including the generated id
/// and creation timestamp.
pub async fn create_todo(pool: &SqlitePool, new_todo: NewTodo) -> Result<Todo, sqlx::Error> {
    let created_at = chrono::Utc::now().to_rfc3339();

    let result = sqlx::query(
        r#"
        INSERT INTO todos (text, completed, created_at)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(&new_todo.text)
    .bind(new_todo.completed)
    .bind(&created_at)
    .execute(pool)
    .await?;

    Ok(Todo {
        id: result.last_insert_rowid(),
        text: new_todo.text,
        completed: new_todo.completed,
        created_at,
    })
}

pub async fn get_all_todos(pool: &SqlitePool) -> Result<Vec<Todo>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT id, text, completed, created_at
        FROM todos
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| Todo {
            id: row.get(0),
            text: row.get(1),
            completed: row.get(2),
            created_at: row.get(3),
        })
        .collect())
}
