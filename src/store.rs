//! Parameterized SQL against MySQL. One statement per operation, no
//! transactions, no existence checks beyond what the statement itself does.

use crate::error::AppError;
use crate::models::{Floreria, FloreriaFields};
use serde_json::Value;
use sqlx::MySqlPool;

pub struct FloreriaStore;

impl FloreriaStore {
    pub async fn list(pool: &MySqlPool) -> Result<Vec<Floreria>, AppError> {
        let sql = "SELECT * FROM florerias";
        tracing::debug!(sql, "query");
        let rows = sqlx::query_as::<_, Floreria>(sql).fetch_all(pool).await?;
        Ok(rows)
    }

    /// Rows matching the id: zero or one element, both returned as-is.
    pub async fn by_id(pool: &MySqlPool, id: i64) -> Result<Vec<Floreria>, AppError> {
        let sql = "SELECT * FROM florerias WHERE idFlorerias = ?";
        tracing::debug!(sql, id, "query");
        let rows = sqlx::query_as::<_, Floreria>(sql).bind(id).fetch_all(pool).await?;
        Ok(rows)
    }

    /// Insert one row; returns the id MySQL assigned.
    pub async fn create(pool: &MySqlPool, fields: &FloreriaFields) -> Result<u64, AppError> {
        let sql = "INSERT INTO florerias(nombre, ubicacion, telefono) VALUES (?, ?, ?)";
        tracing::debug!(sql, "query");
        let result = sqlx::query(sql)
            .bind(&fields.nombre)
            .bind(&fields.ubicacion)
            .bind(&fields.telefono)
            .execute(pool)
            .await?;
        Ok(result.last_insert_id())
    }

    /// Overwrite all three fields. Updating a missing id affects zero rows and
    /// is still success.
    pub async fn update(pool: &MySqlPool, id: i64, fields: &FloreriaFields) -> Result<(), AppError> {
        let sql = "UPDATE florerias SET nombre = ?, ubicacion = ?, telefono = ? WHERE idFlorerias = ?";
        tracing::debug!(sql, id, "query");
        sqlx::query(sql)
            .bind(&fields.nombre)
            .bind(&fields.ubicacion)
            .bind(&fields.telefono)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn delete(pool: &MySqlPool, id: i64) -> Result<(), AppError> {
        let sql = "DELETE FROM florerias WHERE idFlorerias = ?";
        tracing::debug!(sql, id, "query");
        sqlx::query(sql).bind(id).execute(pool).await?;
        Ok(())
    }
}

pub struct ProductoStore;

impl ProductoStore {
    /// Opaque passthrough: whatever columns the table has come back as JSON.
    pub async fn list(pool: &MySqlPool) -> Result<Vec<Value>, AppError> {
        let sql = "SELECT * FROM productos";
        tracing::debug!(sql, "query");
        let rows = sqlx::query(sql).fetch_all(pool).await?;
        Ok(rows.iter().map(row_to_json).collect())
    }
}

fn row_to_json(row: &sqlx::mysql::MySqlRow) -> Value {
    use sqlx::{Column, Row};
    let mut map = serde_json::Map::new();
    for col in row.columns() {
        let name = col.name();
        map.insert(name.to_string(), cell_to_value(row, name));
    }
    Value::Object(map)
}

/// Decode one cell by trying the MySQL types we expect, most specific first.
/// Anything undecodable (or NULL) becomes JSON null.
fn cell_to_value(row: &sqlx::mysql::MySqlRow, name: &str) -> Value {
    use sqlx::Row;
    if let Ok(Some(n)) = row.try_get::<Option<i64>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<u64>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<f32>, _>(name) {
        if let Some(n) = serde_json::Number::from_f64(f64::from(n)) {
            return Value::Number(n);
        }
    }
    if let Ok(Some(n)) = row.try_get::<Option<f64>, _>(name) {
        if let Some(n) = serde_json::Number::from_f64(n) {
            return Value::Number(n);
        }
    }
    if let Ok(Some(b)) = row.try_get::<Option<bool>, _>(name) {
        return Value::Bool(b);
    }
    if let Ok(Some(d)) = row.try_get::<Option<chrono::DateTime<chrono::Utc>>, _>(name) {
        return Value::String(d.to_rfc3339());
    }
    if let Ok(Some(d)) = row.try_get::<Option<chrono::NaiveDateTime>, _>(name) {
        return Value::String(d.format("%Y-%m-%dT%H:%M:%S%.f").to_string());
    }
    if let Ok(Some(d)) = row.try_get::<Option<chrono::NaiveDate>, _>(name) {
        return Value::String(d.format("%Y-%m-%d").to_string());
    }
    if let Ok(Some(s)) = row.try_get::<Option<String>, _>(name) {
        return Value::String(s);
    }
    if let Ok(Some(j)) = row.try_get::<Option<serde_json::Value>, _>(name) {
        return j;
    }
    Value::Null
}
