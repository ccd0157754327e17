// src/store/filter.rs
//
// Typed predicates and attribute updates for the record stores.
// Values always travel as bound parameters, never inside the SQL text.

use rusqlite::types::Value;

use crate::error::{AppError, AppResult};

/// Conjunction of optional equality predicates over cached movie records.
///
/// An empty filter matches every row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovieFilter {
    pub id: Option<i64>,
    pub page: Option<u32>,
    pub favorite: Option<bool>,
}

impl MovieFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_id(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn by_page(page: u32) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }

    pub fn favorites() -> Self {
        Self {
            favorite: Some(true),
            ..Self::default()
        }
    }

    pub fn and_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Render as a `WHERE` clause with `?` placeholders.
    ///
    /// `page_column` is `None` for tables without a page; filtering such a
    /// table by page is a caller bug and reported as an error.
    pub(crate) fn to_where_clause(
        &self,
        page_column: Option<&str>,
    ) -> AppResult<(String, Vec<Value>)> {
        let mut clauses = Vec::new();
        let mut values = Vec::new();

        if let Some(id) = self.id {
            clauses.push("movie_id = ?".to_string());
            values.push(Value::Integer(id));
        }

        if let Some(page) = self.page {
            let column = page_column.ok_or_else(|| {
                AppError::Other("page filter used on a table without pages".to_string())
            })?;
            clauses.push(format!("{} = ?", column));
            values.push(Value::Integer(i64::from(page)));
        }

        if let Some(favorite) = self.favorite {
            clauses.push("is_favorite = ?".to_string());
            values.push(Value::Integer(i64::from(favorite)));
        }

        let sql = if clauses.is_empty() {
            "1 = 1".to_string()
        } else {
            clauses.join(" AND ")
        };

        Ok((sql, values))
    }
}

/// Attribute-level update applied by `update_where`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldUpdate {
    IsFavorite(bool),
}

impl FieldUpdate {
    fn column(&self) -> &'static str {
        match self {
            FieldUpdate::IsFavorite(_) => "is_favorite",
        }
    }

    fn value(&self) -> Value {
        match self {
            FieldUpdate::IsFavorite(v) => Value::Integer(i64::from(*v)),
        }
    }
}

/// Render updates as a `SET` list with `?` placeholders.
pub(crate) fn to_set_clause(updates: &[FieldUpdate]) -> (String, Vec<Value>) {
    let sql = updates
        .iter()
        .map(|u| format!("{} = ?", u.column()))
        .collect::<Vec<_>>()
        .join(", ");
    let values = updates.iter().map(FieldUpdate::value).collect();
    (sql, values)
}
