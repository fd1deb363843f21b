//! Record codec: Entry <-> tagged Row conversion.
//!
//! The relational engine hands back dynamically shaped rows. Rather than
//! assuming a row matches [`Entry`] by position, the adapter maps each row
//! into a tagged [`Row`] of named, typed values, and this codec validates it
//! at decode time. A malformed row is reported, never dropped or guessed at.

use thiserror::Error;

use pagemark_core::{Entry, EntryId};

/// The row shape version this codec understands.
///
/// Bumped together with the schema version whenever a migration changes the
/// column set of `entries`.
pub const ROW_VERSION: u32 = 1;

/// A dynamically typed column value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Null,
    Integer(i64),
    Text(String),
    Blob(Vec<u8>),
}

impl Value {
    /// Name of the value's shape, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Integer(_) => "integer",
            Value::Text(_) => "text",
            Value::Blob(_) => "blob",
        }
    }
}

/// A tagged row: schema version plus named column values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    version: u32,
    columns: Vec<(&'static str, Value)>,
}

impl Row {
    /// Create an empty row at the given shape version.
    pub fn new(version: u32) -> Self {
        Self {
            version,
            columns: Vec::new(),
        }
    }

    /// The row's shape version.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Append a named column value.
    pub fn push(&mut self, name: &'static str, value: Value) {
        self.columns.push((name, value));
    }

    /// Look up a column by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    /// Column values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.columns.iter().map(|(_, v)| v)
    }
}

/// Errors raised when a row does not decode into an entry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// A required column is absent or has the wrong shape.
    #[error("malformed row: {0}")]
    Malformed(String),

    /// The row's shape version exceeds what this codec understands.
    #[error("unknown row version: {0}")]
    UnknownVersion(u32),
}

/// Encode an entry into a tagged row.
///
/// Total for a well-formed [`Entry`]: entry invariants are enforced before
/// encoding is ever attempted, so this cannot fail. Column order matches the
/// `entries` table's insert statement.
pub fn encode(entry: &Entry) -> Row {
    let mut row = Row::new(ROW_VERSION);
    row.push("id", Value::Blob(entry.id.as_bytes().to_vec()));
    row.push("url", Value::Text(entry.url.clone()));
    row.push("title", Value::Text(entry.title.clone()));
    row.push("excerpt", Value::Text(entry.excerpt.clone()));
    row.push("added_at", Value::Integer(entry.added_at));
    row.push(
        "read_at",
        match entry.read_at {
            Some(ts) => Value::Integer(ts),
            None => Value::Null,
        },
    );
    row.push("archived", Value::Integer(i64::from(entry.archived)));
    row
}

/// Decode a tagged row into an entry.
pub fn decode(row: &Row) -> Result<Entry, DecodeError> {
    if row.version() > ROW_VERSION {
        return Err(DecodeError::UnknownVersion(row.version()));
    }

    let id_bytes = require_blob(row, "id")?;
    let id = EntryId::try_from(id_bytes).map_err(|_| {
        DecodeError::Malformed(format!("id must be 32 bytes, got {}", id_bytes.len()))
    })?;

    let archived = match require_integer(row, "archived")? {
        0 => false,
        1 => true,
        other => {
            return Err(DecodeError::Malformed(format!(
                "archived must be 0 or 1, got {other}"
            )))
        }
    };

    Ok(Entry {
        id,
        url: require_text(row, "url")?.to_string(),
        title: require_text(row, "title")?.to_string(),
        excerpt: require_text(row, "excerpt")?.to_string(),
        added_at: require_integer(row, "added_at")?,
        read_at: optional_integer(row, "read_at")?,
        archived,
    })
}

fn require<'a>(row: &'a Row, name: &str) -> Result<&'a Value, DecodeError> {
    row.get(name)
        .ok_or_else(|| DecodeError::Malformed(format!("missing column: {name}")))
}

fn require_text<'a>(row: &'a Row, name: &str) -> Result<&'a str, DecodeError> {
    match require(row, name)? {
        Value::Text(s) => Ok(s),
        other => Err(DecodeError::Malformed(format!(
            "column {name} must be text, got {}",
            other.kind()
        ))),
    }
}

fn require_integer(row: &Row, name: &str) -> Result<i64, DecodeError> {
    match require(row, name)? {
        Value::Integer(i) => Ok(*i),
        other => Err(DecodeError::Malformed(format!(
            "column {name} must be an integer, got {}",
            other.kind()
        ))),
    }
}

fn optional_integer(row: &Row, name: &str) -> Result<Option<i64>, DecodeError> {
    match require(row, name)? {
        Value::Null => Ok(None),
        Value::Integer(i) => Ok(Some(*i)),
        other => Err(DecodeError::Malformed(format!(
            "column {name} must be an integer or null, got {}",
            other.kind()
        ))),
    }
}

fn require_blob<'a>(row: &'a Row, name: &str) -> Result<&'a [u8], DecodeError> {
    match require(row, name)? {
        Value::Blob(b) => Ok(b),
        other => Err(DecodeError::Malformed(format!(
            "column {name} must be a blob, got {}",
            other.kind()
        ))),
    }
}
