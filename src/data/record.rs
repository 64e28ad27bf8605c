//! Record types for the table data set.
//!
//! A [`Record`] is one row of the fixture. The seven known columns are
//! modelled by the closed [`Field`] enumeration; anything else in the JSON
//! object is kept in [`Record::extra`].

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// The identifier of a record.
pub type RecordId = i64;

/// A known record field.
///
/// The declaration order is the fixed display order of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Numeric record identifier.
    Id,
    /// Given name.
    FirstName,
    /// Family name.
    LastName,
    /// Email address.
    Email,
    /// Gender.
    Gender,
    /// Mobile phone number.
    Mobile,
    /// Status flag, `"true"` or `"false"`.
    Status,
}

/// How values of a field are compared when sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Integer comparison.
    Numeric,
    /// Locale-aware string comparison.
    Text,
}

impl Field {
    /// All known fields in display order.
    pub const ALL: [Field; 7] = [
        Field::Id,
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Gender,
        Field::Mobile,
        Field::Status,
    ];

    /// The JSON / configuration name of this field.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::Email => "email",
            Field::Gender => "gender",
            Field::Mobile => "mobile",
            Field::Status => "status",
        }
    }

    /// The header label of this field.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Id => "ID",
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email Address",
            Field::Gender => "Gender",
            Field::Mobile => "Mobile",
            Field::Status => "Status",
        }
    }

    /// The comparison kind used when sorting by this field.
    pub fn value_kind(&self) -> ValueKind {
        match self {
            Field::Id => ValueKind::Numeric,
            _ => ValueKind::Text,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a name does not match any known field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// One row of the data set.
///
/// String fields missing from the source deserialize as empty strings. No
/// other validation is performed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Record identifier, assumed unique.
    #[serde(deserialize_with = "id_from_number_or_string")]
    pub id: RecordId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub email: String,
    /// Status flag as text. A JSON boolean is stored as `"true"`/`"false"`.
    #[serde(default, deserialize_with = "string_or_bool")]
    pub status: String,
    /// Any fields beyond the known set.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Record {
    /// Create a record with the given id and empty text fields.
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            first_name: String::new(),
            last_name: String::new(),
            gender: String::new(),
            mobile: String::new(),
            email: String::new(),
            status: String::new(),
            extra: BTreeMap::new(),
        }
    }

    /// Set a known field, returning the record.
    ///
    /// For [`Field::Id`] the value must parse as an integer; otherwise the id
    /// is left unchanged.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            Field::Id => {
                if let Ok(id) = value.trim().parse() {
                    self.id = id;
                }
            }
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::Gender => self.gender = value,
            Field::Mobile => self.mobile = value,
            Field::Status => self.status = value,
        }
        self
    }

    /// Set an extra (unknown) field, returning the record.
    pub fn with_extra(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(name.into(), value);
        self
    }

    /// The display text of a known field.
    pub fn text(&self, field: Field) -> Cow<'_, str> {
        match field {
            Field::Id => Cow::Owned(self.id.to_string()),
            Field::FirstName => Cow::Borrowed(&self.first_name),
            Field::LastName => Cow::Borrowed(&self.last_name),
            Field::Email => Cow::Borrowed(&self.email),
            Field::Gender => Cow::Borrowed(&self.gender),
            Field::Mobile => Cow::Borrowed(&self.mobile),
            Field::Status => Cow::Borrowed(&self.status),
        }
    }

    /// The text of an extra field.
    ///
    /// Strings are returned as-is, other JSON values as their JSON text and a
    /// missing or null field as the empty string.
    pub fn extra_text(&self, name: &str) -> Cow<'_, str> {
        match self.extra.get(name) {
            None | Some(serde_json::Value::Null) => Cow::Borrowed(""),
            Some(serde_json::Value::String(s)) => Cow::Borrowed(s),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }

    /// A `mailto:` link for this record's email address.
    ///
    /// Returns `None` when the email is empty.
    pub fn mailto(&self) -> Option<String> {
        let email = self.email.trim();
        if email.is_empty() {
            return None;
        }

        let url = match email.rsplit_once('@') {
            Some((local, domain)) => format!(
                "mailto:{}@{}",
                urlencoding::encode(local),
                urlencoding::encode(domain)
            ),
            None => format!("mailto:{}", urlencoding::encode(email)),
        };
        Some(url)
    }
}

fn id_from_number_or_string<'de, D>(deserializer: D) -> Result<RecordId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(RecordId),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid record id '{}'", text))),
    }
}

fn string_or_bool<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawStatus {
        Text(String),
        Flag(bool),
    }

    Ok(match RawStatus::deserialize(deserializer)? {
        RawStatus::Text(text) => text,
        RawStatus::Flag(flag) => flag.to_string(),
    })
}
