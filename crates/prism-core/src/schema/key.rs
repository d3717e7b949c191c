use crate::Name;

/// A primary or unique key.
#[derive(Debug, Clone)]
pub struct Key {
    pub name: String,
    pub columns: Vec<String>,
}

/// A foreign key from the owning table to `references`.
#[derive(Debug, Clone)]
pub struct ForeignKey {
    pub name: String,
    pub columns: Vec<String>,
    pub references: Name,
    pub referenced_columns: Vec<String>,
}

impl Key {
    pub fn new(name: &str, columns: &[&str]) -> Key {
        Key {
            name: name.to_string(),
            columns: columns.iter().map(|column| column.to_string()).collect(),
        }
    }
}

impl ForeignKey {
    pub fn new(
        name: &str,
        columns: &[&str],
        references: impl Into<Name>,
        referenced_columns: &[&str],
    ) -> ForeignKey {
        ForeignKey {
            name: name.to_string(),
            columns: columns.iter().map(|column| column.to_string()).collect(),
            references: references.into(),
            referenced_columns: referenced_columns
                .iter()
                .map(|column| column.to_string())
                .collect(),
        }
    }
}
