use std::fmt;

/// How an individual name part asks to be quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Quoted {
    /// Quoting follows the render settings.
    #[default]
    Default,

    /// Always quoted, unless quoting is disabled entirely.
    Quoted,

    /// Never quoted, unless quoting is forced for every name.
    Unquoted,
}

/// A possibly qualified SQL identifier, e.g. `schema.table.column`.
///
/// Empty parts are dropped at construction, so `Name::new(["", "book"])` is
/// the same name as `Name::new(["book"])`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Name {
    parts: Vec<NamePart>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamePart {
    pub value: String,
    pub quoted: Quoted,
}

impl Name {
    pub fn new<I, S>(parts: I) -> Name
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Name::with_quoting(parts, Quoted::Default)
    }

    /// Builds a name whose parts all use the given quoting.
    pub fn with_quoting<I, S>(parts: I, quoted: Quoted) -> Name
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Name {
            parts: parts
                .into_iter()
                .map(Into::into)
                .filter(|value: &String| !value.is_empty())
                .map(|value| NamePart { value, quoted })
                .collect(),
        }
    }

    pub fn parts(&self) -> &[NamePart] {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Returns `true` if the name has more than one part.
    pub fn qualified(&self) -> bool {
        self.parts.len() > 1
    }

    /// The last part only.
    pub fn unqualified(&self) -> Name {
        Name {
            parts: self.parts.last().cloned().into_iter().collect(),
        }
    }

    /// Every part but the last.
    pub fn qualifier(&self) -> Name {
        let len = self.parts.len().saturating_sub(1);
        Name {
            parts: self.parts[..len].to_vec(),
        }
    }

    pub fn first(&self) -> Option<&str> {
        self.parts.first().map(|part| &part.value[..])
    }

    pub fn last(&self) -> Option<&str> {
        self.parts.last().map(|part| &part.value[..])
    }

    /// Returns a new name with `other` appended after this one's parts.
    pub fn append(&self, other: impl Into<Name>) -> Name {
        let mut parts = self.parts.clone();
        parts.extend(other.into().parts);
        Name { parts }
    }

    pub fn quoted(&self) -> Name {
        self.requote(Quoted::Quoted)
    }

    pub fn unquoted(&self) -> Name {
        self.requote(Quoted::Unquoted)
    }

    fn requote(&self, quoted: Quoted) -> Name {
        Name {
            parts: self
                .parts
                .iter()
                .map(|part| NamePart {
                    value: part.value.clone(),
                    quoted,
                })
                .collect(),
        }
    }

    /// Case-insensitive comparison of the unqualified parts.
    pub fn eq_unqualified(&self, other: &Name) -> bool {
        match (self.last(), other.last()) {
            (Some(lhs), Some(rhs)) => lhs.eq_ignore_ascii_case(rhs),
            _ => false,
        }
    }

    /// Case-insensitive comparison of every part.
    pub fn eq_ignore_case(&self, other: &Name) -> bool {
        self.parts.len() == other.parts.len()
            && self
                .parts
                .iter()
                .zip(&other.parts)
                .all(|(lhs, rhs)| lhs.value.eq_ignore_ascii_case(&rhs.value))
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Name::new([value])
    }
}

impl From<String> for Name {
    fn from(value: String) -> Self {
        Name::new([value])
    }
}

impl From<&Name> for Name {
    fn from(value: &Name) -> Self {
        value.clone()
    }
}

impl<const N: usize> From<[&str; N]> for Name {
    fn from(value: [&str; N]) -> Self {
        Name::new(value)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for part in &self.parts {
            write!(f, "{sep}{}", part.value)?;
            sep = ".";
        }
        Ok(())
    }
}
