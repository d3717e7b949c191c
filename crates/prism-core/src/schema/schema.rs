use super::{SequenceMeta, TableMeta};
use crate::Name;

#[derive(Debug, Clone, Default)]
pub struct Schema {
    pub name: Name,
    pub tables: Vec<TableMeta>,
    pub sequences: Vec<SequenceMeta>,
}

impl Schema {
    pub fn new(name: impl Into<Name>) -> Schema {
        Schema {
            name: name.into(),
            ..Schema::default()
        }
    }

    /// Adds a table, qualifying its name with this schema's name.
    pub fn table(mut self, mut table: TableMeta) -> Schema {
        table.name = self.name.append(table.name.unqualified());
        self.tables.push(table);
        self
    }

    pub fn sequence(mut self, mut sequence: SequenceMeta) -> Schema {
        sequence.name = self.name.append(sequence.name.unqualified());
        self.sequences.push(sequence);
        self
    }
}
