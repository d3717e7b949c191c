use super::{Schema, SequenceMeta, TableMeta};
use crate::Name;

/// Every schema known to the renderer.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub schemas: Vec<Schema>,
}

impl Catalog {
    pub fn new() -> Catalog {
        Catalog::default()
    }

    pub fn schema(mut self, schema: Schema) -> Catalog {
        self.schemas.push(schema);
        self
    }

    /// Looks up a table. A qualified name selects the schema by its
    /// qualifier; an unqualified name matches the first table with that name
    /// in any schema. Comparison ignores ASCII case.
    pub fn table(&self, name: &Name) -> Option<&TableMeta> {
        self.candidates(name)
            .flat_map(|schema| &schema.tables)
            .find(|table| table.name.eq_unqualified(name))
    }

    pub fn sequence(&self, name: &Name) -> Option<&SequenceMeta> {
        self.candidates(name)
            .flat_map(|schema| &schema.sequences)
            .find(|sequence| sequence.name.eq_unqualified(name))
    }

    fn candidates<'a>(&'a self, name: &Name) -> impl Iterator<Item = &'a Schema> + 'a {
        let qualifier = name.qualified().then(|| name.qualifier());

        self.schemas.iter().filter(move |schema| match &qualifier {
            Some(qualifier) => schema.name.eq_unqualified(qualifier),
            None => true,
        })
    }
}
