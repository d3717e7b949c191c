use crate::Name;

#[derive(Debug, Clone)]
pub struct SequenceMeta {
    pub name: Name,
    pub start_with: Option<i64>,
    pub increment_by: Option<i64>,
}

impl SequenceMeta {
    pub fn new(name: impl Into<Name>) -> SequenceMeta {
        SequenceMeta {
            name: name.into(),
            start_with: None,
            increment_by: None,
        }
    }
}
