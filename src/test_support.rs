use crate::domain::entry::ListEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: char,
    pub content: u32,
}

impl ListEntry for Row {
    type StableId = char;

    fn stable_id(&self) -> char {
        self.id
    }
}

pub fn row(id: char, content: u32) -> Row {
    Row { id, content }
}

pub fn ids(rows: &[Row]) -> String {
    rows.iter().map(|row| row.id).collect()
}
