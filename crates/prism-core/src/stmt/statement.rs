use super::*;

/// A renderable SQL statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Select(Select),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
    CreateIndex(CreateIndex),
    DropIndex(DropIndex),
    Truncate(Truncate),
    CreateSequence(CreateSequence),
    DropSequence(DropSequence),
    CreateTable(CreateTable),
    DropTable(DropTable),
    Block(Block),
}

impl Statement {
    /// Returns `false` for statements that would do nothing, such as an
    /// UPDATE without any SET items. These render to an empty string.
    pub fn is_executable(&self) -> bool {
        match self {
            Statement::Update(update) => !update.assignments.is_empty(),
            Statement::Block(block) => block.statements.iter().any(Statement::is_executable),
            _ => true,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Statement::Select(_) => "SELECT",
            Statement::Insert(_) => "INSERT",
            Statement::Update(_) => "UPDATE",
            Statement::Delete(_) => "DELETE",
            Statement::CreateIndex(_) => "CREATE INDEX",
            Statement::DropIndex(_) => "DROP INDEX",
            Statement::Truncate(_) => "TRUNCATE",
            Statement::CreateSequence(_) => "CREATE SEQUENCE",
            Statement::DropSequence(_) => "DROP SEQUENCE",
            Statement::CreateTable(_) => "CREATE TABLE",
            Statement::DropTable(_) => "DROP TABLE",
            Statement::Block(_) => "BLOCK",
        }
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Statement::Select(value)
    }
}
