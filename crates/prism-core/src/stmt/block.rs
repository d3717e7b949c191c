use super::Statement;

use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};

/// An anonymous procedural block wrapping a sequence of statements.
///
/// Dialects without anonymous blocks run the block as a temporary stored
/// procedure. Its name is chosen once, here, so rendering the same block
/// twice yields the same SQL.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub name: String,
    pub statements: Vec<Statement>,
}

impl Block {
    pub fn new(statements: Vec<Statement>) -> Block {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or_default();
        let suffix: u32 = rand::thread_rng().gen();

        Block {
            name: format!("block_{millis}_{suffix}"),
            statements,
        }
    }
}

impl From<Block> for Statement {
    fn from(value: Block) -> Self {
        Statement::Block(value)
    }
}
