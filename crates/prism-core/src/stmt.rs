mod block;
pub use block::Block;

mod cond_between;
pub use cond_between::{BetweenBuilder, CondBetween};

mod cond_compare;
pub use cond_compare::{CompareOp, CondCompare};

mod cond_in;
pub use cond_in::{CondInList, CondInSelect};

mod cond_like;
pub use cond_like::CondLike;

mod cond_null;
pub use cond_null::{CondIsDistinctFrom, CondIsNull};

mod cond_row;
pub use cond_row::{CondRowBetween, CondRowCompare, CondRowInList, CondRowInSelect, CondRowIsNull};

mod condition;
pub use condition::{CondExists, Condition};

mod create_index;
pub use create_index::CreateIndex;

mod create_sequence;
pub use create_sequence::CreateSequence;

mod create_table;
pub use create_table::{ColumnDef, CreateTable};

mod delete;
pub use delete::Delete;

mod drop_index;
pub use drop_index::DropIndex;

mod drop_sequence;
pub use drop_sequence::DropSequence;

mod drop_table;
pub use drop_table::DropTable;

mod eval;

mod expr;
pub use expr::Expr;

mod expr_arith;
pub use expr_arith::{ArithOp, ExprArith};

mod expr_bit;
pub use expr_bit::{BitOp, ExprBit};

mod expr_case;
pub use expr_case::{CaseBuilder, ExprCase, SimpleCaseBuilder};

mod expr_cast;
pub use expr_cast::ExprCast;

mod expr_field;
pub use expr_field::ExprField;

mod expr_func;
pub use expr_func::{ExprFunc, Func};

mod expr_sequence;
pub use expr_sequence::{ExprSequence, SequenceOp};

mod expr_value;
pub use expr_value::ExprValue;

mod input;
pub use input::{ConstInput, Input};

mod insert;
pub use insert::{Insert, InsertSource};

mod join;
pub use join::{JoinBuilder, JoinType, TableJoin};

mod order_by;
pub use order_by::{Direction, Nulls, OrderByExpr};

mod row;
pub use row::Row;

mod select;
pub use select::{Cte, Distinct, Limit, Select, SelectField, SetOp, SetOperation, With};

mod statement;
pub use statement::Statement;

mod table;
pub use table::{Table, TableNamed};

mod table_derived;
pub use table_derived::{TableAlias, TableArray, TableDerived, TableRowsFrom, TableValues};

mod truncate;
pub use truncate::{Identity, Truncate};

mod ty;
pub use ty::DataType;

mod update;
pub use update::{Assignment, RowSource, Update};

mod value;
pub use value::Value;

mod value_cmp;
