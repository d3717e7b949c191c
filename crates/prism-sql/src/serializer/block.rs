use super::{
    ddl, flavor,
    try_catch::{dollar_tag, quote},
    Formatter, Params, Qualified, ToSql,
};

use prism_core::{
    stmt::{Block, Statement},
    Family, Name, Result,
};
use std::mem;

impl ToSql for &Block {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let inline = mem::replace(&mut f.inline, true);
        let ret = block(f, self);
        f.inline = inline;
        ret
    }
}

fn block<P: Params>(f: &mut Formatter<'_, P>, block: &Block) -> Result<()> {
    // Only the outermost block carries the dialect's scaffolding
    if f.block_depth > 0 {
        fmt!(f, "BEGIN ");
        body(f, block)?;
        fmt!(f, "END");
        return Ok(());
    }

    match f.dialect().family() {
        Family::Postgres | Family::YugabyteDb => {
            let sql = f.nested(|f| body(f, block))?;
            let tag = dollar_tag(&sql);
            fmt!(f, "DO " tag.as_str() " BEGIN " sql.as_str() "END " tag.as_str());
        }
        Family::Oracle => {
            fmt!(f, "BEGIN ");
            body(f, block)?;
            fmt!(f, "END;");
        }
        Family::Db2 | Family::SqlServer => {
            fmt!(f, "BEGIN ");
            body(f, block)?;
            fmt!(f, "END");
        }
        Family::Firebird => {
            fmt!(f, "EXECUTE BLOCK AS BEGIN ");
            body(f, block)?;
            fmt!(f, "END");
        }
        Family::MariaDb => {
            fmt!(f, "BEGIN NOT ATOMIC ");
            body(f, block)?;
            fmt!(f, "END");
        }
        Family::MySql => {
            // No anonymous blocks; run the body as a throwaway procedure
            let name = Name::from(block.name.as_str());

            fmt!(f, "CREATE PROCEDURE " Qualified(&name) "() BEGIN ");
            body(f, block)?;
            fmt!(f, "END; CALL " Qualified(&name) "(); DROP PROCEDURE " Qualified(&name) ";");
        }
        _ => return Err(f.unsupported("procedural blocks")),
    }

    Ok(())
}

/// Each executable statement, terminated by `;`.
fn body<P: Params>(f: &mut Formatter<'_, P>, block: &Block) -> Result<()> {
    f.block_depth += 1;
    let ret = statements(f, block);
    f.block_depth -= 1;
    ret
}

fn statements<P: Params>(f: &mut Formatter<'_, P>, block: &Block) -> Result<()> {
    for stmt in block.statements.iter().filter(|stmt| stmt.is_executable()) {
        if is_ddl(stmt) && f.supports(flavor::DYNAMIC_DDL_IN_BLOCKS) && !ddl::is_guarded(f, stmt) {
            dynamic(f, stmt)?;
        } else {
            stmt.to_sql(&mut *f)?;
        }

        if !f.dst.ends_with(';') {
            f.dst.push(';');
        }
        f.dst.push(' ');
    }

    Ok(())
}

/// DDL that cannot appear directly in the dialect's procedural language is
/// run as dynamic SQL.
fn dynamic<P: Params>(f: &mut Formatter<'_, P>, stmt: &Statement) -> Result<()> {
    let sql = quote(&f.nested(|f| stmt.to_sql(f))?);
    let execute = if f.dialect().family() == Family::Firebird {
        "EXECUTE STATEMENT '"
    } else {
        "EXECUTE IMMEDIATE '"
    };

    fmt!(f, execute sql "'");
    Ok(())
}

fn is_ddl(stmt: &Statement) -> bool {
    matches!(
        stmt,
        Statement::CreateIndex(_)
            | Statement::DropIndex(_)
            | Statement::Truncate(_)
            | Statement::CreateSequence(_)
            | Statement::DropSequence(_)
            | Statement::CreateTable(_)
            | Statement::DropTable(_)
    )
}
