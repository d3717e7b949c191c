use super::{Formatter, Params};

use prism_core::{Family, Result};
use std::fmt::Write;

/// A DDL statement whose existence check is emulated by catching the error
/// the database raises when the object already exists, or is missing.
#[derive(Debug, Clone, Copy)]
pub(super) enum Guard {
    CreateTable,
    CreateIndex,
    CreateSequence,
    DropTable,
    DropIndex,
    DropSequence,
}

impl Guard {
    fn is_create(self) -> bool {
        matches!(
            self,
            Guard::CreateTable | Guard::CreateIndex | Guard::CreateSequence
        )
    }

    fn oracle_sqlcode(self) -> i32 {
        match self {
            Guard::CreateTable | Guard::CreateIndex | Guard::CreateSequence => -955,
            Guard::DropTable => -942,
            Guard::DropIndex => -1418,
            Guard::DropSequence => -2289,
        }
    }

    fn sql_server_error(self) -> i32 {
        match self {
            Guard::CreateTable | Guard::CreateSequence => 2714,
            Guard::CreateIndex => 1913,
            Guard::DropTable | Guard::DropIndex | Guard::DropSequence => 3701,
        }
    }

    fn db2_sqlstate(self) -> &'static str {
        if self.is_create() {
            "42710"
        } else {
            "42704"
        }
    }

    fn postgres_condition(self) -> &'static str {
        match self {
            Guard::CreateTable | Guard::CreateIndex | Guard::CreateSequence => "duplicate_table",
            Guard::DropIndex | Guard::DropSequence => "undefined_object",
            Guard::DropTable => "undefined_table",
        }
    }
}

/// Escapes SQL for embedding in a single-quoted string literal.
pub(super) fn quote(sql: &str) -> String {
    sql.replace('\'', "''")
}

/// A dollar-quote delimiter for a Postgres `DO` body that does not occur in
/// `body`: `$$`, else `$prism$`, `$prism1$`, ..
pub(super) fn dollar_tag(body: &str) -> String {
    if !body.contains("$$") {
        return "$$".to_string();
    }

    (0..)
        .map(|i| match i {
            0 => "$prism$".to_string(),
            i => format!("$prism{i}$"),
        })
        .find(|tag| !body.contains(tag.as_str()))
        .unwrap_or_default()
}

/// Renders `render` inside the dialect's equivalent of a try/catch block that
/// swallows only the error class named by `guard`.
pub(super) fn guarded<P: Params>(
    f: &mut Formatter<'_, P>,
    guard: Guard,
    render: impl FnOnce(&mut Formatter<'_, P>) -> Result<()>,
) -> Result<()> {
    let family = f.dialect().family();

    let feature = if guard.is_create() {
        "IF NOT EXISTS"
    } else {
        "IF EXISTS"
    };

    if !matches!(
        family,
        Family::Oracle
            | Family::SqlServer
            | Family::Db2
            | Family::Firebird
            | Family::Postgres
            | Family::YugabyteDb
            | Family::Redshift
    ) {
        return Err(f.unsupported(feature));
    }

    let nested = f.block_depth > 0;
    let sql = f.nested(render)?;

    tracing::trace!(?guard, dialect = %f.dialect(), "emulating DDL existence check");

    match family {
        Family::Oracle => {
            let code = guard.oracle_sqlcode();
            write!(
                f.dst,
                "BEGIN EXECUTE IMMEDIATE '{}'; EXCEPTION WHEN OTHERS THEN IF SQLCODE != {code} THEN RAISE; END IF; END;",
                quote(&sql)
            )?;
        }
        Family::SqlServer => {
            let code = guard.sql_server_error();
            write!(
                f.dst,
                "BEGIN TRY {sql} END TRY BEGIN CATCH IF ERROR_NUMBER() != {code} THROW; END CATCH"
            )?;
        }
        Family::Db2 => {
            let state = guard.db2_sqlstate();
            write!(
                f.dst,
                "BEGIN DECLARE CONTINUE HANDLER FOR SQLSTATE '{state}' BEGIN END; EXECUTE IMMEDIATE '{}'; END",
                quote(&sql)
            )?;
        }
        Family::Firebird => {
            let open = if nested { "BEGIN" } else { "EXECUTE BLOCK AS BEGIN" };
            write!(
                f.dst,
                "{open} EXECUTE STATEMENT '{}'; WHEN SQLCODE -607 DO BEGIN END END",
                quote(&sql)
            )?;
        }
        Family::Postgres | Family::YugabyteDb | Family::Redshift => {
            let condition = guard.postgres_condition();
            let body = format!(
                "BEGIN EXECUTE '{}'; EXCEPTION WHEN {condition} THEN NULL; END",
                quote(&sql)
            );

            // Already inside a DO body
            if nested {
                f.dst.push_str(&body);
            } else {
                let tag = dollar_tag(&body);
                write!(f.dst, "DO {tag} {body} {tag}")?;
            }
        }
        _ => return Err(f.unsupported(feature)),
    }

    Ok(())
}
