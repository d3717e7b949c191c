use super::{flavor, ty::CastTy, Formatter, Params, ToSql};

use prism_core::{
    stmt::{CaseBuilder, Expr, ExprCast},
    Family, Result,
};

const TRUE_STRINGS: [&str; 6] = ["1", "y", "yes", "true", "on", "enabled"];
const FALSE_STRINGS: [&str; 6] = ["0", "n", "no", "false", "off", "disabled"];

impl ToSql for &ExprCast {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let expr = &*self.expr;
        let from = expr.ty();
        let to = &self.ty;

        if to.is_boolean() && !f.supports(flavor::BOOLEAN_CAST) {
            if from.is_numeric() {
                return numeric_to_boolean(expr).to_sql(f);
            }

            if from.is_string() {
                return string_to_boolean(expr).to_sql(f);
            }
        }

        if f.dialect().family() == Family::Derby {
            // Derby cannot cast numbers to VARCHAR, and strings only to
            // DECIMAL among the numeric types.
            if from.is_numeric() && to.is_string() {
                fmt!(f, "TRIM(CAST(CAST(" expr " AS CHAR(38)) AS " CastTy(to) "))");
                return Ok(());
            }

            if from.is_string() && to.is_float() {
                fmt!(f, "CAST(CAST(" expr " AS DECIMAL) AS " CastTy(to) ")");
                return Ok(());
            }
        }

        fmt!(f, "CAST(" expr " AS " CastTy(to) ")");
        Ok(())
    }
}

/// `CASE WHEN x = 0 THEN FALSE WHEN x <> 0 THEN TRUE END`, NULL for NULL.
fn numeric_to_boolean(expr: &Expr) -> Expr {
    CaseBuilder::new()
        .when(expr.clone().eq(Expr::inline(0)), Expr::inline(false))
        .when(expr.clone().ne(Expr::inline(0)), Expr::inline(true))
        .end()
}

/// Recognized spellings map to TRUE or FALSE, anything else to NULL.
fn string_to_boolean(expr: &Expr) -> Expr {
    let matches = |strings: [&str; 6]| {
        Expr::lower(expr.clone()).in_list(strings.into_iter().map(|s| Expr::inline(s)))
    };

    CaseBuilder::new()
        .when(matches(TRUE_STRINGS), Expr::inline(true))
        .when(matches(FALSE_STRINGS), Expr::inline(false))
        .end()
}
