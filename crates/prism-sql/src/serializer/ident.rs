use super::{Formatter, Params, Period, ToSql};
use crate::{RenderNameCase, RenderQuotedNames};

use prism_core::{Family, Name, NamePart, Quoted, Result};

/// A possibly qualified identifier. The qualifier is dropped when the
/// formatter is not qualifying names.
pub(super) struct Ident<'a>(pub(super) &'a Name);

/// Every part of a name, whatever the formatter's qualify flag. Tables,
/// indexes and sequences are always rendered this way.
pub(super) struct Qualified<'a>(pub(super) &'a Name);

/// The last part of a name only, e.g. a column in an INSERT column list.
pub(super) struct Unqualified<'a>(pub(super) &'a Name);

/// Identifier delimiters for a family.
fn quotes(family: Family) -> (char, char) {
    match family {
        Family::MySql | Family::MariaDb | Family::BigQuery | Family::ClickHouse => ('`', '`'),
        Family::SqlServer | Family::Sybase => ('[', ']'),
        _ => ('"', '"'),
    }
}

impl ToSql for Ident<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if f.qualify {
            Qualified(self.0).to_sql(f)
        } else {
            Unqualified(self.0).to_sql(f)
        }
    }
}

impl ToSql for Qualified<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        fmt!(f, Period(self.0.parts()));
        Ok(())
    }
}

impl ToSql for Unqualified<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        if let Some(part) = self.0.parts().last() {
            part.to_sql(f)?;
        }
        Ok(())
    }
}

impl ToSql for &NamePart {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let settings = f.settings();

        let quote = match settings.render_quoted_names {
            RenderQuotedNames::Always => true,
            RenderQuotedNames::Never => false,
            RenderQuotedNames::ExplicitDefaultQuoted => self.quoted != Quoted::Unquoted,
            RenderQuotedNames::ExplicitDefaultUnquoted => self.quoted == Quoted::Quoted,
        };

        let value = match settings.render_name_case {
            RenderNameCase::Lower => self.value.to_lowercase(),
            RenderNameCase::Upper => self.value.to_uppercase(),
            RenderNameCase::LowerIfUnquoted if !quote => self.value.to_lowercase(),
            RenderNameCase::UpperIfUnquoted if !quote => self.value.to_uppercase(),
            _ => self.value.clone(),
        };

        if !quote {
            f.dst.push_str(&value);
            return Ok(());
        }

        let (open, close) = quotes(f.dialect().family());

        f.dst.push(open);
        for c in value.chars() {
            if c == close {
                f.dst.push(close);
            }
            f.dst.push(c);
        }
        f.dst.push(close);

        Ok(())
    }
}
