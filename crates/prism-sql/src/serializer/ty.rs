use super::{Formatter, Params, ToSql};

use prism_core::{stmt::DataType, Dialect, Error, Family, Result};

/// A type as declared in DDL.
pub(super) struct Ty<'a>(pub(super) &'a DataType);

/// A type as the target of a `CAST`.
pub(super) struct CastTy<'a>(pub(super) &'a DataType);

impl ToSql for Ty<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let name = type_name(f.dialect(), self.0, false)?;
        f.dst.push_str(&name);
        Ok(())
    }
}

impl ToSql for CastTy<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) -> Result<()> {
        let name = type_name(f.dialect(), self.0, true)?;
        f.dst.push_str(&name);
        Ok(())
    }
}

fn sized(name: &str, length: Option<u32>, default: Option<&str>) -> String {
    match (length, default) {
        (Some(length), _) => format!("{name}({length})"),
        (None, Some(default)) => format!("{name}({default})"),
        (None, None) => name.to_string(),
    }
}

fn type_name(dialect: Dialect, ty: &DataType, cast: bool) -> Result<String> {
    use Family as F;

    let family = dialect.family();
    let postgres = matches!(family, F::Postgres | F::YugabyteDb | F::Redshift);
    let mysql = matches!(family, F::MySql | F::MariaDb);
    let unsupported = || Error::unsupported_feature(dialect, &format!("data type {ty:?}"));

    let name = match ty {
        DataType::Boolean => match family {
            F::Oracle if dialect < Dialect::Oracle23ai => "NUMBER(1)".into(),
            F::SqlServer | F::Sybase => "BIT".into(),
            F::Firebird if dialect == Dialect::Firebird2_5 => "SMALLINT".into(),
            F::Db2 if dialect <= Dialect::Db2_10 => "SMALLINT".into(),
            F::Cubrid => "SMALLINT".into(),
            F::BigQuery => "BOOL".into(),
            _ => "BOOLEAN".into(),
        },
        DataType::TinyInt | DataType::SmallInt | DataType::Integer | DataType::BigInt
            if mysql && cast =>
        {
            "SIGNED".into()
        }
        DataType::TinyInt | DataType::SmallInt | DataType::Integer | DataType::BigInt
            if family == F::BigQuery =>
        {
            "INT64".into()
        }
        DataType::TinyInt => match family {
            F::Oracle => "NUMBER(3)".into(),
            F::Derby | F::Db2 | F::Firebird | F::Postgres | F::YugabyteDb | F::Redshift => {
                "SMALLINT".into()
            }
            _ => "TINYINT".into(),
        },
        DataType::SmallInt => match family {
            F::Oracle => "NUMBER(5)".into(),
            _ => "SMALLINT".into(),
        },
        DataType::Integer => match family {
            F::Oracle => "NUMBER(10)".into(),
            F::MySql | F::MariaDb => "INT".into(),
            _ => "INTEGER".into(),
        },
        DataType::BigInt => match family {
            F::Oracle => "NUMBER(19)".into(),
            _ => "BIGINT".into(),
        },
        DataType::Decimal { precision, scale } => {
            let base = match family {
                F::Oracle => "NUMBER",
                F::BigQuery => "NUMERIC",
                F::Sqlite if cast => "NUMERIC",
                _ => "DECIMAL",
            };
            match (precision, scale) {
                (Some(precision), Some(scale)) => format!("{base}({precision}, {scale})"),
                (Some(precision), None) => format!("{base}({precision})"),
                _ => base.to_string(),
            }
        }
        DataType::Real | DataType::Double if family == F::BigQuery => "FLOAT64".into(),
        DataType::Real | DataType::Double if family == F::Sqlite => "REAL".into(),
        DataType::Real | DataType::Double if mysql && cast => {
            if dialect >= Dialect::MySql8_0_19 && dialect <= Dialect::MySql
                || dialect >= Dialect::MariaDb10_5 && dialect <= Dialect::MariaDb
            {
                "DOUBLE".into()
            } else {
                "DECIMAL(65, 30)".into()
            }
        }
        DataType::Real => "REAL".into(),
        DataType::Double => match family {
            F::SqlServer | F::Sybase => "FLOAT".into(),
            F::Oracle | F::Firebird | F::Postgres | F::YugabyteDb | F::Redshift => {
                "DOUBLE PRECISION".into()
            }
            _ => "DOUBLE".into(),
        },
        DataType::Char(length) => match family {
            F::Sqlite if cast => "TEXT".into(),
            F::BigQuery => "STRING".into(),
            _ => sized("CHAR", *length, None),
        },
        DataType::VarChar(length) => match family {
            F::MySql | F::MariaDb if cast => sized("CHAR", *length, None),
            F::MySql | F::MariaDb => match length {
                Some(_) => sized("VARCHAR", *length, None),
                None => "TEXT".into(),
            },
            F::Sqlite if cast || length.is_none() => "TEXT".into(),
            F::Oracle => sized("VARCHAR2", *length, Some("4000")),
            F::SqlServer => sized("VARCHAR", *length, Some("max")),
            F::Derby | F::Db2 => sized("VARCHAR", *length, Some("32672")),
            F::Firebird => sized("VARCHAR", *length, Some("4000")),
            F::Hsqldb => sized("VARCHAR", *length, Some("32768")),
            F::BigQuery => "STRING".into(),
            _ => sized("VARCHAR", *length, None),
        },
        DataType::Clob => match family {
            F::MySql | F::MariaDb if cast => "CHAR".into(),
            F::MySql | F::MariaDb => "LONGTEXT".into(),
            F::SqlServer => "VARCHAR(max)".into(),
            F::Firebird => "BLOB SUB_TYPE TEXT".into(),
            F::BigQuery => "STRING".into(),
            F::Sqlite | F::DuckDb => "TEXT".into(),
            _ if postgres => "TEXT".into(),
            _ => "CLOB".into(),
        },
        DataType::Binary(_) | DataType::VarBinary(_) | DataType::Blob if postgres => {
            "BYTEA".into()
        }
        DataType::Binary(_) | DataType::VarBinary(_) | DataType::Blob
            if family == F::BigQuery =>
        {
            "BYTES".into()
        }
        DataType::Binary(_) | DataType::VarBinary(_) | DataType::Blob
            if family == F::Sqlite =>
        {
            "BLOB".into()
        }
        DataType::Binary(length) | DataType::VarBinary(length) if mysql && cast => {
            sized("BINARY", *length, None)
        }
        DataType::Binary(length) => match family {
            F::Oracle => sized("RAW", *length, Some("2000")),
            F::Derby => format!("{} FOR BIT DATA", sized("CHAR", *length, None)),
            _ => sized("BINARY", *length, None),
        },
        DataType::VarBinary(length) => match family {
            F::Oracle => sized("RAW", *length, Some("2000")),
            F::SqlServer => sized("VARBINARY", *length, Some("max")),
            F::Derby => format!("{} FOR BIT DATA", sized("VARCHAR", *length, Some("32672"))),
            F::Firebird => "BLOB".into(),
            _ => sized("VARBINARY", *length, None),
        },
        DataType::Blob => match family {
            F::MySql | F::MariaDb => "LONGBLOB".into(),
            F::SqlServer => "VARBINARY(max)".into(),
            _ => "BLOB".into(),
        },
        DataType::Date => "DATE".into(),
        DataType::Time => match family {
            F::Oracle => return Err(unsupported()),
            _ => "TIME".into(),
        },
        DataType::Timestamp => match family {
            F::SqlServer => "DATETIME2".into(),
            F::Sybase | F::MySql | F::MariaDb | F::BigQuery => "DATETIME".into(),
            _ => "TIMESTAMP".into(),
        },
        DataType::Uuid => match family {
            F::Postgres | F::YugabyteDb | F::H2 | F::Hsqldb | F::DuckDb => "UUID".into(),
            F::SqlServer => "UNIQUEIDENTIFIER".into(),
            F::Oracle => "VARCHAR2(36)".into(),
            _ => "CHAR(36)".into(),
        },
        DataType::Json => match family {
            F::Postgres | F::YugabyteDb => "JSONB".into(),
            F::Oracle if dialect < Dialect::Oracle21c => "CLOB".into(),
            F::SqlServer => "NVARCHAR(max)".into(),
            F::Sqlite => "TEXT".into(),
            F::Snowflake => "VARIANT".into(),
            F::Redshift => "SUPER".into(),
            _ => "JSON".into(),
        },
        DataType::Array(element) => {
            let element = type_name(dialect, element, cast)?;
            match family {
                F::Postgres | F::YugabyteDb | F::DuckDb => format!("{element}[]"),
                F::H2 | F::Hsqldb => format!("{element} ARRAY"),
                F::Trino => format!("ARRAY({element})"),
                F::BigQuery => format!("ARRAY<{element}>"),
                _ => return Err(unsupported()),
            }
        }
        DataType::Other(name) => name.clone(),
        DataType::Unknown => {
            return Err(Error::invalid_statement(
                "cannot render a value of unknown type as a SQL type",
            ))
        }
    };

    Ok(name)
}
