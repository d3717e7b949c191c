//! Dialect capability sets.
//!
//! Each set lists the dialects that support a feature natively. Rendering
//! code checks membership and falls back to an emulation, or to an
//! unsupported-feature error, for every other dialect.

use prism_core::{Dialect as D, DialectSet};

const fn set(dialects: &[D]) -> DialectSet {
    DialectSet::supported_by(dialects)
}

pub(super) const POSTGRES_LIKE: DialectSet = set(&[D::Postgres, D::Redshift, D::YugabyteDb]);

// Literals and boolean handling

pub(super) const NO_BOOLEAN_LITERALS: DialectSet =
    DialectSet::supported_until(&[D::Oracle21c, D::Firebird2_5, D::Db2_10])
        .union(set(&[D::SqlServer, D::Sybase, D::Cubrid]));

/// Conditions may appear in value position, and boolean values may appear
/// in predicate position.
pub(super) const BOOLEAN_TYPE: DialectSet = POSTGRES_LIKE.union(set(&[
    D::MySql,
    D::MariaDb,
    D::H2,
    D::Hsqldb,
    D::Sqlite,
    D::DuckDb,
    D::Snowflake,
    D::Trino,
    D::BigQuery,
    D::ClickHouse,
    D::Ignite,
    D::Firebird3_0,
    D::Oracle23ai,
    D::Db2_11,
]));

pub(super) const BOOLEAN_CAST: DialectSet = POSTGRES_LIKE.union(set(&[
    D::H2,
    D::Hsqldb,
    D::DuckDb,
    D::Snowflake,
    D::Trino,
    D::BigQuery,
    D::Ignite,
    D::Firebird3_0,
    D::Oracle23ai,
    D::Db2_11,
]));

pub(super) const BACKSLASH_ESCAPES: DialectSet = set(&[D::MySql, D::MariaDb]);

pub(super) const TYPED_NULLS: DialectSet = set(&[D::Derby, D::Db2, D::Hsqldb]);

pub(super) const ARRAY_LITERALS: DialectSet =
    POSTGRES_LIKE.union(set(&[D::H2, D::Hsqldb, D::DuckDb, D::Trino]));

// Functions

pub(super) const LEAST_GREATEST: DialectSet = POSTGRES_LIKE.union(set(&[
    D::MySql,
    D::MariaDb,
    D::Oracle,
    D::H2,
    D::Hsqldb,
    D::Db2,
    D::DuckDb,
    D::Snowflake,
    D::Trino,
    D::BigQuery,
    D::ClickHouse,
    D::SqlServer2022,
]));

pub(super) const HYPERBOLIC: DialectSet =
    set(&[D::Oracle, D::Db2, D::H2, D::Postgres12, D::DuckDb, D::Hana]);

/// Sqlite before 3.35 and Derby have no `POWER`.
pub(super) const NO_POWER: DialectSet =
    DialectSet::supported_until(&[D::Sqlite3_33]).union(set(&[D::Derby]));

pub(super) const LOG_WITH_BASE: DialectSet =
    POSTGRES_LIKE.union(set(&[D::Oracle, D::H2, D::MySql, D::MariaDb, D::Snowflake]));

pub(super) const AGGREGATE_FILTER: DialectSet = set(&[
    D::Postgres9_4,
    D::YugabyteDb,
    D::Sqlite3_30,
    D::H2,
    D::Hsqldb,
    D::DuckDb,
]);

pub(super) const NVL2: DialectSet = set(&[D::Oracle, D::Db2, D::H2, D::Snowflake, D::Hana]);

/// SQL Server gained `TRIM` in 2017.
pub(super) const NO_TRIM: DialectSet = DialectSet::supported_until(&[D::SqlServer2016]);

// Conditions

pub(super) const ILIKE: DialectSet =
    POSTGRES_LIKE.union(set(&[D::DuckDb, D::H2, D::Snowflake, D::ClickHouse]));

pub(super) const BETWEEN_SYMMETRIC: DialectSet = set(&[D::Postgres, D::YugabyteDb]);

pub(super) const IS_DISTINCT_FROM: DialectSet = POSTGRES_LIKE.union(set(&[
    D::H2,
    D::Hsqldb,
    D::Firebird,
    D::Db2_11,
    D::DuckDb,
    D::Snowflake,
    D::Trino,
    D::SqlServer2022,
]));

pub(super) const ROW_VALUES: DialectSet = POSTGRES_LIKE.union(set(&[
    D::MySql,
    D::MariaDb,
    D::H2,
    D::Hsqldb,
    D::Sqlite,
    D::DuckDb,
    D::Db2,
]));

pub(super) const ROW_IN: DialectSet = ROW_VALUES.union(set(&[D::Oracle]));

pub(super) const ROW_IS_NULL: DialectSet = set(&[D::Postgres, D::YugabyteDb, D::H2, D::Hsqldb]);

pub(super) const ROW_BETWEEN: DialectSet =
    set(&[D::Postgres, D::YugabyteDb, D::MySql, D::MariaDb, D::H2, D::Hsqldb]);

pub(super) const XOR: DialectSet = set(&[D::MySql, D::MariaDb]);

/// Oracle caps IN lists at this many elements.
pub(super) const IN_LIST_LIMIT: usize = 1000;

// Tables and joins

pub(super) const NATURAL_JOIN: DialectSet = POSTGRES_LIKE.union(set(&[
    D::MySql,
    D::MariaDb,
    D::Oracle,
    D::H2,
    D::Hsqldb,
    D::Sqlite,
    D::Derby,
    D::Firebird3_0,
    D::DuckDb,
    D::Snowflake,
    D::Trino,
]));

pub(super) const USING: DialectSet = POSTGRES_LIKE.union(set(&[
    D::MySql,
    D::MariaDb,
    D::Oracle,
    D::H2,
    D::Hsqldb,
    D::Sqlite,
    D::Derby,
    D::Firebird3_0,
    D::DuckDb,
    D::Snowflake,
    D::Trino,
    D::ClickHouse,
    D::BigQuery,
]));

pub(super) const NO_FULL_JOIN: DialectSet = set(&[D::MySql, D::MariaDb]);

pub(super) const NO_RIGHT_JOIN: DialectSet = DialectSet::supported_until(&[D::Sqlite3_38]);

pub(super) const LATERAL: DialectSet = set(&[
    D::Postgres9_3,
    D::YugabyteDb,
    D::MySql8_0_19,
    D::Oracle12c,
    D::Db2,
    D::Snowflake,
    D::DuckDb,
    D::Firebird4_0,
]);

pub(super) const APPLY: DialectSet = set(&[D::SqlServer, D::Oracle12c]);

pub(super) const APPLY_AS_LATERAL: DialectSet = set(&[D::Postgres9_3, D::YugabyteDb, D::Firebird4_0]);

pub(super) const SEMI_ANTI_JOIN: DialectSet = set(&[D::DuckDb, D::ClickHouse]);

pub(super) const STRAIGHT_JOIN: DialectSet = set(&[D::MySql, D::MariaDb]);

pub(super) const DERIVED_COLUMN_LIST: DialectSet = POSTGRES_LIKE.union(set(&[
    D::H2,
    D::Hsqldb,
    D::Db2,
    D::Derby,
    D::SqlServer,
    D::Firebird3_0,
    D::DuckDb,
    D::Snowflake,
    D::Trino,
    D::MySql8_0_19,
    D::Oracle23ai,
]));

pub(super) const VALUES_CONSTRUCTOR: DialectSet = POSTGRES_LIKE.union(set(&[
    D::H2,
    D::Hsqldb,
    D::Db2,
    D::Derby,
    D::SqlServer,
    D::DuckDb,
    D::Snowflake,
    D::Trino,
    D::Oracle23ai,
]));

pub(super) const VALUES_ROW: DialectSet = set(&[D::MySql8_0_19]);

pub(super) const UNNEST: DialectSet =
    POSTGRES_LIKE.union(set(&[D::H2, D::Hsqldb, D::DuckDb, D::Trino]));

pub(super) const ROWS_FROM: DialectSet = POSTGRES_LIKE;

pub(super) const TABLE_AS: DialectSet = set(&[D::Oracle]);

// SELECT

pub(super) const NULLS_ORDERING: DialectSet = POSTGRES_LIKE.union(set(&[
    D::Oracle,
    D::H2,
    D::Hsqldb,
    D::Db2_11,
    D::Sqlite3_30,
    D::Firebird,
    D::Derby,
    D::DuckDb,
    D::Snowflake,
    D::Trino,
]));

pub(super) const RECURSIVE_KEYWORD: DialectSet = POSTGRES_LIKE.union(set(&[
    D::MySql8_0,
    D::MariaDb,
    D::Sqlite,
    D::H2,
    D::Hsqldb,
    D::Firebird,
    D::DuckDb,
    D::Snowflake,
    D::Trino,
]));

pub(super) const DISTINCT_ON: DialectSet = POSTGRES_LIKE.union(set(&[D::DuckDb]));

pub(super) const NO_INTERSECT_EXCEPT: DialectSet =
    DialectSet::supported_until(&[D::MySql8_0_19]);

pub(super) const INTERSECT_ALL: DialectSet = POSTGRES_LIKE.union(set(&[
    D::Db2,
    D::Hsqldb,
    D::DuckDb,
    D::Oracle21c,
    D::MariaDb10_5,
    D::MySql,
    D::Trino,
]));

pub(super) const NO_FOR_UPDATE: DialectSet =
    set(&[D::Sqlite, D::SqlServer, D::Sybase, D::ClickHouse, D::BigQuery]);

// DML

pub(super) const NO_MULTI_ROW_VALUES: DialectSet =
    DialectSet::supported_until(&[D::Oracle21c]).union(set(&[D::Firebird]));

pub(super) const DEFAULT_VALUES: DialectSet = POSTGRES_LIKE.union(set(&[
    D::Sqlite,
    D::SqlServer,
    D::H2,
    D::Hsqldb,
    D::Firebird,
    D::DuckDb,
]));

pub(super) const ON_CONFLICT_DO_NOTHING: DialectSet =
    set(&[D::Postgres9_5, D::YugabyteDb, D::Sqlite, D::DuckDb]);

pub(super) const INSERT_IGNORE: DialectSet = set(&[D::MySql, D::MariaDb]);

pub(super) const OUTPUT: DialectSet = set(&[D::SqlServer]);

pub(super) const INSERT_RETURNING: DialectSet = set(&[
    D::Postgres,
    D::YugabyteDb,
    D::Sqlite3_35,
    D::MariaDb10_5,
    D::Firebird,
    D::DuckDb,
]);

pub(super) const UPDATE_RETURNING: DialectSet =
    set(&[D::Postgres, D::YugabyteDb, D::Sqlite3_35, D::Firebird, D::DuckDb]);

pub(super) const DELETE_RETURNING: DialectSet = set(&[
    D::Postgres,
    D::YugabyteDb,
    D::Sqlite3_35,
    D::MariaDb,
    D::Firebird,
    D::DuckDb,
]);

pub(super) const ROW_ASSIGNMENT: DialectSet = set(&[D::Postgres, D::YugabyteDb, D::Db2, D::H2, D::Hsqldb]);

pub(super) const UPDATE_FROM: DialectSet = POSTGRES_LIKE.union(set(&[
    D::SqlServer,
    D::Sqlite3_33,
    D::Snowflake,
    D::DuckDb,
]));

pub(super) const DELETE_USING: DialectSet = POSTGRES_LIKE.union(set(&[D::MySql, D::MariaDb, D::DuckDb]));

pub(super) const DML_LIMIT: DialectSet = set(&[D::MySql, D::MariaDb]);

// DDL

pub(super) const PARTIAL_INDEX: DialectSet =
    POSTGRES_LIKE.union(set(&[D::Sqlite, D::SqlServer, D::DuckDb]));

pub(super) const DROP_INDEX_ON: DialectSet = set(&[D::MySql, D::MariaDb, D::SqlServer]);

pub(super) const NO_TRUNCATE: DialectSet = set(&[D::Sqlite, D::Firebird]);

pub(super) const TRUNCATE_IDENTITY: DialectSet =
    set(&[D::Postgres, D::YugabyteDb, D::H2, D::Hsqldb, D::DuckDb]);

pub(super) const TRUNCATE_CASCADE: DialectSet =
    set(&[D::Postgres, D::YugabyteDb, D::Oracle12c, D::DuckDb]);

pub(super) const SEQUENCES: DialectSet = POSTGRES_LIKE.union(set(&[
    D::Oracle,
    D::SqlServer,
    D::H2,
    D::Hsqldb,
    D::Derby,
    D::Db2,
    D::Firebird,
    D::MariaDb10_3,
    D::Snowflake,
    D::DuckDb,
    D::Hana,
    D::Ignite,
    D::Cubrid,
]));

pub(super) const CREATE_TABLE_IF_NOT_EXISTS: DialectSet = POSTGRES_LIKE.union(set(&[
    D::MySql,
    D::MariaDb,
    D::Sqlite,
    D::H2,
    D::Hsqldb,
    D::DuckDb,
    D::Snowflake,
    D::ClickHouse,
    D::Trino,
    D::BigQuery,
    D::Oracle23ai,
]));

pub(super) const CREATE_INDEX_IF_NOT_EXISTS: DialectSet = set(&[
    D::Postgres9_5,
    D::YugabyteDb,
    D::Sqlite,
    D::H2,
    D::MariaDb,
    D::DuckDb,
    D::Oracle23ai,
]);

pub(super) const CREATE_SEQUENCE_IF_NOT_EXISTS: DialectSet = set(&[
    D::Postgres9_5,
    D::YugabyteDb,
    D::H2,
    D::MariaDb10_3,
    D::DuckDb,
    D::Snowflake,
    D::Oracle23ai,
]);

pub(super) const DROP_TABLE_IF_EXISTS: DialectSet = POSTGRES_LIKE.union(set(&[
    D::MySql,
    D::MariaDb,
    D::Sqlite,
    D::H2,
    D::Hsqldb,
    D::SqlServer2016,
    D::DuckDb,
    D::Snowflake,
    D::ClickHouse,
    D::Trino,
    D::BigQuery,
    D::Oracle23ai,
]));

pub(super) const DROP_INDEX_IF_EXISTS: DialectSet = set(&[
    D::Postgres,
    D::YugabyteDb,
    D::MariaDb,
    D::Sqlite,
    D::H2,
    D::Hsqldb,
    D::SqlServer2016,
    D::DuckDb,
    D::Oracle23ai,
]);

pub(super) const DROP_SEQUENCE_IF_EXISTS: DialectSet = set(&[
    D::Postgres,
    D::YugabyteDb,
    D::H2,
    D::Hsqldb,
    D::MariaDb10_3,
    D::SqlServer2016,
    D::DuckDb,
    D::Snowflake,
    D::Oracle23ai,
]);

pub(super) const DROP_TABLE_CASCADE: DialectSet =
    POSTGRES_LIKE.union(set(&[D::Oracle, D::H2, D::Hsqldb, D::DuckDb]));

/// Dialects whose procedural blocks run DDL only through dynamic SQL.
pub(super) const DYNAMIC_DDL_IN_BLOCKS: DialectSet = set(&[D::Oracle, D::Db2, D::Firebird]);

/// How a dialect limits the rows a query returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum LimitStyle {
    /// `LIMIT n OFFSET m`
    LimitOffset,

    /// `OFFSET m ROWS FETCH NEXT n ROWS ONLY`
    FetchFirst,

    /// `SELECT TOP n`, with `OFFSET .. FETCH` when an offset is present
    Top,

    /// `SELECT FIRST n SKIP m`
    FirstSkip,

    /// Wrapping the query and filtering on `ROWNUM`
    Rownum,
}

impl LimitStyle {
    pub(super) fn of(dialect: D) -> LimitStyle {
        use prism_core::Family as F;

        match dialect.family() {
            F::SqlServer | F::Sybase => LimitStyle::Top,
            F::Oracle if dialect == D::Oracle11g => LimitStyle::Rownum,
            F::Oracle | F::Db2 | F::Derby => LimitStyle::FetchFirst,
            F::Firebird if dialect == D::Firebird2_5 => LimitStyle::FirstSkip,
            F::Firebird => LimitStyle::FetchFirst,
            _ => LimitStyle::LimitOffset,
        }
    }
}
