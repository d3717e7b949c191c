mod set;
pub use set::DialectSet;

use crate::Error;

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

macro_rules! dialects {
    (
        $(
            $family:ident => $family_name:literal {
                $( $variant:ident => $name:literal ),+ $(,)?
            }
        )+
    ) => {
        /// A group of dialect versions sharing core syntax rules.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum Family {
            $(
                #[serde(rename = $family_name)]
                $family,
            )+
        }

        /// A target SQL engine and version.
        ///
        /// Within a family, dialects are declared oldest first. The
        /// unversioned dialect of a family comes last and stands for the most
        /// recent version.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum Dialect {
            $(
                $(
                    #[serde(rename = $name)]
                    $variant,
                )+
            )+
        }

        impl Family {
            /// All families.
            pub const ALL: &'static [Family] = &[ $( Family::$family, )+ ];

            /// Upper-case name of the family.
            pub const fn name(self) -> &'static str {
                match self {
                    $( Family::$family => $family_name, )+
                }
            }

            /// The unversioned dialect of this family, i.e. its latest version.
            pub const fn latest(self) -> Dialect {
                match self {
                    $( Family::$family => dialects!(@last $( $variant )+), )+
                }
            }
        }

        impl Dialect {
            /// All dialects, grouped by family, oldest version first.
            pub const ALL: &'static [Dialect] = &[ $( $( Dialect::$variant, )+ )+ ];

            /// The family this dialect belongs to.
            pub const fn family(self) -> Family {
                match self {
                    $( $( Dialect::$variant => Family::$family, )+ )+
                }
            }

            /// Upper-case name of the dialect, e.g. `POSTGRES_9_5`.
            pub const fn name(self) -> &'static str {
                match self {
                    $( $( Dialect::$variant => $name, )+ )+
                }
            }
        }
    };
    (@last $head:ident $( $tail:ident )+) => { dialects!(@last $( $tail )+) };
    (@last $last:ident) => { Dialect::$last };
}

dialects! {
    Default => "DEFAULT" {
        Default => "DEFAULT",
    }
    BigQuery => "BIGQUERY" {
        BigQuery => "BIGQUERY",
    }
    ClickHouse => "CLICKHOUSE" {
        ClickHouse => "CLICKHOUSE",
    }
    Cubrid => "CUBRID" {
        Cubrid => "CUBRID",
    }
    Db2 => "DB2" {
        Db2_9 => "DB2_9",
        Db2_10 => "DB2_10",
        Db2_11 => "DB2_11",
        Db2 => "DB2",
    }
    Derby => "DERBY" {
        Derby => "DERBY",
    }
    DuckDb => "DUCKDB" {
        DuckDb => "DUCKDB",
    }
    Firebird => "FIREBIRD" {
        Firebird2_5 => "FIREBIRD_2_5",
        Firebird3_0 => "FIREBIRD_3_0",
        Firebird4_0 => "FIREBIRD_4_0",
        Firebird => "FIREBIRD",
    }
    H2 => "H2" {
        H2_1_4_200 => "H2_1_4_200",
        H2_2_0_202 => "H2_2_0_202",
        H2 => "H2",
    }
    Hana => "HANA" {
        Hana => "HANA",
    }
    Hsqldb => "HSQLDB" {
        Hsqldb => "HSQLDB",
    }
    Ignite => "IGNITE" {
        Ignite => "IGNITE",
    }
    MariaDb => "MARIADB" {
        MariaDb10_3 => "MARIADB_10_3",
        MariaDb10_5 => "MARIADB_10_5",
        MariaDb => "MARIADB",
    }
    MySql => "MYSQL" {
        MySql5_7 => "MYSQL_5_7",
        MySql8_0 => "MYSQL_8_0",
        MySql8_0_19 => "MYSQL_8_0_19",
        MySql => "MYSQL",
    }
    Oracle => "ORACLE" {
        Oracle11g => "ORACLE_11G",
        Oracle12c => "ORACLE_12C",
        Oracle18c => "ORACLE_18C",
        Oracle21c => "ORACLE_21C",
        Oracle23ai => "ORACLE_23AI",
        Oracle => "ORACLE",
    }
    Postgres => "POSTGRES" {
        Postgres9_3 => "POSTGRES_9_3",
        Postgres9_4 => "POSTGRES_9_4",
        Postgres9_5 => "POSTGRES_9_5",
        Postgres10 => "POSTGRES_10",
        Postgres11 => "POSTGRES_11",
        Postgres12 => "POSTGRES_12",
        Postgres14 => "POSTGRES_14",
        Postgres15 => "POSTGRES_15",
        Postgres16 => "POSTGRES_16",
        Postgres => "POSTGRES",
    }
    Redshift => "REDSHIFT" {
        Redshift => "REDSHIFT",
    }
    Snowflake => "SNOWFLAKE" {
        Snowflake => "SNOWFLAKE",
    }
    Sqlite => "SQLITE" {
        Sqlite3_25 => "SQLITE_3_25",
        Sqlite3_28 => "SQLITE_3_28",
        Sqlite3_30 => "SQLITE_3_30",
        Sqlite3_33 => "SQLITE_3_33",
        Sqlite3_35 => "SQLITE_3_35",
        Sqlite3_38 => "SQLITE_3_38",
        Sqlite => "SQLITE",
    }
    SqlServer => "SQLSERVER" {
        SqlServer2012 => "SQLSERVER_2012",
        SqlServer2014 => "SQLSERVER_2014",
        SqlServer2016 => "SQLSERVER_2016",
        SqlServer2017 => "SQLSERVER_2017",
        SqlServer2019 => "SQLSERVER_2019",
        SqlServer2022 => "SQLSERVER_2022",
        SqlServer => "SQLSERVER",
    }
    Sybase => "SYBASE" {
        Sybase => "SYBASE",
    }
    Trino => "TRINO" {
        Trino => "TRINO",
    }
    YugabyteDb => "YUGABYTEDB" {
        YugabyteDb => "YUGABYTEDB",
    }
}

impl Dialect {
    /// Returns `true` if this is the unversioned dialect of its family.
    pub const fn is_family(self) -> bool {
        self as u8 == self.family().latest() as u8
    }

    /// Returns `true` if `self` is `other` or a later version of the same
    /// family.
    pub const fn supports(self, other: Dialect) -> bool {
        self.family() as u8 == other.family() as u8 && self as u8 >= other as u8
    }

    /// Looks up a dialect by its upper-case name, ignoring case.
    pub fn from_name(name: &str) -> Option<Dialect> {
        Dialect::ALL
            .iter()
            .copied()
            .find(|dialect| dialect.name().eq_ignore_ascii_case(name))
    }

    /// Looks up a dialect by name, falling back to [`Dialect::Default`] for
    /// names this build does not know.
    pub fn from_name_or_default(name: &str) -> Dialect {
        Dialect::from_name(name).unwrap_or_else(|| {
            tracing::warn!(name, "unknown SQL dialect; using DEFAULT");
            Dialect::Default
        })
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect::Default
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::from_name(s).ok_or_else(|| crate::err!("unknown SQL dialect `{s}`"))
    }
}

impl Family {
    /// Dialects of this family, oldest first.
    pub fn dialects(self) -> impl Iterator<Item = Dialect> {
        Dialect::ALL
            .iter()
            .copied()
            .filter(move |dialect| dialect.family() == self)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
