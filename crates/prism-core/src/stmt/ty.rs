/// A SQL data type.
///
/// Length, precision and scale are optional; `None` renders the dialect's
/// default for the type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum DataType {
    Boolean,
    TinyInt,
    SmallInt,
    Integer,
    BigInt,
    Decimal {
        precision: Option<u32>,
        scale: Option<u32>,
    },
    Real,
    Double,
    Char(Option<u32>),
    VarChar(Option<u32>),
    Clob,
    Binary(Option<u32>),
    VarBinary(Option<u32>),
    Blob,
    Date,
    Time,
    Timestamp,
    Uuid,
    Json,

    /// An array of the given element type
    Array(Box<DataType>),

    /// A type known only by its name, rendered verbatim
    Other(String),

    /// The type is not known
    #[default]
    Unknown,
}

impl DataType {
    pub fn decimal(precision: u32, scale: u32) -> DataType {
        DataType::Decimal {
            precision: Some(precision),
            scale: Some(scale),
        }
    }

    pub fn varchar(length: u32) -> DataType {
        DataType::VarChar(Some(length))
    }

    pub fn is_numeric(&self) -> bool {
        self.is_integer()
            || matches!(self, Self::Decimal { .. } | Self::Real | Self::Double)
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::TinyInt | Self::SmallInt | Self::Integer | Self::BigInt
        )
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Self::Real | Self::Double)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::Char(_) | Self::VarChar(_) | Self::Clob)
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean)
    }

    pub fn is_temporal(&self) -> bool {
        matches!(self, Self::Date | Self::Time | Self::Timestamp)
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, Self::Binary(_) | Self::VarBinary(_) | Self::Blob)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}
