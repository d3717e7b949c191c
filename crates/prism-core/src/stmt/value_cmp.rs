use super::Value;

use std::cmp::Ordering;

impl Value {
    /// Compares two values the way SQL does.
    ///
    /// Returns `None` when either side is NULL or the values are not
    /// comparable. Numbers compare across widths.
    pub fn sql_cmp(&self, other: &Value) -> Option<Ordering> {
        use Value::*;

        match (self, other) {
            (Null, _) | (_, Null) => None,
            (Bool(lhs), Bool(rhs)) => Some(lhs.cmp(rhs)),
            (String(lhs), String(rhs)) => Some(lhs.cmp(rhs)),
            (Bytes(lhs), Bytes(rhs)) => Some(lhs.cmp(rhs)),
            (Date(lhs), Date(rhs)) => Some(lhs.cmp(rhs)),
            (Time(lhs), Time(rhs)) => Some(lhs.cmp(rhs)),
            (Timestamp(lhs), Timestamp(rhs)) => Some(lhs.cmp(rhs)),
            (Uuid(lhs), Uuid(rhs)) => Some(lhs.cmp(rhs)),
            (F64(_), _) | (_, F64(_)) => self.as_f64()?.partial_cmp(&other.as_f64()?),
            _ => Some(self.as_decimal()?.cmp(&other.as_decimal()?)),
        }
    }

    /// SQL equality: `None` when either side is NULL.
    pub fn sql_eq(&self, other: &Value) -> Option<bool> {
        self.sql_cmp(other).map(|ordering| ordering == Ordering::Equal)
    }

    /// `IS NOT DISTINCT FROM`: NULLs compare equal to each other.
    pub fn not_distinct(&self, other: &Value) -> bool {
        match (self.is_null(), other.is_null()) {
            (true, true) => true,
            (false, false) => self.sql_eq(other).unwrap_or(false),
            _ => false,
        }
    }
}
