//! Bound parameter values for dynamically built queries.

use chrono::{DateTime, Utc};
use sqlx::Postgres;
use sqlx::postgres::PgArguments;
use sqlx::query::{QueryAs, QueryScalar};
use uuid::Uuid;

use erp_entity::customer::CustomerType;
use erp_entity::discount::{DiscountStatus, DiscountType};
use erp_entity::fulfillment::FulfillmentStatus;
use erp_entity::inventory::BatchKind;
use erp_entity::pricing::PriceListType;

/// A value bound to one `$N` placeholder.
///
/// Filter builders accumulate these in placeholder order; the executor
/// binds them onto the sqlx query in the same order. List variants bind as
/// PostgreSQL arrays, so an `= ANY($N)` membership test consumes a single
/// placeholder regardless of list length.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    /// A text value.
    Text(String),
    /// A 64-bit integer value.
    Int(i64),
    /// A boolean value.
    Bool(bool),
    /// A UUID value.
    Uuid(Uuid),
    /// A UTC timestamp value.
    Timestamp(DateTime<Utc>),
    /// A list of text values (binds as `text[]`).
    TextList(Vec<String>),
    /// A list of UUID values (binds as `uuid[]`).
    UuidList(Vec<Uuid>),
}

macro_rules! impl_bind_all {
    ($name:ident, $query:ident) => {
        /// Bind every parameter onto the query, in placeholder order.
        pub fn $name<'q, O>(
            mut query: $query<'q, Postgres, O, PgArguments>,
            params: &[BindValue],
        ) -> $query<'q, Postgres, O, PgArguments> {
            for value in params {
                query = match value {
                    BindValue::Text(v) => query.bind(v.clone()),
                    BindValue::Int(v) => query.bind(*v),
                    BindValue::Bool(v) => query.bind(*v),
                    BindValue::Uuid(v) => query.bind(*v),
                    BindValue::Timestamp(v) => query.bind(*v),
                    BindValue::TextList(v) => query.bind(v.clone()),
                    BindValue::UuidList(v) => query.bind(v.clone()),
                };
            }
            query
        }
    };
}

impl_bind_all!(bind_query_as, QueryAs);
impl_bind_all!(bind_query_scalar, QueryScalar);

/// Render parameters for failure logs without exposing the raw values.
///
/// Filter values routinely carry customer names, emails, and lot numbers;
/// only the type and shape of each parameter may reach log output.
pub fn masked_params(params: &[BindValue]) -> String {
    let rendered: Vec<String> = params
        .iter()
        .map(|value| match value {
            BindValue::Text(v) => format!("text(len={})", v.chars().count()),
            BindValue::Int(_) => "int".to_string(),
            BindValue::Bool(_) => "bool".to_string(),
            BindValue::Uuid(_) => "uuid".to_string(),
            BindValue::Timestamp(_) => "timestamp".to_string(),
            BindValue::TextList(v) => format!("text_list(len={})", v.len()),
            BindValue::UuidList(v) => format!("uuid_list(len={})", v.len()),
        })
        .collect();
    format!("[{}]", rendered.join(", "))
}

impl From<String> for BindValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for BindValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<i64> for BindValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for BindValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Uuid> for BindValue {
    fn from(v: Uuid) -> Self {
        Self::Uuid(v)
    }
}

impl From<DateTime<Utc>> for BindValue {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Timestamp(v)
    }
}

impl From<Vec<String>> for BindValue {
    fn from(v: Vec<String>) -> Self {
        Self::TextList(v)
    }
}

impl From<Vec<Uuid>> for BindValue {
    fn from(v: Vec<Uuid>) -> Self {
        Self::UuidList(v)
    }
}

// Domain enums bind through their wire spelling; enum-typed columns cast the
// placeholder back (e.g. `$1::fulfillment_status`).

impl From<CustomerType> for BindValue {
    fn from(v: CustomerType) -> Self {
        Self::Text(v.as_str().to_string())
    }
}

impl From<DiscountType> for BindValue {
    fn from(v: DiscountType) -> Self {
        Self::Text(v.as_str().to_string())
    }
}

impl From<DiscountStatus> for BindValue {
    fn from(v: DiscountStatus) -> Self {
        Self::Text(v.as_str().to_string())
    }
}

impl From<PriceListType> for BindValue {
    fn from(v: PriceListType) -> Self {
        Self::Text(v.as_str().to_string())
    }
}

impl From<BatchKind> for BindValue {
    fn from(v: BatchKind) -> Self {
        Self::Text(v.as_str().to_string())
    }
}

impl From<Vec<FulfillmentStatus>> for BindValue {
    fn from(v: Vec<FulfillmentStatus>) -> Self {
        Self::TextList(v.iter().map(|s| s.as_str().to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_params_hides_values() {
        let params = vec![
            BindValue::Text("Canaherb".to_string()),
            BindValue::Uuid(Uuid::nil()),
            BindValue::TextList(vec!["a".into(), "b".into(), "c".into()]),
        ];
        let masked = masked_params(&params);
        assert_eq!(masked, "[text(len=8), uuid, text_list(len=3)]");
        assert!(!masked.contains("Canaherb"));
    }

    #[test]
    fn test_enum_values_bind_as_wire_spelling() {
        assert_eq!(
            BindValue::from(BatchKind::PackagingMaterial),
            BindValue::Text("packaging_material".to_string())
        );
        assert_eq!(
            BindValue::from(vec![FulfillmentStatus::Shipped, FulfillmentStatus::Packed]),
            BindValue::TextList(vec!["shipped".to_string(), "packed".to_string()])
        );
    }
}
