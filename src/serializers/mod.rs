// Serializers layer - record to response model mapping
pub mod item_serializer;
pub mod person_serializer;

pub use item_serializer::ItemSerializer;
pub use person_serializer::PersonSerializer;

use chrono::{DateTime, SecondsFormat};

/// Render a microsecond timestamp as RFC 3339 (UTC)
pub fn format_timestamp(micros: i64) -> String {
    DateTime::from_timestamp_micros(micros)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Micros, true))
        .unwrap_or_default()
}
