use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Order record as the backend sends it. Everything except the track code
/// is optional — older orders predate several of these columns.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub track_code: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub city_id: Option<i64>,
    #[serde(default)]
    pub city_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A delivery city (`GET /cities` returns a bare array of these).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct City {
    pub id: i64,
    pub name: String,
}

/// Payload for the admin bulk-upload endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpload {
    pub city_id: i64,
    pub orders: Vec<OrderUploadRow>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUploadRow {
    pub track_code: String,
}

// ---------------------------------------------------------------------------
// UI-facing status
// ---------------------------------------------------------------------------

/// The four statuses the UI distinguishes. The backend's status vocabulary
/// is wider; anything unrecognized collapses to `FromChina` (the earliest
/// stage) rather than failing the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    FromChina,
    Shipped,
    Arrived,
    Ready,
}

impl OrderStatus {
    pub fn from_backend(status: &str) -> Self {
        match status {
            "INTERNATIONAL_SHIPPING" => OrderStatus::Shipped,
            "ARRIVED" => OrderStatus::Arrived,
            "READY" => OrderStatus::Ready,
            // UNKNOWN and anything unrecognized
            _ => OrderStatus::FromChina,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::FromChina => "from_china",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Arrived => "arrived",
            OrderStatus::Ready => "ready",
        }
    }
}

// ---------------------------------------------------------------------------
// View model
// ---------------------------------------------------------------------------

/// Display-ready order row. A pure function of one [`Order`]; no
/// cross-record state.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderView {
    pub track_code: String,
    /// Title, falling back to the track code when the user never set one.
    pub title: String,
    pub status: OrderStatus,
    /// Untranslated backend status, kept for admin tooling.
    pub raw_status: String,
    pub city_id: Option<i64>,
    pub city_name: Option<String>,
    /// Epoch milliseconds; 0 when the backend sent nothing parseable.
    pub created_at: i64,
    pub updated_at: i64,
    /// Human label for the last update, empty when unknown.
    pub updated_at_label: String,
}

impl From<Order> for OrderView {
    fn from(o: Order) -> Self {
        let raw_status = o.status.unwrap_or_default();
        let created = o.created_at.as_deref().and_then(parse_timestamp);
        let updated = o.updated_at.as_deref().and_then(parse_timestamp);

        OrderView {
            title: match o.title {
                Some(t) if !t.is_empty() => t,
                _ => o.track_code.clone(),
            },
            track_code: o.track_code,
            status: OrderStatus::from_backend(&raw_status),
            raw_status,
            city_id: o.city_id,
            city_name: o.city_name,
            created_at: created.map(|d| d.timestamp_millis()).unwrap_or(0),
            updated_at: updated.map(|d| d.timestamp_millis()).unwrap_or(0),
            updated_at_label: updated
                .map(|d| d.format("%d %b %Y %H:%M").to_string())
                .unwrap_or_default(),
        }
    }
}

/// Parse a backend timestamp. The API emits RFC 3339, but some endpoints
/// omit the offset, so a naive datetime (assumed UTC) is accepted too.
fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

// ---------------------------------------------------------------------------
// Query specification
// ---------------------------------------------------------------------------

/// Sort orders accepted by the order list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderSort {
    #[default]
    CreatedDesc,
    CreatedAsc,
    UpdatedDesc,
    UpdatedAsc,
}

impl OrderSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSort::CreatedDesc => "CREATED_DESC",
            OrderSort::CreatedAsc => "CREATED_ASC",
            OrderSort::UpdatedDesc => "UPDATED_DESC",
            OrderSort::UpdatedAsc => "UPDATED_ASC",
        }
    }
}

pub const ORDERS_PAGE_SIZE: u32 = 20;

/// Filter specification for both order list endpoints.
///
/// `track_code` is consumed by the admin listing, `text` by the user
/// listing; blank strings and the `"all"` city sentinel are dropped at
/// query-assembly time, not here.
#[derive(Debug, Clone)]
pub struct OrderFilter {
    pub track_code: Option<String>,
    pub text: Option<String>,
    pub status: Option<String>,
    pub city_id: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub page: u32,
    pub size: u32,
    pub sort: OrderSort,
}

impl Default for OrderFilter {
    fn default() -> Self {
        Self {
            track_code: None,
            text: None,
            status: None,
            city_id: None,
            from_date: None,
            to_date: None,
            page: 0,
            size: ORDERS_PAGE_SIZE,
            sort: OrderSort::default(),
        }
    }
}
