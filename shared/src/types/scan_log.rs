use serde::Deserialize;

/// One warehouse scan event from the audit log. Served read-only by
/// `GET /admin/scan-logs`; the display transform is the identity, so the
/// wire record doubles as the view model.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanLog {
    pub id: i64,
    pub track_code: String,
    #[serde(default)]
    pub city_name: Option<String>,
    #[serde(default)]
    pub operator: Option<String>,
    #[serde(default)]
    pub old_status: Option<String>,
    #[serde(default)]
    pub new_status: Option<String>,
    #[serde(default)]
    pub scanned_at: Option<String>,
}

pub const SCAN_LOGS_PAGE_SIZE: u32 = 50;

/// Filter specification for the scan-log listing.
#[derive(Debug, Clone)]
pub struct ScanLogFilter {
    pub operator: Option<String>,
    pub status: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub page: u32,
    pub size: u32,
}

impl Default for ScanLogFilter {
    fn default() -> Self {
        Self {
            operator: None,
            status: None,
            from_date: None,
            to_date: None,
            page: 0,
            size: SCAN_LOGS_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_full_entry() {
        let log: ScanLog = serde_json::from_str(
            r#"{"id":7,"trackCode":"LP42","cityName":"Almaty","operator":"ops1",
                "oldStatus":"ARRIVED","newStatus":"READY","scannedAt":"2024-05-02T08:15:00Z"}"#,
        )
        .unwrap();
        assert_eq!(log.id, 7);
        assert_eq!(log.operator.as_deref(), Some("ops1"));
    }

    #[test]
    fn default_filter_uses_the_wider_page() {
        assert_eq!(ScanLogFilter::default().size, 50);
        assert_eq!(ScanLogFilter::default().page, 0);
    }
}
