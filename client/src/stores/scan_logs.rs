use tracing::warn;

use shared::types::scan_log::{ScanLog, ScanLogFilter};
use shared::types::{PageEnvelope, Paginated};

use crate::api::{ApiClient, ApiError, QueryParams};

const FETCH_FALLBACK: &str = "Failed to load scan logs";

/// Read-only audit trail of warehouse scans. The wire record is already
/// display-shaped, so no view transform runs here.
pub struct ScanLogsStore {
    api: ApiClient,
    pub logs: Vec<ScanLog>,
    pub loading: bool,
    pub error: Option<String>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
    pub last: bool,
}

impl ScanLogsStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            logs: Vec::new(),
            loading: false,
            error: None,
            page: 0,
            size: shared::types::scan_log::SCAN_LOGS_PAGE_SIZE,
            total_elements: 0,
            total_pages: 0,
            last: true,
        }
    }

    pub async fn fetch_logs(
        &mut self,
        filter: &ScanLogFilter,
    ) -> Result<Paginated<ScanLog>, ApiError> {
        self.loading = true;
        self.error = None;

        let query = QueryParams::new()
            .page(filter.page, filter.size)
            .text("operator", filter.operator.as_deref())
            .text("status", filter.status.as_deref())
            .text("fromDate", filter.from_date.as_deref())
            .text("toDate", filter.to_date.as_deref());

        let result = self
            .api
            .get::<PageEnvelope<ScanLog>>("/admin/scan-logs", &query)
            .await;
        self.loading = false;

        match result {
            Ok(envelope) => {
                let page = envelope.normalize(filter.page, filter.size);
                self.logs = page.items.clone();
                self.page = page.page;
                self.size = page.size;
                self.total_elements = page.total_elements;
                self.total_pages = page.total_pages;
                self.last = page.last;
                Ok(page)
            }
            Err(err) => {
                warn!("Scan-log fetch failed: {}", err);
                self.logs.clear();
                self.error = Some(
                    err.server_message()
                        .unwrap_or(FETCH_FALLBACK)
                        .to_string(),
                );
                Err(err)
            }
        }
    }
}
