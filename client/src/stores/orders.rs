use serde_json::Value;
use tracing::warn;

use shared::types::order::{City, Order, OrderFilter, OrderUpload, OrderUploadRow, OrderView};
use shared::types::{PageEnvelope, Paginated};

use crate::api::{ApiClient, ApiError, QueryParams};

const FETCH_FALLBACK: &str = "Failed to load orders";

/// Order listing and mutation container.
///
/// Queries are awaited sequentially and the newest response wins — there
/// is no request-generation guard, so a caller firing overlapping
/// fetches must sequence them itself (the filter UIs debounce instead).
pub struct OrdersStore {
    api: ApiClient,
    pub orders: Vec<OrderView>,
    pub loading: bool,
    pub error: Option<String>,
    pub active_orders_count: u64,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
    pub last: bool,
}

impl OrdersStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            orders: Vec::new(),
            loading: false,
            error: None,
            active_orders_count: 0,
            page: 0,
            size: shared::types::order::ORDERS_PAGE_SIZE,
            total_elements: 0,
            total_pages: 0,
            last: true,
        }
    }

    /// Admin listing: every order, filterable by track code.
    pub async fn fetch_orders(
        &mut self,
        filter: &OrderFilter,
    ) -> Result<Paginated<OrderView>, ApiError> {
        let query = QueryParams::new()
            .page(filter.page, filter.size)
            .sort(filter.sort.as_str())
            .text("trackCode", filter.track_code.as_deref())
            .text("status", filter.status.as_deref())
            .categorical("cityId", filter.city_id.as_deref())
            .text("fromDate", filter.from_date.as_deref())
            .text("toDate", filter.to_date.as_deref());
        self.fetch_page("/admin/orders", query, filter).await
    }

    /// The caller's own orders, filterable by free text.
    pub async fn fetch_my_orders(
        &mut self,
        filter: &OrderFilter,
    ) -> Result<Paginated<OrderView>, ApiError> {
        let query = QueryParams::new()
            .page(filter.page, filter.size)
            .sort(filter.sort.as_str())
            .text("text", filter.text.as_deref())
            .text("status", filter.status.as_deref())
            .categorical("cityId", filter.city_id.as_deref())
            .text("fromDate", filter.from_date.as_deref())
            .text("toDate", filter.to_date.as_deref());
        self.fetch_page("/user/orders", query, filter).await
    }

    async fn fetch_page(
        &mut self,
        path: &str,
        query: QueryParams,
        filter: &OrderFilter,
    ) -> Result<Paginated<OrderView>, ApiError> {
        self.loading = true;
        self.error = None;

        let result = self.api.get::<PageEnvelope<Order>>(path, &query).await;
        self.loading = false;

        match result {
            Ok(envelope) => {
                let page = envelope
                    .normalize(filter.page, filter.size)
                    .map(OrderView::from);
                self.orders = page.items.clone();
                self.page = page.page;
                self.size = page.size;
                self.total_elements = page.total_elements;
                self.total_pages = page.total_pages;
                self.last = page.last;
                Ok(page)
            }
            Err(err) => {
                warn!("Order fetch from {} failed: {}", path, err);
                self.orders.clear();
                self.error = Some(
                    err.server_message()
                        .unwrap_or(FETCH_FALLBACK)
                        .to_string(),
                );
                Err(err)
            }
        }
    }

    /// Count of the caller's not-yet-picked-up orders, shown as a badge.
    /// Failures render as 0 and are never raised — a broken badge must
    /// not take down the home screen.
    pub async fn fetch_active_count(&mut self) -> u64 {
        match self
            .api
            .get::<u64>("/user/orders/active-count", &QueryParams::new())
            .await
        {
            Ok(count) => {
                self.active_orders_count = count;
                count
            }
            Err(err) => {
                warn!("Active-count fetch failed: {}", err);
                self.active_orders_count = 0;
                0
            }
        }
    }

    /// Delivery cities for the city filter. A non-list response counts as
    /// no cities.
    pub async fn fetch_cities(&self) -> Result<Vec<City>, ApiError> {
        match self.api.get::<Vec<City>>("/cities", &QueryParams::new()).await {
            Ok(cities) => Ok(cities),
            Err(ApiError::Decode(e)) => {
                warn!("Cities response was not a list: {}", e);
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }

    /// Admin bulk upload of freshly received track codes for one city.
    pub async fn upload_orders(
        &self,
        city_id: i64,
        track_codes: Vec<String>,
    ) -> Result<Value, ApiError> {
        let payload = OrderUpload {
            city_id,
            orders: track_codes
                .into_iter()
                .map(|track_code| OrderUploadRow { track_code })
                .collect(),
        };
        self.api.post("/admin/orders/upload", &payload).await
    }

    /// Attach an order to the caller's account.
    pub async fn add_order(
        &self,
        track_code: &str,
        title: Option<&str>,
    ) -> Result<Value, ApiError> {
        let track_code = track_code.trim();
        if track_code.is_empty() {
            return Err(ApiError::Validation("Track code is required".to_string()));
        }

        let mut payload = serde_json::json!({ "trackCode": track_code });
        if let Some(title) = title.map(str::trim).filter(|t| !t.is_empty()) {
            payload["title"] = Value::String(title.to_string());
        }
        self.api.post("/user/orders", &payload).await
    }

    pub async fn update_order_title(
        &self,
        track_code: &str,
        title: Option<&str>,
    ) -> Result<Value, ApiError> {
        let track_code = track_code.trim();
        if track_code.is_empty() {
            return Err(ApiError::Validation("Track code is required".to_string()));
        }

        let title_value = match title.map(str::trim).filter(|t| !t.is_empty()) {
            Some(t) => Value::String(t.to_string()),
            None => Value::Null,
        };
        let path = format!("/user/orders/{}/title", urlencoding::encode(track_code));
        self.api
            .put(&path, &serde_json::json!({ "title": title_value }))
            .await
    }

    /// Warehouse scan: mark one order arrived.
    pub async fn scan_arrived(&self, track_code: &str) -> Result<Value, ApiError> {
        let track_code = track_code.trim();
        if track_code.is_empty() {
            return Err(ApiError::Validation("Track code is required".to_string()));
        }
        let path = format!("/admin/orders/{}/scan-arrived", urlencoding::encode(track_code));
        self.api.post_empty(&path).await
    }

    /// Transition a batch of orders to ready-for-pickup.
    pub async fn bulk_ready(&self, track_codes: &[String]) -> Result<Value, ApiError> {
        if track_codes.is_empty() {
            return Err(ApiError::Validation(
                "Select at least one order".to_string(),
            ));
        }
        let list: Vec<String> = track_codes
            .iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
        if list.is_empty() {
            return Err(ApiError::Validation("Track code list is empty".to_string()));
        }
        self.api
            .post("/admin/orders/bulk-ready", &serde_json::json!({ "trackCodes": list }))
            .await
    }
}
