use tracing::warn;

use shared::types::user::{UserFilter, UserRecord, UserRow, UserUpdate};
use shared::types::{PageEnvelope, Paginated};

use crate::api::{ApiClient, ApiError, QueryParams};

const FETCH_FALLBACK: &str = "Failed to load users";
const UPDATE_FALLBACK: &str = "Failed to update user";
const DELETE_FALLBACK: &str = "Failed to delete user";

/// Admin user-management container.
pub struct UsersStore {
    api: ApiClient,
    pub users: Vec<UserRow>,
    pub loading: bool,
    pub error: Option<String>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
    pub last: bool,
}

impl UsersStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            users: Vec::new(),
            loading: false,
            error: None,
            page: 0,
            size: shared::types::user::USERS_PAGE_SIZE,
            total_elements: 0,
            total_pages: 0,
            last: true,
        }
    }

    pub async fn fetch_users(
        &mut self,
        filter: &UserFilter,
    ) -> Result<Paginated<UserRow>, ApiError> {
        self.loading = true;
        self.error = None;

        let query = QueryParams::new()
            .page(filter.page, filter.size)
            .text("text", filter.text.as_deref())
            .categorical("role", filter.role.as_deref())
            .flag("isVerified", filter.is_verified);

        let result = self
            .api
            .get::<PageEnvelope<UserRecord>>("/admin/users", &query)
            .await;
        self.loading = false;

        match result {
            Ok(envelope) => {
                let page = envelope
                    .normalize(filter.page, filter.size)
                    .map(UserRow::from);
                self.users = page.items.clone();
                self.page = page.page;
                self.size = page.size;
                self.total_elements = page.total_elements;
                self.total_pages = page.total_pages;
                self.last = page.last;
                Ok(page)
            }
            Err(err) => {
                warn!("User fetch failed: {}", err);
                self.users.clear();
                self.error = Some(
                    err.server_message()
                        .unwrap_or(FETCH_FALLBACK)
                        .to_string(),
                );
                Err(err)
            }
        }
    }

    /// First-page shorthand used by the filter bar.
    pub async fn fetch_filtered_users(
        &mut self,
        text: Option<String>,
        role: Option<String>,
    ) -> Result<Paginated<UserRow>, ApiError> {
        let filter = UserFilter {
            text,
            role,
            page: 0,
            ..Default::default()
        };
        self.fetch_users(&filter).await
    }

    /// Update one account and merge the backend's answer into the cached
    /// row (reseeding its draft role).
    pub async fn update_user(
        &mut self,
        email_or_telegram_id: &str,
        update: &UserUpdate,
    ) -> Result<UserRecord, ApiError> {
        self.error = None;
        let path = format!(
            "/admin/users/{}",
            urlencoding::encode(email_or_telegram_id)
        );

        match self.api.put::<_, UserRecord>(&path, update).await {
            Ok(updated) => {
                if let Some(row) = self
                    .users
                    .iter_mut()
                    .find(|u| u.email_or_telegram_id == email_or_telegram_id)
                {
                    row.apply_update(updated.clone());
                }
                Ok(updated)
            }
            Err(err) => {
                warn!("User update failed: {}", err);
                self.error = Some(
                    err.server_message()
                        .unwrap_or(UPDATE_FALLBACK)
                        .to_string(),
                );
                Err(err)
            }
        }
    }

    pub async fn delete_user(&mut self, email_or_telegram_id: &str) -> Result<(), ApiError> {
        self.error = None;
        let path = format!(
            "/admin/users/{}",
            urlencoding::encode(email_or_telegram_id)
        );

        match self.api.delete(&path).await {
            Ok(()) => {
                self.users
                    .retain(|u| u.email_or_telegram_id != email_or_telegram_id);
                Ok(())
            }
            Err(err) => {
                warn!("User delete failed: {}", err);
                self.error = Some(
                    err.server_message()
                        .unwrap_or(DELETE_FALLBACK)
                        .to_string(),
                );
                Err(err)
            }
        }
    }
}
