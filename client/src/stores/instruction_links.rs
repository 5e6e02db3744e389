use tracing::warn;

use shared::types::instruction_link::{InstructionLink, InstructionLinkUpdate};

use crate::api::{ApiClient, ApiError, QueryParams};

const FETCH_FALLBACK: &str = "Failed to load instruction links";

/// Help-link container. The list is small and unpaginated.
pub struct InstructionLinksStore {
    api: ApiClient,
    pub links: Vec<InstructionLink>,
    pub loading: bool,
    pub error: Option<String>,
}

impl InstructionLinksStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            links: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub async fn fetch_links(&mut self) -> Result<Vec<InstructionLink>, ApiError> {
        self.loading = true;
        self.error = None;

        // Option<…> absorbs a null/empty body; that is an empty list,
        // not a failure.
        let result = self
            .api
            .get::<Option<Vec<InstructionLink>>>("/instruction-links", &QueryParams::new())
            .await;
        self.loading = false;

        match result {
            Ok(links) => {
                self.links = links.unwrap_or_default();
                Ok(self.links.clone())
            }
            Err(err) => {
                warn!("Instruction-link fetch failed: {}", err);
                self.links.clear();
                self.error = Some(
                    err.server_message()
                        .unwrap_or(FETCH_FALLBACK)
                        .to_string(),
                );
                Err(err)
            }
        }
    }

    /// Admin edit of one link; the cached row is replaced with the
    /// backend's canonical answer.
    pub async fn update_link(
        &mut self,
        id: i64,
        update: &InstructionLinkUpdate,
    ) -> Result<InstructionLink, ApiError> {
        let updated: InstructionLink = self
            .api
            .put(&format!("/admin/instruction-links/{}", id), update)
            .await?;

        if let Some(idx) = self.links.iter().position(|l| l.id == id) {
            self.links[idx] = updated.clone();
        }
        Ok(updated)
    }
}
