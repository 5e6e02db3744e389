use serde::Deserialize;

/// Raw list-endpoint envelope as the backend sends it.
///
/// Every field except `content` is optional on purpose: the backend
/// *should* always populate the pagination metadata, but several deployed
/// versions have been observed omitting fields, so parsing is deliberately
/// tolerant and [`PageEnvelope::normalize`] fills the gaps from the
/// request that produced the response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub size: Option<u32>,
    #[serde(default)]
    pub total_elements: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub last: Option<bool>,
}

/// One fully-resolved page of results.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
    pub last: bool,
}

impl<T> PageEnvelope<T> {
    /// Resolve missing metadata against the request that was sent.
    ///
    /// Fallbacks: `page`/`size` echo the request, `totalElements` falls
    /// back to the item count, `totalPages` to 1, `last` to true.
    pub fn normalize(self, requested_page: u32, requested_size: u32) -> Paginated<T> {
        let total_elements = self.total_elements.unwrap_or(self.content.len() as u64);
        Paginated {
            page: self.page.unwrap_or(requested_page),
            size: self.size.unwrap_or(requested_size),
            total_elements,
            total_pages: self.total_pages.unwrap_or(1),
            last: self.last.unwrap_or(true),
            items: self.content,
        }
    }
}

impl<T> Paginated<T> {
    /// Apply the per-entity view transform to every item, keeping the
    /// page metadata intact.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            last: self.last,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_envelope_passes_through() {
        let json = r#"{
            "content": [1, 2, 3],
            "page": 2,
            "size": 3,
            "totalElements": 9,
            "totalPages": 3,
            "last": false
        }"#;
        let envelope: PageEnvelope<i64> = serde_json::from_str(json).unwrap();
        let page = envelope.normalize(0, 20);
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.page, 2);
        assert_eq!(page.size, 3);
        assert_eq!(page.total_elements, 9);
        assert_eq!(page.total_pages, 3);
        assert!(!page.last);
    }

    #[test]
    fn missing_metadata_falls_back_to_request() {
        let json = r#"{"content": [10, 20]}"#;
        let envelope: PageEnvelope<i64> = serde_json::from_str(json).unwrap();
        let page = envelope.normalize(0, 20);
        assert_eq!(page.page, 0);
        assert_eq!(page.size, 20);
        assert_eq!(page.total_elements, 2);
        assert_eq!(page.total_pages, 1);
        assert!(page.last);
    }

    #[test]
    fn missing_content_is_an_empty_page_not_an_error() {
        let envelope: PageEnvelope<i64> = serde_json::from_str("{}").unwrap();
        let page = envelope.normalize(1, 50);
        assert!(page.items.is_empty());
        assert_eq!(page.page, 1);
        assert_eq!(page.size, 50);
        assert_eq!(page.total_elements, 0);
    }

    #[test]
    fn map_preserves_metadata() {
        let json = r#"{"content": [1, 2], "totalPages": 4, "last": false}"#;
        let envelope: PageEnvelope<i64> = serde_json::from_str(json).unwrap();
        let page = envelope.normalize(0, 20).map(|n| n * 10);
        assert_eq!(page.items, vec![10, 20]);
        assert_eq!(page.total_pages, 4);
        assert!(!page.last);
    }
}
