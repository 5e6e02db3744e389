/// Outbound query-string assembly with the filter-inclusion rules shared
/// by every list endpoint:
///
///   - page/size (and sort, where the endpoint takes one) are always sent;
///   - free-text fields are trimmed and omitted when blank;
///   - categorical fields additionally treat `"all"` as "no filter";
///   - tri-state flags are sent only when `Some`.
#[derive(Debug, Default)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32, size: u32) -> Self {
        self.0.push(("page", page.to_string()));
        self.0.push(("size", size.to_string()));
        self
    }

    pub fn sort(mut self, sort: &str) -> Self {
        self.0.push(("sort", sort.to_string()));
        self
    }

    /// Free-text filter: trimmed, omitted when blank.
    pub fn text(mut self, key: &'static str, value: Option<&str>) -> Self {
        if let Some(v) = value {
            let trimmed = v.trim();
            if !trimmed.is_empty() {
                self.0.push((key, trimmed.to_string()));
            }
        }
        self
    }

    /// Categorical filter: like [`text`](Self::text), plus the `"all"`
    /// sentinel means "no filter".
    pub fn categorical(mut self, key: &'static str, value: Option<&str>) -> Self {
        if let Some(v) = value {
            let trimmed = v.trim();
            if !trimmed.is_empty() && trimmed != "all" {
                self.0.push((key, trimmed.to_string()));
            }
        }
        self
    }

    /// Tri-state flag: `None` sends nothing, so the backend applies no
    /// filter.
    pub fn flag(mut self, key: &'static str, value: Option<bool>) -> Self {
        if let Some(v) = value {
            self.0.push((key, v.to_string()));
        }
        self
    }

    pub fn as_pairs(&self) -> &[(&'static str, String)] {
        &self.0
    }

    #[cfg(test)]
    fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_and_size_are_always_present() {
        let q = QueryParams::new().page(0, 20);
        assert_eq!(q.get("page"), Some("0"));
        assert_eq!(q.get("size"), Some("20"));
    }

    #[test]
    fn blank_text_is_omitted() {
        let q = QueryParams::new().text("trackCode", Some("   "));
        assert!(q.get("trackCode").is_none());
    }

    #[test]
    fn text_is_trimmed() {
        let q = QueryParams::new().text("trackCode", Some("  LP42  "));
        assert_eq!(q.get("trackCode"), Some("LP42"));
    }

    #[test]
    fn absent_text_is_omitted() {
        let q = QueryParams::new().text("status", None);
        assert!(q.get("status").is_none());
    }

    #[test]
    fn all_sentinel_means_no_filter() {
        let q = QueryParams::new().categorical("cityId", Some("all"));
        assert!(q.get("cityId").is_none());
        let q = QueryParams::new().categorical("cityId", Some("4"));
        assert_eq!(q.get("cityId"), Some("4"));
    }

    #[test]
    fn tri_state_flag_sends_both_values_but_not_none() {
        assert_eq!(
            QueryParams::new().flag("isVerified", Some(true)).get("isVerified"),
            Some("true")
        );
        assert_eq!(
            QueryParams::new().flag("isVerified", Some(false)).get("isVerified"),
            Some("false")
        );
        assert!(QueryParams::new().flag("isVerified", None).get("isVerified").is_none());
    }
}
