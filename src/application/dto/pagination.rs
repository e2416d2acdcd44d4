use serde::{Deserialize, Serialize};

/// Wire shape of a keyset page: link to the following page plus the records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct PaginatedResponse<T> {
    pub next: Option<String>,
    pub results: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    pub const fn new(next: Option<String>, results: Vec<T>) -> Self {
        Self { next, results }
    }

    pub const fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_null_next_on_last_page() {
        let page = PaginatedResponse::new(None, vec![1, 2]);
        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            json!({"next": null, "results": [1, 2]})
        );
        assert!(!page.has_next());
    }
}
