// src/application/pagination/links.rs
use url::Url;

/// Set `key=value` on `url`, keeping every other parameter in place.
///
/// The first occurrence of `key` is rewritten and later duplicates dropped;
/// a missing key is appended.
pub fn replace_query_param(url: &mut Url, key: &str, value: &str) {
    let mut replaced = false;
    let mut pairs: Vec<(String, String)> = Vec::new();
    for (k, v) in url.query_pairs().into_owned() {
        if k == key {
            if !replaced {
                pairs.push((k, value.to_string()));
                replaced = true;
            }
        } else {
            pairs.push((k, v));
        }
    }
    if !replaced {
        pairs.push((key.to_string(), value.to_string()));
    }

    url.query_pairs_mut().clear().extend_pairs(pairs);
}
