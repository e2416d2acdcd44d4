// src/application/pagination/paginator.rs
use super::{KeysetConfig, KeysetConfigError, links::replace_query_param};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::pagination::{
    Cursor, CursorRecord, Direction, KeysetBound, KeysetQuery, KeysetSource, Page, PageRequest,
    QueryParams,
};
use std::num::IntErrorKind;
use url::Url;

/// Keyset (cursor) paginator over a [`KeysetSource`].
///
/// Each call is stateless: the configuration is fixed at construction and
/// continuation is carried entirely by the client supplied cursor. One
/// record past the requested limit is fetched to learn whether a further
/// page exists without a count query.
///
/// Records inserted behind an already returned cursor are not revisited,
/// and records closer together than one cursor tick may be skipped or
/// repeated across a page boundary unless the tie-breaker is enabled.
#[derive(Debug, Clone)]
pub struct KeysetPaginator {
    config: KeysetConfig,
}

impl KeysetPaginator {
    pub const fn new(config: KeysetConfig) -> Self {
        Self { config }
    }

    pub fn configure(
        limit_param: &str,
        cursor_param: &str,
        cursor_field: &str,
        default_limit: u32,
        direction: Direction,
    ) -> Result<Self, KeysetConfigError> {
        KeysetConfig::timestamp()
            .limit_param(limit_param)
            .cursor_param(cursor_param)
            .cursor_field(cursor_field)
            .default_limit(default_limit)
            .direction(direction)
            .build()
            .map(Self::new)
    }

    pub const fn config(&self) -> &KeysetConfig {
        &self.config
    }

    /// Decode the page request carried by `params`.
    pub fn parse_request(&self, params: &QueryParams) -> ApplicationResult<PageRequest> {
        let limit = self.parse_limit(params.get(self.config.limit_param()))?;
        let cursor = self.parse_cursor(params.get(self.config.cursor_param()))?;
        Ok(PageRequest {
            limit,
            cursor,
            direction: self.config.direction(),
        })
    }

    /// Source query for `request`: bounded by its cursor, ordered by the
    /// configured direction, one record past the limit.
    pub fn query_for(&self, request: &PageRequest) -> KeysetQuery {
        KeysetQuery {
            field: self.config.cursor_field().to_string(),
            direction: request.direction,
            bound: request
                .cursor
                .as_ref()
                .map(|cursor| KeysetBound::new(request.direction, cursor)),
            take: request.probe_size(),
        }
    }

    pub async fn paginate<S>(
        &self,
        params: &QueryParams,
        source: &S,
    ) -> ApplicationResult<Page<S::Item>>
    where
        S: KeysetSource + ?Sized,
    {
        let request = self.parse_request(params)?;
        self.fetch_page(&request, source).await
    }

    pub async fn fetch_page<S>(
        &self,
        request: &PageRequest,
        source: &S,
    ) -> ApplicationResult<Page<S::Item>>
    where
        S: KeysetSource + ?Sized,
    {
        let query = self.query_for(request);
        let mut records = source.fetch(&query).await?;

        let limit = request.limit as usize;
        let next_cursor = if records.len() > limit {
            records.truncate(limit);
            records.last().map(|last| self.encode(last)).transpose()?
        } else {
            None
        };
        let page = match next_cursor {
            Some(cursor) => Page::with_next(records, request.limit, cursor),
            None => Page::last(records, request.limit),
        };

        tracing::debug!(
            limit = request.limit,
            first_page = request.is_first_page(),
            returned = page.len(),
            has_next = page.has_next(),
            "keyset page computed"
        );
        Ok(page)
    }

    /// URL of the page following `page`, or `None` on the last page.
    ///
    /// Only the limit and cursor parameters of `base_url` are rewritten.
    pub fn build_next_link<T>(&self, page: &Page<T>, base_url: &Url) -> Option<Url> {
        let cursor = page.next_cursor()?;
        let mut url = base_url.clone();
        replace_query_param(&mut url, self.config.limit_param(), &page.limit().to_string());
        replace_query_param(&mut url, self.config.cursor_param(), &cursor.to_string());
        Some(url)
    }

    fn encode<R: CursorRecord>(&self, record: &R) -> ApplicationResult<Cursor> {
        self.config
            .codec()
            .encode(record.cursor_value(), record.tie_breaker())
            .map_err(ApplicationError::from)
    }

    fn parse_limit(&self, raw: Option<&str>) -> ApplicationResult<u32> {
        let Some(raw) = raw else {
            return Ok(self.config.default_limit());
        };

        // Digits too long for u64 are still a positive integer.
        let limit = match raw.trim().parse::<u64>() {
            Ok(0) => None,
            Ok(value) => Some(value),
            Err(err) if *err.kind() == IntErrorKind::PosOverflow => Some(u64::MAX),
            Err(_) => None,
        };

        match limit {
            Some(limit) => self.check_ceiling(limit),
            None if self.config.strict_parsing() => Err(ApplicationError::Validation(format!(
                "`{}` must be a positive integer",
                self.config.limit_param()
            ))),
            None => {
                tracing::warn!(value = raw, "ignoring malformed page limit");
                Ok(self.config.default_limit())
            }
        }
    }

    /// Limits above the ceiling, or above `u32::MAX` when none is set, are
    /// rejected rather than clamped.
    fn check_ceiling(&self, limit: u64) -> ApplicationResult<u32> {
        let max = self.config.max_limit().unwrap_or(u32::MAX);
        match u32::try_from(limit) {
            Ok(limit) if limit <= max => Ok(limit),
            _ => Err(ApplicationError::Validation(format!(
                "`{}` cannot exceed {max}",
                self.config.limit_param()
            ))),
        }
    }

    fn parse_cursor(&self, raw: Option<&str>) -> ApplicationResult<Option<Cursor>> {
        let Some(raw) = raw else {
            return Ok(None);
        };

        match self.config.codec().decode(raw) {
            Ok(cursor) => Ok(Some(cursor)),
            Err(_) if self.config.strict_parsing() => Err(ApplicationError::Validation(format!(
                "`{}` is not a valid cursor",
                self.config.cursor_param()
            ))),
            Err(_) => {
                tracing::warn!(value = raw, "ignoring malformed cursor");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pagination::Comparison;

    fn paginator(direction: Direction) -> KeysetPaginator {
        KeysetPaginator::configure("limit", "timestamp", "created_at", 20, direction)
            .expect("valid configuration")
    }

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        pairs.iter().copied().collect()
    }

    #[test]
    fn descending_query_uses_less_than_and_descending_order() {
        let paginator = paginator(Direction::Desc);
        let request = paginator
            .parse_request(&params(&[("timestamp", "400000000")]))
            .expect("request");
        let query = paginator.query_for(&request);
        assert_eq!(query.direction.order_by(&query.field), "-created_at");
        assert_eq!(query.bound.expect("bound").comparison, Comparison::LessThan);
    }

    #[test]
    fn ascending_query_uses_greater_than_and_ascending_order() {
        let paginator = paginator(Direction::Asc);
        let request = paginator
            .parse_request(&params(&[("timestamp", "400000000")]))
            .expect("request");
        let query = paginator.query_for(&request);
        assert_eq!(query.direction.order_by(&query.field), "created_at");
        assert_eq!(query.bound.expect("bound").comparison, Comparison::GreaterThan);
    }

    #[test]
    fn missing_or_invalid_limit_falls_back_to_default() {
        let paginator = paginator(Direction::Desc);
        for raw in ["abc", "0", "-4", "1.5", ""] {
            let request = paginator
                .parse_request(&params(&[("limit", raw)]))
                .expect("lenient");
            assert_eq!(request.limit, 20, "limit={raw}");
        }
        let request = paginator.parse_request(&QueryParams::default()).expect("request");
        assert_eq!(request.limit, 20);
        assert_eq!(request.probe_size(), 21);
    }

    #[test]
    fn malformed_cursor_is_ignored_when_lenient() {
        let paginator = paginator(Direction::Desc);
        let request = paginator
            .parse_request(&params(&[("timestamp", "abc")]))
            .expect("lenient");
        assert!(request.is_first_page());
    }

    #[test]
    fn strict_parsing_rejects_malformed_values() {
        let config = KeysetConfig::timestamp()
            .strict_parsing(true)
            .build()
            .expect("config");
        let paginator = KeysetPaginator::new(config);

        let err = paginator
            .parse_request(&params(&[("limit", "abc")]))
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Validation(_)));

        let err = paginator
            .parse_request(&params(&[("timestamp", "abc")]))
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Validation(_)));
    }

    #[test]
    fn limit_above_ceiling_is_rejected_not_clamped() {
        let config = KeysetConfig::timestamp()
            .max_limit(Some(100))
            .build()
            .expect("config");
        let paginator = KeysetPaginator::new(config);

        assert_eq!(
            paginator
                .parse_request(&params(&[("limit", "100")]))
                .expect("at ceiling")
                .limit,
            100
        );
        let err = paginator
            .parse_request(&params(&[("limit", "101")]))
            .unwrap_err();
        assert!(err.is_client_error());
        assert!(err.to_string().contains("cannot exceed 100"));
    }

    #[test]
    fn limit_beyond_u32_hits_the_ceiling() {
        let config = KeysetConfig::timestamp()
            .default_limit(5)
            .max_limit(Some(10))
            .build()
            .expect("config");
        let paginator = KeysetPaginator::new(config);

        for raw in ["5000000000", "99999999999999999999999"] {
            let err = paginator
                .parse_request(&params(&[("limit", raw)]))
                .unwrap_err();
            assert!(err.is_client_error(), "limit={raw}");
            assert!(err.to_string().contains("cannot exceed 10"), "limit={raw}");
        }
    }

    #[test]
    fn limit_beyond_u32_is_rejected_without_ceiling() {
        let paginator = paginator(Direction::Desc);
        assert_eq!(paginator.config().max_limit(), None);

        let err = paginator
            .parse_request(&params(&[("limit", "5000000000")]))
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Validation(ref msg) if msg.contains(&u32::MAX.to_string())));

        let request = paginator
            .parse_request(&params(&[("limit", "4294967295")]))
            .expect("largest representable limit");
        assert_eq!(request.limit, u32::MAX);
    }

    #[test]
    fn next_link_absent_on_last_page() {
        let paginator = paginator(Direction::Desc);
        let page: Page<()> = Page::last(vec![()], 20);
        let base = Url::parse("http://api.test/items?limit=20").expect("url");
        assert!(paginator.build_next_link(&page, &base).is_none());
    }
}
