//! Contract checks over decoded documents
//!
//! Findings are returned as [`Violation`] values rather than errors: a
//! document that decodes is always usable, the checker only reports where
//! it strays from the contract's invariants.

use crate::codec::Document;
use crate::config::CheckSettings;
use crate::pools::{PoolFacets, PoolIdentity, PoolResult};
use crate::search::{SearchRequest, SearchResponse};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;
use url::Url;

/// How serious a finding is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// One finding, located by a JSON-pointer-like path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub severity: Severity,
    pub path: String,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.severity, self.path, self.message)
    }
}

/// Checks documents against the contract, optionally consulting a catalog
/// of known pools for responses that omit a pool's identity.
pub struct Checker<'a> {
    settings: &'a CheckSettings,
    catalog: &'a [PoolIdentity],
    violations: Vec<Violation>,
}

impl<'a> Checker<'a> {
    pub fn new(settings: &'a CheckSettings, catalog: &'a [PoolIdentity]) -> Self {
        Self {
            settings,
            catalog,
            violations: Vec::new(),
        }
    }

    /// Check any document and return the findings
    pub fn check(mut self, document: &Document) -> Vec<Violation> {
        match document {
            Document::Request(request) => self.request("", request, &[]),
            Document::Response(response) => self.response(response),
            Document::PoolResult(result) => self.pool_result("", result, None, None),
            Document::PoolFacets(facets) => self.pool_facets(facets),
            Document::PoolIdentity(pool) => self.pool_identity("", pool),
            Document::Providers(providers) => {
                for (i, provider) in providers.providers.iter().enumerate() {
                    let path = format!("/providers/{}", i);
                    if provider.provider.is_empty() {
                        self.warn(&path, "provider key is empty");
                    }
                    self.url(&format!("{}/homepage_url", path), &provider.homepage_url);
                    self.url(&format!("{}/logo_url", path), &provider.logo_url);
                }
            }
            Document::QueryFilters(filters) => {
                let mut seen = HashSet::new();
                for (i, filter) in filters.filters.iter().enumerate() {
                    if !seen.insert(filter.id.as_str()) {
                        self.error(
                            &format!("/filters/{}/id", i),
                            format!("duplicate filter id {:?}", filter.id),
                        );
                    }
                }
            }
        }
        debug!(
            "Checked {} document: {} finding(s)",
            document.kind(),
            self.violations.len()
        );
        self.violations
    }

    fn request(&mut self, prefix: &str, request: &SearchRequest, described: &[PoolIdentity]) {
        if request.is_empty() {
            self.warn(&format!("{}/query", prefix), "query is empty");
        }
        if let Some(max_rows) = self.settings.max_rows {
            if request.pagination.rows > max_rows {
                self.warn(
                    &format!("{}/pagination/rows", prefix),
                    format!("{} rows requested, limit is {}", request.pagination.rows, max_rows),
                );
            }
        }
        self.sort_order(&format!("{}/sort/order", prefix), &request.sort.order);

        let mut pools = HashSet::new();
        for (i, filter) in request.filters.iter().enumerate() {
            if !pools.insert(filter.pool_id.as_str()) {
                self.warn(
                    &format!("{}/filters/{}/pool_id", prefix, i),
                    format!("more than one filter for pool {:?}", filter.pool_id),
                );
            }
        }

        let target = &request.preferences.target_pool;
        if !target.is_empty()
            && self.settings.require_known_pools
            && self.lookup(target, described).is_none()
        {
            self.warn(
                &format!("{}/preferences/target_pool", prefix),
                format!("unknown pool {:?}", target),
            );
        }
    }

    fn response(&mut self, response: &SearchResponse) {
        if let Some(request) = &response.request {
            self.request("/request", request, &response.pools);
        }

        let mut ids = HashSet::new();
        for (i, pool) in response.pools.iter().enumerate() {
            if !ids.insert(pool.id.as_str()) {
                self.error(
                    &format!("/pools/{}/id", i),
                    format!("duplicate pool id {:?}", pool.id),
                );
            }
            self.pool_identity(&format!("/pools/{}", i), pool);
        }

        for (i, result) in response.results.iter().enumerate() {
            let path = format!("/pool_results/{}", i);
            let pool = self.lookup(&result.pool_name, &response.pools);
            if pool.is_none() && self.settings.require_known_pools && !result.pool_name.is_empty() {
                self.warn(
                    &format!("{}/pool_id", path),
                    format!("pool {:?} is not described in the response or catalog", result.pool_name),
                );
            }
            self.pool_result(&path, result, pool, response.request.as_ref());
        }
    }

    fn pool_identity(&mut self, prefix: &str, pool: &PoolIdentity) {
        if pool.id.is_empty() {
            self.error(&format!("{}/id", prefix), "pool id is empty");
        }
        self.url(&format!("{}/url", prefix), &pool.url);

        let mut sorts = HashSet::new();
        for (i, option) in pool.sort_options.iter().enumerate() {
            if !sorts.insert(option.id.as_str()) {
                self.warn(
                    &format!("{}/sort_options/{}/id", prefix, i),
                    format!("sort option {:?} advertised twice", option.id),
                );
            }
        }
    }

    fn pool_result(
        &mut self,
        prefix: &str,
        result: &PoolResult,
        pool: Option<PoolIdentity>,
        request: Option<&SearchRequest>,
    ) {
        self.status(prefix, result.status_code);

        if !result.is_success() && !result.groups.is_empty() {
            self.warn(
                &format!("{}/group_list", prefix),
                "failed pool result carries groups",
            );
        }
        if !result.is_success() && result.status_message.is_empty() {
            self.warn(
                &format!("{}/status_msg", prefix),
                "failed pool result has no status message",
            );
        }
        if !result.confidence.is_empty() && result.confidence_level().is_none() {
            self.warn(
                &format!("{}/confidence", prefix),
                format!("unrecognized confidence {:?}", result.confidence),
            );
        }
        self.sort_order(&format!("{}/sort/order", prefix), &result.sort.order);

        if let Some(pool) = &pool {
            let sort_id = &result.sort.sort_id;
            if !sort_id.is_empty() && !pool.sort_options.is_empty() && !pool.advertises_sort(sort_id) {
                self.warn(
                    &format!("{}/sort/sort_id", prefix),
                    format!("pool {:?} does not advertise sort {:?}", pool.id, sort_id),
                );
            }
        }

        for (g, group) in result.groups.iter().enumerate() {
            if group.count < group.records.len() as i64 {
                self.warn(
                    &format!("{}/group_list/{}/count", prefix, g),
                    format!("count {} is less than {} records", group.count, group.records.len()),
                );
            }
        }

        if let Some(request) = request {
            let filter = request.filter_for(&result.pool_name);
            for (f, facet) in result.facet_list.iter().enumerate() {
                for (b, bucket) in facet.buckets.iter().enumerate() {
                    let expected = filter
                        .map(|filter| filter.contains(&facet.id, &bucket.value))
                        .unwrap_or(false);
                    if bucket.selected != expected {
                        self.warn(
                            &format!("{}/facet_list/{}/buckets/{}/selected", prefix, f, b),
                            format!(
                                "bucket {:?} of {:?} is {}selected but the request filters {}",
                                bucket.value,
                                facet.id,
                                if bucket.selected { "" } else { "not " },
                                if expected { "include it" } else { "do not include it" },
                            ),
                        );
                    }
                }
            }
        }
    }

    fn pool_facets(&mut self, facets: &PoolFacets) {
        self.status("", facets.status_code);
        if !facets.is_success() && !facets.facet_list.is_empty() {
            self.warn("/facet_list", "failed pool result carries facets");
        }
    }

    fn status(&mut self, prefix: &str, code: i64) {
        if !(100..=599).contains(&code) {
            self.error(
                &format!("{}/status_code", prefix),
                format!("{} is not an HTTP status code", code),
            );
        }
    }

    fn sort_order(&mut self, path: &str, order: &str) {
        if !matches!(order, "" | "asc" | "desc") {
            self.warn(path, format!("sort order {:?} is neither \"asc\" nor \"desc\"", order));
        }
    }

    fn url(&mut self, path: &str, value: &str) {
        if !self.settings.check_urls || value.is_empty() {
            return;
        }
        if let Err(e) = Url::parse(value) {
            self.warn(path, format!("invalid URL {:?}: {}", value, e));
        }
    }

    fn lookup(&self, id: &str, described: &[PoolIdentity]) -> Option<PoolIdentity> {
        described
            .iter()
            .chain(self.catalog.iter())
            .find(|p| p.id == id)
            .cloned()
    }

    fn warn(&mut self, path: &str, message: impl Into<String>) {
        self.push(Severity::Warning, path, message.into());
    }

    fn error(&mut self, path: &str, message: impl Into<String>) {
        self.push(Severity::Error, path, message.into());
    }

    fn push(&mut self, severity: Severity, path: &str, message: String) {
        let path = if path.is_empty() { "/" } else { path };
        self.violations.push(Violation {
            severity,
            path: path.to_string(),
            message,
        });
    }
}

/// Whether the findings should fail a check run
pub fn is_failure(violations: &[Violation], strict: bool) -> bool {
    violations
        .iter()
        .any(|v| v.severity == Severity::Error || strict)
}
