use std::collections::HashSet;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::api::{CountData, PageApi, StatQuery};
use crate::dom::{Document, PAGE_KEY_ATTR};

/// What the counters need to know about the page they run on
#[derive(Clone)]
pub struct CountOptions {
    pub api: Arc<dyn PageApi>,
    /// Key of the current page, used for elements without `data-page-key`
    pub page_key: String,
    /// Selector of comment count elements, empty to disable
    pub count_el: String,
    /// Selector of page view elements, empty to disable
    pub pv_el: String,
    /// Record a view of the current page before showing PV counts
    pub pv_add: bool,
}

impl std::fmt::Debug for CountOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountOptions")
            .field("page_key", &self.page_key)
            .field("count_el", &self.count_el)
            .field("pv_el", &self.pv_el)
            .field("pv_add", &self.pv_add)
            .finish_non_exhaustive()
    }
}

/// One counter refresh
#[derive(Debug, Clone)]
pub struct RefreshArgs<'a> {
    pub query: StatQuery,
    pub num_el: &'a str,
    /// Counts already known; NaN entries are fetched again
    pub data: Option<CountData>,
}

/// Show comment counts, then record a page view and show PV counts.
///
/// The two steps are independent: a failed comment count fetch does not
/// keep the page view from being recorded. The first error is returned
/// once both steps have run.
pub async fn init_count_widget<D: Document>(opt: &CountOptions, dom: &mut D) -> Result<()> {
    let comments = if !opt.count_el.is_empty() && dom.query_selector(&opt.count_el).is_some() {
        refresh_stat_count(
            opt,
            RefreshArgs {
                query: StatQuery::PageComment,
                num_el: &opt.count_el,
                data: None,
            },
            dom,
        )
        .await
        .map(|_| ())
    } else {
        Ok(())
    };
    if let Err(e) = &comments {
        log::warn!("{:#}", e);
    }

    let pv = show_pv_counts(opt, dom).await;

    comments.and(pv)
}

async fn show_pv_counts<D: Document>(opt: &CountOptions, dom: &mut D) -> Result<()> {
    let current_pv = if opt.pv_add {
        opt.api.pv().await.context("Failed to record page view")?
    } else {
        f64::NAN
    };

    if !opt.pv_el.is_empty() && dom.query_selector(&opt.pv_el).is_some() {
        let seed = CountData::from([(opt.page_key.clone(), current_pv)]);
        refresh_stat_count(
            opt,
            RefreshArgs {
                query: StatQuery::PagePv,
                num_el: &opt.pv_el,
                data: Some(seed),
            },
            dom,
        )
        .await?;
    }

    Ok(())
}

/// Fetch the counts missing for the matched elements and write them out.
///
/// Returns the merged counts that were applied.
pub async fn refresh_stat_count<D: Document>(
    opt: &CountOptions,
    args: RefreshArgs<'_>,
    dom: &mut D,
) -> Result<CountData> {
    let mut data = args.data.unwrap_or_default();

    let page_keys = collect_page_keys(dom, args.num_el, &opt.page_key, &data);

    if !page_keys.is_empty() {
        log::debug!("{} missing for {:?}", args.query, page_keys);
        let fetched = opt
            .api
            .stat(args.query, &page_keys)
            .await
            .with_context(|| format!("Failed to fetch {} counts", args.query))?;
        data.extend(fetched);
    }

    let default_count = data.get(&opt.page_key).copied().unwrap_or(f64::NAN);
    apply_count_data(dom, args.num_el, &data, default_count);

    Ok(data)
}

/// Distinct page keys of the elements matching `selector`, in document
/// order, leaving out keys `known` already has a count for
pub fn collect_page_keys<D: Document>(
    dom: &D,
    selector: &str,
    default_key: &str,
    known: &CountData,
) -> Vec<String> {
    let mut seen = HashSet::new();
    dom.query_selector_all(selector)
        .into_iter()
        .map(|node| {
            dom.attribute(node, PAGE_KEY_ATTR)
                .filter(|key| !key.is_empty())
                .unwrap_or_else(|| default_key.to_string())
        })
        .filter(|key| known.get(key).is_none_or(|count| count.is_nan()))
        .filter(|key| seen.insert(key.clone()))
        .collect()
}

/// Write each matched element's count as its text.
///
/// Elements without a page key show `default_count`.
pub fn apply_count_data<D: Document>(
    dom: &mut D,
    selector: &str,
    data: &CountData,
    default_count: f64,
) {
    for node in dom.query_selector_all(selector) {
        let count = match dom.attribute(node, PAGE_KEY_ATTR).filter(|k| !k.is_empty()) {
            Some(key) => data.get(&key).copied().unwrap_or(f64::NAN),
            None => default_count,
        };
        dom.set_text_content(node, &format_count(count));
    }
}

/// Render a count the way a browser renders a number: shortest round-trip
/// digits, exponent form below `1e-6` and from `1e21` on, `-0` as `0`
pub fn format_count(count: f64) -> String {
    if count.is_nan() {
        return "NaN".to_string();
    }
    if count.is_infinite() {
        let sign = if count > 0.0 { "" } else { "-" };
        return format!("{sign}Infinity");
    }
    if count == 0.0 {
        return "0".to_string();
    }

    let magnitude = count.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{count}");
    }

    let exponential = format!("{count:e}");
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponential,
    }
}
