//! Command handlers.
//!
//! Each handler takes the loaded catalog and returns a serializable view;
//! [`crate::output::render`] turns the view into text or structured output.

use catalog_seeker::{Catalog, NameOrder, Record, SearchReport, Strategy};
use serde::Serialize;
use tracing::info;

use crate::cli::{AnalyzeArgs, FindArgs, ListArgs};
use crate::output::Render;

const NOT_FOUND: &str = "Product not found";

/// Result of one strategy run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub strategy: Strategy,
    pub record: Option<Record>,
    pub comparisons: usize,
}

impl From<SearchReport<'_>> for SearchResult {
    fn from(report: SearchReport<'_>) -> Self {
        SearchResult {
            strategy: report.strategy,
            record: report.record.cloned(),
            comparisons: report.comparisons,
        }
    }
}

/// Output of `find`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FindView {
    pub query: String,
    pub results: Vec<SearchResult>,
}

impl Render for FindView {
    fn render_text(&self) -> String {
        let blocks: Vec<String> = self
            .results
            .iter()
            .map(|result| {
                let outcome = match &result.record {
                    Some(record) => record.to_string(),
                    None => NOT_FOUND.to_string(),
                };
                format!(
                    "{} Search: Looking for '{}'\n{}",
                    title(result.strategy),
                    self.query,
                    outcome
                )
            })
            .collect();
        blocks.join("\n\n")
    }
}

/// Output of `list`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListView {
    pub order: Option<String>,
    pub records: Vec<Record>,
}

impl Render for ListView {
    fn render_text(&self) -> String {
        let lines: Vec<String> = self.records.iter().map(Record::to_string).collect();
        lines.join("\n")
    }
}

/// One row of `analyze`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRow {
    pub strategy: Strategy,
    pub complexity: &'static str,
    pub comparisons: usize,
    pub found: bool,
}

/// Output of `analyze`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzeView {
    pub query: String,
    pub size: usize,
    pub rows: Vec<AnalysisRow>,
}

impl Render for AnalyzeView {
    fn render_text(&self) -> String {
        let mut lines = vec![
            "--- Search Analysis ---".to_string(),
            format!("Looking for '{}' in {} products", self.query, self.size),
        ];
        for row in &self.rows {
            lines.push(format!(
                "{:<8} {:<9} comparisons: {:<4} {}",
                row.strategy.as_str(),
                row.complexity,
                row.comparisons,
                if row.found { "found" } else { "not found" }
            ));
        }
        lines.push("Binary search is faster for large, sorted datasets.".to_string());
        lines.join("\n")
    }
}

fn title(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::Linear => "Linear",
        Strategy::Binary => "Binary",
    }
}

/// Returns a copy of `catalog` ready for binary search.
fn sorted_copy(catalog: &Catalog) -> Catalog {
    if !catalog.is_sorted_by_name(NameOrder::IgnoreCase) {
        info!(
            records = catalog.len(),
            "catalog not sorted by name; sorting a copy"
        );
    }
    catalog.clone().sorted_by_name()
}

// `sorted` is filled on the first strategy that needs sorted input.
fn run_strategy(
    catalog: &Catalog,
    sorted: &mut Option<Catalog>,
    strategy: Strategy,
    name: &str,
) -> SearchResult {
    let records = if strategy.requires_sorted() {
        sorted.get_or_insert_with(|| sorted_copy(catalog)).records()
    } else {
        catalog.records()
    };
    strategy.search(records, name).into()
}

/// Runs the requested strategies. Linear search sees the catalog as given,
/// binary search a sorted copy.
pub fn find(catalog: &Catalog, args: &FindArgs) -> FindView {
    let mut sorted = None;
    let results = args
        .strategy
        .strategies()
        .iter()
        .map(|&strategy| run_strategy(catalog, &mut sorted, strategy, &args.name))
        .collect();
    FindView {
        query: args.name.clone(),
        results,
    }
}

pub fn list(catalog: &Catalog, args: &ListArgs) -> ListView {
    let order = if args.case_sensitive {
        Some(NameOrder::CaseSensitive)
    } else if args.sorted {
        Some(NameOrder::IgnoreCase)
    } else {
        None
    };

    let mut catalog = catalog.clone();
    if let Some(order) = order {
        catalog.sort_by_name_with(order);
    }
    ListView {
        order: order.map(|o| o.to_string()),
        records: catalog.into_records(),
    }
}

pub fn analyze(catalog: &Catalog, args: &AnalyzeArgs) -> AnalyzeView {
    let mut sorted = None;
    let rows = Strategy::ALL
        .iter()
        .map(|&strategy| {
            let result = run_strategy(catalog, &mut sorted, strategy, &args.name);
            AnalysisRow {
                strategy,
                complexity: strategy.complexity(),
                comparisons: result.comparisons,
                found: result.record.is_some(),
            }
        })
        .collect();
    AnalyzeView {
        query: args.name.clone(),
        size: catalog.len(),
        rows,
    }
}
