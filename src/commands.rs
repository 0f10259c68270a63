//! The operations the CLI exposes, one function per menu action.
//!
//! Each command loads the collections it needs from the [`Store`], runs the
//! matching aggregation, and returns a [`CommandOutput`] payload. Payloads
//! that describe charts carry only the numeric series and display labels;
//! rendering is the caller's business.

use anyhow::Result;
use time::Date;

use crate::{
    analysis::{self, PriceStats, WeeklyTotals},
    date::{parse_date, today, ISO_DATE_FMT},
    Branch, Lkr, Resource, Sale, Store, User,
};

use std::fmt::{self, Display};

/// A flat numeric distribution with display metadata, for histogram or
/// box-plot display.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub values: Vec<Lkr>,
}

/// What a command produced: a chart-ready series, scalar statistics, or a
/// plain not-found report.
///
/// `NotFound` is the normal outcome of asking about a branch or product with
/// no recorded sales; it is not an error and commands returning it still
/// succeed.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    /// Raw sale amounts for one branch, for histogram display.
    Histogram(Series),
    /// Price statistics for one product, plus the raw distribution for
    /// box-plot display.
    PriceReport { stats: PriceStats, series: Series },
    /// Network totals over the Monday-to-Sunday window shown.
    Weekly {
        monday: Date,
        sunday: Date,
        totals: WeeklyTotals,
    },
    /// Sum over every recorded sale.
    GrandTotal(Lkr),
    /// Ordered (branch ID, total) pairs, for bar-chart display.
    BarChart {
        title: String,
        x_label: String,
        y_label: String,
        bars: Vec<(String, Lkr)>,
    },
    /// The filter matched no sales; the message says so.
    NotFound(String),
}

impl Display for CommandOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandOutput::Histogram(series) => {
                writeln!(f, "{}", series.title)?;
                write!(f, "{}:", series.x_label)?;
                for value in &series.values {
                    write!(f, " {value}")?;
                }
                writeln!(f)
            }
            CommandOutput::PriceReport { stats, series } => {
                writeln!(f, "{}", series.title)?;
                writeln!(f, "Average Price: {} LKR", stats.mean)?;
                writeln!(f, "Maximum Price: {} LKR", stats.max)?;
                writeln!(f, "Minimum Price: {} LKR", stats.min)?;
                writeln!(f, "Median Price: {} LKR", stats.median)?;
                write!(f, "{}:", series.x_label)?;
                for value in &series.values {
                    write!(f, " {value}")?;
                }
                writeln!(f)
            }
            CommandOutput::Weekly {
                monday,
                sunday,
                totals,
            } => {
                writeln!(f, "Weekly Sales Analysis - {monday} to {sunday}")?;
                writeln!(f, "Total Sales for the Week: {} LKR", totals.total)?;
                writeln!(f, "Average Daily Sales: {} LKR", totals.average)
            }
            CommandOutput::GrandTotal(total) => {
                writeln!(f, "Total Sales Amount: {total} LKR")
            }
            CommandOutput::BarChart {
                title,
                x_label,
                y_label,
                bars,
            } => {
                let width = bars
                    .iter()
                    .map(|(id, _)| id.len())
                    .max()
                    .unwrap_or(0)
                    .max(x_label.len());
                writeln!(f, "{title}")?;
                writeln!(f, "{x_label:width$} {y_label}")?;
                for (branch_id, total) in bars {
                    writeln!(f, "{branch_id:width$} {total}")?;
                }
                Ok(())
            }
            CommandOutput::NotFound(message) => writeln!(f, "{message}"),
        }
    }
}

/// Reports the sale amount distribution for one branch.
///
/// # Errors
///
/// Returns any error from loading the sales resource.
pub fn monthly_sales(store: &Store, branch_id: &str) -> Result<CommandOutput> {
    let sales: Vec<Sale> = store.load(Resource::Sales)?;
    Ok(match analysis::branch_sales(&sales, branch_id) {
        Some(values) => CommandOutput::Histogram(Series {
            title: format!("Monthly Sales Analysis - Branch {branch_id}"),
            x_label: "Sales Amount (LKR)".into(),
            y_label: "Frequency".into(),
            values,
        }),
        None => CommandOutput::NotFound(format!(
            "Sales data not found for Branch ID {branch_id}."
        )),
    })
}

/// Reports price statistics for one product.
///
/// # Errors
///
/// Returns any error from loading the sales resource.
pub fn price_analysis(store: &Store, product_id: &str) -> Result<CommandOutput> {
    let sales: Vec<Sale> = store.load(Resource::Sales)?;
    Ok(match analysis::price_statistics(&sales, product_id) {
        Some(stats) => {
            let series = Series {
                title: format!("Price Analysis - Product {product_id}"),
                x_label: "Sales Amount (LKR)".into(),
                y_label: String::new(),
                values: stats.samples.clone(),
            };
            CommandOutput::PriceReport { stats, series }
        }
        None => CommandOutput::NotFound(format!(
            "No sales data found for Product ID {product_id}."
        )),
    })
}

/// Reports network-wide totals for the current Monday-to-Sunday week.
///
/// # Errors
///
/// Returns any error from loading the sales resource, or from parsing any
/// sale's date (a single malformed date fails the whole report).
pub fn weekly_sales(store: &Store) -> Result<CommandOutput> {
    let sales: Vec<Sale> = store.load(Resource::Sales)?;
    let now = today();
    let (monday, sunday) = analysis::week_window(now);
    let totals = analysis::weekly_totals(&sales, now)?;
    Ok(CommandOutput::Weekly {
        monday,
        sunday,
        totals,
    })
}

/// Reports the grand total over every recorded sale.
///
/// # Errors
///
/// Returns any error from loading the sales resource.
pub fn total_sales(store: &Store) -> Result<CommandOutput> {
    let sales: Vec<Sale> = store.load(Resource::Sales)?;
    Ok(CommandOutput::GrandTotal(analysis::grand_total(&sales)))
}

/// Reports per-branch sale totals for every known branch.
///
/// # Errors
///
/// Returns any error from loading the branches or sales resources.
pub fn all_branch_totals(store: &Store) -> Result<CommandOutput> {
    let branches: Vec<Branch> = store.load(Resource::Branches)?;
    let sales: Vec<Sale> = store.load(Resource::Sales)?;
    Ok(CommandOutput::BarChart {
        title: "Monthly Sales Analysis of All Branches".into(),
        x_label: "Branch ID".into(),
        y_label: "Total Sales (LKR)".into(),
        bars: analysis::branch_totals(&branches, &sales),
    })
}

/// Records a new branch, rewriting the branches resource wholesale.
///
/// # Errors
///
/// Returns any error from loading or rewriting the branches resource.
pub fn add_branch(store: &Store, branch: Branch) -> Result<()> {
    let mut branches: Vec<Branch> = store.load(Resource::Branches)?;
    branches.push(branch);
    store.replace(Resource::Branches, &branches)
}

/// Records a new sale, rewriting the sales resource wholesale.
///
/// The date defaults to today in `YYYY-MM-DD` form; an explicit date must
/// match one of the two accepted patterns and is stored as given.
///
/// # Errors
///
/// Returns any error from loading or rewriting the sales resource, or a
/// [`DateFormatError`](crate::DateFormatError) for an unparseable explicit
/// date.
pub fn add_sale(
    store: &Store,
    branch_id: &str,
    product_id: &str,
    amount: Lkr,
    date: Option<String>,
) -> Result<()> {
    let date = match date {
        Some(text) => {
            parse_date(&text)?;
            text
        }
        None => today().format(ISO_DATE_FMT)?,
    };
    let mut sales: Vec<Sale> = store.load(Resource::Sales)?;
    sales.push(Sale {
        branch_id: branch_id.to_string(),
        product_id: product_id.to_string(),
        amount,
        date,
    });
    store.replace(Resource::Sales, &sales)
}

/// Records a new user for [`authenticate`](crate::authenticate) to match
/// against.
///
/// # Errors
///
/// Returns any error from appending to the users resource.
pub fn add_user(store: &Store, username: &str, password: &str) -> Result<()> {
    store.append(Resource::Users, &[User {
        username: username.to_string(),
        password: password.to_string(),
    }])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale(branch_id: &str, product_id: &str, amount: i64, date: &str) -> Sale {
        Sale {
            branch_id: branch_id.into(),
            product_id: product_id.into(),
            amount: Lkr(amount),
            date: date.into(),
        }
    }

    fn store_with_sales(sales: &[Sale]) -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());
        store.replace(Resource::Sales, sales).unwrap();
        (dir, store)
    }

    #[test]
    fn monthly_sales_fn_reports_not_found_for_unknown_branch() {
        let (_dir, store) = store_with_sales(&[sale("5", "5", 240, "2024-03-05")]);
        let output = monthly_sales(&store, "9").unwrap();
        assert_eq!(
            output,
            CommandOutput::NotFound("Sales data not found for Branch ID 9.".into())
        );
    }

    #[test]
    fn monthly_sales_fn_builds_a_labeled_histogram_series() {
        let (_dir, store) = store_with_sales(&[
            sale("5", "1", 240, "2024-03-05"),
            sale("2", "1", 95, "2024-03-05"),
            sale("5", "2", 180, "2024-03-06"),
        ]);
        let CommandOutput::Histogram(series) = monthly_sales(&store, "5").unwrap() else {
            panic!("expected a histogram");
        };
        assert_eq!(series.title, "Monthly Sales Analysis - Branch 5");
        assert_eq!(series.values, vec![Lkr(240), Lkr(180)]);
    }

    #[test]
    fn price_analysis_fn_computes_stats_over_matching_sales() {
        let (_dir, store) = store_with_sales(&[
            sale("1", "X", 100, "2024-03-05"),
            sale("2", "X", 300, "2024-03-05"),
            sale("2", "Y", 999, "2024-03-05"),
        ]);
        let CommandOutput::PriceReport { stats, series } =
            price_analysis(&store, "X").unwrap()
        else {
            panic!("expected a price report");
        };
        assert_eq!(stats.mean, 200.0);
        assert_eq!(stats.median, 200.0);
        assert_eq!(series.values, vec![Lkr(100), Lkr(300)]);
    }

    #[test]
    fn total_sales_fn_reports_zero_on_an_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());
        assert_eq!(
            total_sales(&store).unwrap(),
            CommandOutput::GrandTotal(Lkr(0))
        );
    }

    #[test]
    fn add_branch_fn_persists_the_new_row_after_existing_ones() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());
        let first = Branch {
            branch_id: "5".into(),
            name: "Branch A".into(),
            location: "Location A".into(),
        };
        let second = Branch {
            branch_id: "6".into(),
            name: "Branch B".into(),
            location: "Location B".into(),
        };
        add_branch(&store, first.clone()).unwrap();
        add_branch(&store, second.clone()).unwrap();
        let branches: Vec<Branch> = store.load(Resource::Branches).unwrap();
        assert_eq!(branches, vec![first, second]);
    }

    #[test]
    fn add_sale_fn_defaults_the_date_to_today() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());
        add_sale(&store, "5", "5", Lkr(240), None).unwrap();
        let sales: Vec<Sale> = store.load(Resource::Sales).unwrap();
        assert_eq!(sales.len(), 1);
        assert_eq!(parse_date(&sales[0].date).unwrap(), today());
    }

    #[test]
    fn add_sale_fn_rejects_an_unparseable_explicit_date() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());
        let result = add_sale(&store, "5", "5", Lkr(240), Some("next week".into()));
        assert!(result.is_err());
    }

    #[test]
    fn bar_chart_display_aligns_branch_ids_under_the_heading() {
        let output = CommandOutput::BarChart {
            title: "Monthly Sales Analysis of All Branches".into(),
            x_label: "Branch ID".into(),
            y_label: "Total Sales (LKR)".into(),
            bars: vec![("A".into(), Lkr(10)), ("B".into(), Lkr(0))],
        };
        assert_eq!(
            output.to_string(),
            "Monthly Sales Analysis of All Branches\n\
             Branch ID Total Sales (LKR)\n\
             A         10\n\
             B         0\n"
        );
    }
}
