use anyhow::Result;
use time::{Date, Duration};

use std::collections::HashMap;

use crate::{date::parse_date, Branch, Lkr, Sale};

/// Summary statistics over the sale amounts recorded for one product.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceStats {
    pub mean: f64,
    pub max: Lkr,
    pub min: Lkr,
    pub median: f64,
    /// The raw filtered amounts, in record order, for box-plot display.
    pub samples: Vec<Lkr>,
}

/// Total and mean sale amounts for one Monday-to-Sunday week.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeeklyTotals {
    pub total: Lkr,
    pub average: f64,
}

/// Returns the raw distribution of sale amounts for `branch_id`, in record
/// order, or `None` if the branch has no recorded sales.
///
/// The amounts are not summed; the caller hands the distribution to a
/// histogram display as-is.
#[must_use]
pub fn branch_sales(sales: &[Sale], branch_id: &str) -> Option<Vec<Lkr>> {
    let amounts: Vec<Lkr> = sales
        .iter()
        .filter(|sale| sale.branch_id == branch_id)
        .map(|sale| sale.amount)
        .collect();
    if amounts.is_empty() {
        None
    } else {
        Some(amounts)
    }
}

/// Computes mean, max, min, and median over the sale amounts recorded for
/// `product_id`, or `None` if the product has no recorded sales.
///
/// The median of an even-sized distribution is the average of the two middle
/// values. The returned stats also carry the raw filtered amounts for
/// box-plot display.
#[must_use]
pub fn price_statistics(sales: &[Sale], product_id: &str) -> Option<PriceStats> {
    let samples: Vec<Lkr> = sales
        .iter()
        .filter(|sale| sale.product_id == product_id)
        .map(|sale| sale.amount)
        .collect();
    let max = samples.iter().copied().max()?;
    let min = samples.iter().copied().min()?;
    let mean = samples.iter().map(|a| a.as_f64()).sum::<f64>() / samples.len() as f64;
    let mut sorted = samples.clone();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[mid - 1].as_f64() + sorted[mid].as_f64()) / 2.0
    } else {
        sorted[mid].as_f64()
    };
    Some(PriceStats {
        mean,
        max,
        min,
        median,
        samples,
    })
}

/// Returns the Monday-to-Sunday week containing `today`, both ends inclusive.
#[must_use]
pub fn week_window(today: Date) -> (Date, Date) {
    let monday = today - Duration::days(i64::from(today.weekday().number_days_from_monday()));
    (monday, monday + Duration::days(6))
}

/// Sums the sales falling within the week containing `today`.
///
/// The average is the mean sale amount over that window, or 0 if no sale
/// falls inside it.
///
/// # Errors
///
/// Every sale's date is parsed, whether or not it could fall in the window;
/// a single malformed date fails the whole computation rather than being
/// skipped.
pub fn weekly_totals(sales: &[Sale], today: Date) -> Result<WeeklyTotals> {
    let (monday, sunday) = week_window(today);
    let mut amounts = Vec::new();
    for sale in sales {
        let date = parse_date(&sale.date)?;
        if date >= monday && date <= sunday {
            amounts.push(sale.amount);
        }
    }
    let total: Lkr = amounts.iter().copied().sum();
    let average = if amounts.is_empty() {
        0.0
    } else {
        total.as_f64() / amounts.len() as f64
    };
    Ok(WeeklyTotals { total, average })
}

/// Sums every sale amount, with no filtering. An empty collection totals 0.
///
/// # Examples
///
/// ```
/// # use shoptrack::{grand_total, Lkr, Sale};
/// let sales = vec![Sale {
///     branch_id: "5".into(),
///     product_id: "5".into(),
///     amount: Lkr(240),
///     date: "2024-03-05".into(),
/// }];
/// assert_eq!(grand_total(&sales), Lkr(240));
/// assert_eq!(grand_total(&[]), Lkr(0));
/// ```
#[must_use]
pub fn grand_total(sales: &[Sale]) -> Lkr {
    sales.iter().map(|sale| sale.amount).sum()
}

/// Totals sale amounts per known branch, for bar-chart display.
///
/// Every branch ID in `branches` gets an accumulator seeded at 0, in
/// collection order; a repeated ID collapses into the slot of its first
/// occurrence. Sales whose branch ID is not in `branches` contribute nothing
/// and raise no error.
#[must_use]
pub fn branch_totals(branches: &[Branch], sales: &[Sale]) -> Vec<(String, Lkr)> {
    let mut totals: Vec<(String, Lkr)> = Vec::with_capacity(branches.len());
    let mut slots: HashMap<&str, usize> = HashMap::with_capacity(branches.len());
    for branch in branches {
        if !slots.contains_key(branch.branch_id.as_str()) {
            slots.insert(&branch.branch_id, totals.len());
            totals.push((branch.branch_id.clone(), Lkr::default()));
        }
    }
    for sale in sales {
        if let Some(&slot) = slots.get(sale.branch_id.as_str()) {
            totals[slot].1 += sale.amount;
        }
    }
    totals
}
