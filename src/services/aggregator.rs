//! Pure chart-shaping functions. None of these mutate their input; grouping
//! preserves first-seen order and every sort is stable, so equal totals keep
//! their input order.

use crate::config::constants::{
    PIVOT_FOODS_LIMIT, PIVOT_LABEL_CHARS, TOP_FOODS_LIMIT, TOP_FOOD_LABEL_CHARS,
};
use crate::helpers::labels::truncate_label;
use crate::structs::category_slice::CategorySlice;
use crate::structs::consumption_by_category::ConsumptionByCategory;
use crate::structs::frequency_by_food::FrequencyByFood;
use crate::structs::frequency_row::FrequencyRow;
use crate::structs::ranked_food::RankedFood;
use crate::structs::top_food::TopFood;

/// Sum each category's counts across all buckets, order by summed total
/// descending, and attach each category's share of the grand total rounded
/// to one decimal. Empty input yields an empty list (no division by zero).
pub fn category_totals(records: &[ConsumptionByCategory]) -> Vec<CategorySlice> {
    let mut totals: Vec<(String, u32)> = Vec::new();
    for record in records {
        match totals.iter_mut().find(|(name, _)| *name == record.category) {
            Some((_, total)) => *total += record.total,
            None => totals.push((record.category.clone(), record.total)),
        }
    }

    let grand_total: u32 = totals.iter().map(|(_, total)| *total).sum();
    if grand_total == 0 {
        return Vec::new();
    }

    totals.sort_by(|a, b| b.1.cmp(&a.1));
    totals
        .into_iter()
        .map(|(name, total)| CategorySlice {
            percentage: format!("{:.1}", f64::from(total) * 100.0 / f64::from(grand_total)),
            name,
            total,
        })
        .collect()
}

/// Pivot (food, bucket) records into one row per food with a count per
/// bucket, keeping the top [`PIVOT_FOODS_LIMIT`] foods by total. Labels are
/// truncated for display; the full food name rides along in the row.
pub fn frequency_pivot(records: &[FrequencyByFood]) -> Vec<FrequencyRow> {
    let mut rows: Vec<FrequencyRow> = Vec::new();
    for record in records {
        let index = match rows.iter().position(|row| row.food == record.food) {
            Some(index) => index,
            None => {
                rows.push(FrequencyRow {
                    label: truncate_label(&record.food, PIVOT_LABEL_CHARS),
                    food: record.food.clone(),
                    counts: [0; 4],
                    total: 0,
                });
                rows.len() - 1
            }
        };
        rows[index].counts[record.frequency.index()] += record.total;
        rows[index].total += record.total;
    }

    rows.sort_by(|a, b| b.total.cmp(&a.total));
    rows.truncate(PIVOT_FOODS_LIMIT);
    rows
}

/// Order foods by total descending and keep the top [`TOP_FOODS_LIMIT`],
/// truncating labels while retaining the full name.
pub fn rank_top_foods(records: &[TopFood]) -> Vec<RankedFood> {
    let mut ranked: Vec<RankedFood> = records
        .iter()
        .map(|record| RankedFood {
            label: truncate_label(&record.food, TOP_FOOD_LABEL_CHARS),
            food: record.food.clone(),
            total: record.total,
        })
        .collect();

    ranked.sort_by(|a, b| b.total.cmp(&a.total));
    ranked.truncate(TOP_FOODS_LIMIT);
    ranked
}
