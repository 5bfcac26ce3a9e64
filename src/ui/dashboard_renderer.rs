use terminal_size::{terminal_size, Width};

use crate::config::constants::{DEFAULT_BAR_WIDTH, MAX_BAR_WIDTH};
use crate::enums::frequency::Frequency;
use crate::services::aggregator;
use crate::structs::consumption_by_category::ConsumptionByCategory;
use crate::structs::dashboard_state::DashboardState;
use crate::structs::frequency_by_food::FrequencyByFood;
use crate::structs::top_food::TopFood;

// One fill character per bucket, least to most frequent, matching
// Frequency::ALL order.
const BUCKET_FILLS: [char; 4] = ['░', '▒', '▓', '█'];

/// Renders the shaped section data as text charts. Pure string building;
/// printing is left to the caller.
pub struct DashboardRenderer {
    bar_width: usize,
}

impl DashboardRenderer {
    pub fn new() -> Self {
        let bar_width = terminal_size()
            .map(|(Width(w), _)| (w as usize).saturating_sub(30).clamp(20, MAX_BAR_WIDTH))
            .unwrap_or(DEFAULT_BAR_WIDTH);
        Self { bar_width }
    }

    pub fn with_bar_width(bar_width: usize) -> Self {
        Self { bar_width }
    }

    pub fn render_overview(&self, state: &DashboardState) -> String {
        let mut out = String::new();

        let top_foods = state.top_foods.data().map(Vec::as_slice).unwrap_or(&[]);
        let frequency = state.frequency.data().map(Vec::as_slice).unwrap_or(&[]);
        let category = state.category.data().map(Vec::as_slice).unwrap_or(&[]);

        out.push_str(&self.render_header(top_foods, category));

        out.push_str("\n== Top Foods Consumed ==\n");
        if let Some(notice) = state.top_foods.notice() {
            out.push_str(&format!("⚠️  {}\n", notice));
        }
        out.push_str(&self.render_top_foods(top_foods));

        out.push_str("\n== Frequency Distribution ==\n");
        if let Some(notice) = state.frequency.notice() {
            out.push_str(&format!("⚠️  {}\n", notice));
        }
        out.push_str(&self.render_frequency(frequency));

        out.push_str("\n== Consumption by Category ==\n");
        if let Some(notice) = state.category.notice() {
            out.push_str(&format!("⚠️  {}\n", notice));
        }
        out.push_str(&self.render_categories(category));

        out
    }

    /// The overview header stats: foods tracked, distinct categories, total
    /// responses, and the most popular food.
    fn render_header(&self, top_foods: &[TopFood], category: &[ConsumptionByCategory]) -> String {
        let mut categories: Vec<&str> = Vec::new();
        for record in category {
            if !categories.contains(&record.category.as_str()) {
                categories.push(record.category.as_str());
            }
        }
        let total_responses: u32 = top_foods.iter().map(|f| f.total).sum();
        let most_popular = aggregator::rank_top_foods(top_foods)
            .first()
            .map(|f| f.food.clone())
            .unwrap_or_else(|| "-".to_string());

        format!(
            "Foods tracked: {}  |  Categories: {}  |  Total responses: {}  |  Most popular: {}\n",
            top_foods.len(),
            categories.len(),
            total_responses,
            most_popular,
        )
    }

    fn render_top_foods(&self, records: &[TopFood]) -> String {
        let ranked = aggregator::rank_top_foods(records);
        if ranked.is_empty() {
            return "  (no data)\n".to_string();
        }
        let max_total = ranked.iter().map(|f| f.total).max().unwrap_or(1).max(1);
        let label_width = ranked.iter().map(|f| f.label.chars().count()).max().unwrap_or(0);

        let mut out = String::new();
        for food in &ranked {
            let bar_len = (food.total as usize * self.bar_width) / max_total as usize;
            out.push_str(&format!(
                "  {:<width$}  {} {}\n",
                food.label,
                "█".repeat(bar_len.max(1)),
                food.total,
                width = label_width,
            ));
        }
        out
    }

    fn render_frequency(&self, records: &[FrequencyByFood]) -> String {
        let rows = aggregator::frequency_pivot(records);
        if rows.is_empty() {
            return "  (no data)\n".to_string();
        }
        let max_total = rows.iter().map(|r| r.total).max().unwrap_or(1).max(1);
        let label_width = rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);

        let mut out = String::new();
        for row in &rows {
            let mut bar = String::new();
            for bucket in Frequency::ALL {
                let count = row.count(bucket);
                let segment = (count as usize * self.bar_width) / max_total as usize;
                for _ in 0..segment {
                    bar.push(BUCKET_FILLS[bucket.index()]);
                }
            }
            out.push_str(&format!(
                "  {:<width$}  {} {}\n",
                row.label,
                bar,
                row.total,
                width = label_width,
            ));
        }

        let legend: Vec<String> = Frequency::ALL
            .iter()
            .map(|bucket| format!("{} {}", BUCKET_FILLS[bucket.index()], bucket.as_str()))
            .collect();
        out.push_str(&format!("  Legend: {}\n", legend.join("  ")));
        out
    }

    fn render_categories(&self, records: &[ConsumptionByCategory]) -> String {
        let slices = aggregator::category_totals(records);
        if slices.is_empty() {
            return "  (no data)\n".to_string();
        }
        let name_width = slices.iter().map(|s| s.name.chars().count()).max().unwrap_or(0);

        let mut out = String::new();
        for slice in &slices {
            out.push_str(&format!(
                "  {:<width$}  {:>5}%  ({} responses)\n",
                slice.name,
                slice.percentage,
                slice.total,
                width = name_width,
            ));
        }
        out
    }
}

impl Default for DashboardRenderer {
    fn default() -> Self {
        Self::new()
    }
}
