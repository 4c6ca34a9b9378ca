//! Console rendering of computed reports.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rx_model::{ChainRecommendation, ChainRevenue, MetricRecord, QuantityRanking};

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input_dir.display());
    println!(
        "Loaded {} claims, {} reverts, {} pharmacies",
        result.counts.claims, result.counts.reverts, result.counts.pharmacies
    );
    if let Some(metrics) = &result.reports.metrics {
        println!("{}", metrics_table(metrics));
    }
    if let Some(rankings) = &result.reports.most_prescribed {
        println!("{}", quantity_table(rankings));
    }
    if let Some(recommendations) = &result.reports.recommendations {
        println!("{}", recommendation_table(recommendations));
    }
    if let Some(revenue) = &result.reports.revenue {
        println!("{}", revenue_table(revenue));
    }
    if result.written.is_empty() {
        println!("Dry run: no reports written to {}", result.output_dir.display());
    }
    for report in &result.written {
        println!(
            "Wrote {} ({} rows): {}",
            report.kind,
            report.rows,
            report.path.display()
        );
    }
}

pub fn metrics_table(metrics: &[MetricRecord]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("NPI"),
        header_cell("NDC"),
        header_cell("Fills"),
        header_cell("Reverted"),
        header_cell("Avg Price"),
        header_cell("Total Price"),
    ]);
    apply_table_style(&mut table);
    for index in 2..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for metric in metrics {
        table.add_row(vec![
            Cell::new(&metric.npi),
            Cell::new(&metric.ndc),
            Cell::new(metric.fills),
            count_cell(metric.reverted),
            Cell::new(format_price(metric.avg_price)),
            Cell::new(format_price(metric.total_price)),
        ]);
    }
    table
}

pub fn quantity_table(rankings: &[QuantityRanking]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("NDC"),
        header_cell("Most Prescribed Quantities"),
    ]);
    apply_table_style(&mut table);
    for ranking in rankings {
        let quantities: Vec<String> = ranking
            .most_prescribed_quantity
            .iter()
            .map(|&q| format_quantity(q))
            .collect();
        table.add_row(vec![Cell::new(&ranking.ndc), Cell::new(quantities.join(", "))]);
    }
    table
}

pub fn recommendation_table(recommendations: &[ChainRecommendation]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("NDC"),
        header_cell("Rank"),
        header_cell("Chain"),
        header_cell("Avg Price"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for recommendation in recommendations {
        for (rank, chain) in recommendation.chain.iter().enumerate() {
            let ndc_cell = if rank == 0 {
                Cell::new(&recommendation.ndc)
            } else {
                dim_cell("")
            };
            table.add_row(vec![
                ndc_cell,
                Cell::new(rank + 1),
                Cell::new(&chain.name),
                Cell::new(format_price(chain.avg_price)),
            ]);
        }
    }
    table
}

pub fn revenue_table(revenue: &[ChainRevenue]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Chain"), header_cell("Revenue")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let mut total = 0.0;
    for row in revenue {
        total += row.revenue;
        table.add_row(vec![
            Cell::new(&row.chain),
            Cell::new(format_price(row.revenue)),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format_price(total)).add_attribute(Attribute::Bold),
    ]);
    table
}

/// Formats a price as dollars with two decimals, e.g. `$12.50`.
pub fn format_price(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", -value)
    } else {
        format!("${value:.2}")
    }
}

/// Formats a quantity, keeping one decimal for whole numbers (`30.0`).
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: u64) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rx_model::ChainPrice;

    fn render(mut table: Table) -> String {
        table.force_no_tty();
        table.to_string()
    }

    #[test]
    fn prices_have_two_decimals() {
        assert_eq!(format_price(10.0), "$10.00");
        assert_eq!(format_price(6.666_666), "$6.67");
        assert_eq!(format_price(-2.5), "-$2.50");
    }

    #[test]
    fn whole_quantities_keep_a_decimal() {
        assert_eq!(format_quantity(30.0), "30.0");
        assert_eq!(format_quantity(7.5), "7.5");
    }

    #[test]
    fn metrics_table_lists_each_record() {
        let metrics = vec![MetricRecord {
            npi: "1234567890".to_string(),
            ndc: "00002323401".to_string(),
            fills: 2,
            reverted: 1,
            avg_price: 15.0,
            total_price: 30.0,
        }];

        let mut table = metrics_table(&metrics);
        assert_eq!(table.column_count(), 6);
        assert_eq!(table.row_iter().count(), 1);

        let rendered = render(table);
        assert!(rendered.contains("Total Price"));
        assert!(rendered.contains("1234567890"));
        assert!(rendered.contains("$15.00"));
        assert!(rendered.contains("$30.00"));
    }

    #[test]
    fn quantity_table_joins_quantities() {
        let rankings = vec![QuantityRanking {
            ndc: "d1".to_string(),
            most_prescribed_quantity: vec![5.0, 3.0],
        }];

        let rendered = render(quantity_table(&rankings));

        assert!(rendered.contains("Most Prescribed Quantities"));
        assert!(rendered.contains("5.0, 3.0"));
    }

    #[test]
    fn recommendation_table_has_one_row_per_chain() {
        let recommendations = vec![ChainRecommendation {
            ndc: "d1".to_string(),
            chain: vec![
                ChainPrice {
                    name: "ChainB".to_string(),
                    avg_price: 13.0,
                },
                ChainPrice {
                    name: "ChainA".to_string(),
                    avg_price: 15.0,
                },
            ],
        }];

        let table = recommendation_table(&recommendations);
        assert_eq!(table.row_iter().count(), 2);

        let rendered = render(table);
        assert!(rendered.contains("Avg Price"));
        assert!(rendered.contains("ChainB"));
        assert!(rendered.contains("$13.00"));
    }

    #[test]
    fn revenue_table_appends_total_row() {
        let revenue = vec![
            ChainRevenue {
                chain: "ChainA".to_string(),
                revenue: 30.0,
            },
            ChainRevenue {
                chain: "ChainB".to_string(),
                revenue: 26.0,
            },
        ];

        let table = revenue_table(&revenue);
        assert_eq!(table.row_iter().count(), 3);

        let rendered = render(table);
        assert!(rendered.contains("TOTAL"));
        assert!(rendered.contains("$56.00"));
    }
}
