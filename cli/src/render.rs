use advice_client::formatter::{
    difficulty_color, format_category, format_currency, format_date_str, hex_to_rgb,
    priority_color,
};
use advice_client::{EnergyAdvice, HomeResponse, Recommendation};
use colored::Colorize;
use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement,
    Table,
};

const TABLE_HEADERS: [&str; 8] = [
    "#",
    "Priority",
    "Recommendation",
    "Category",
    "Difficulty",
    "Cost",
    "Savings/yr",
    "Payback",
];

/// Print advice whose recommendations are already in display order
pub fn print_advice(advice: &EnergyAdvice) {
    println!();
    println!("{}", "Your Energy Savings Plan".cyan().bold());
    println!("{}", advice.summary);
    println!(
        "{} {}",
        "Estimated total annual savings:".bold(),
        format_currency(advice.estimated_total_annual_savings).green().bold()
    );
    println!(
        "{}",
        format!(
            "Generated {} by {}",
            format_date_str(&advice.generated_at),
            advice.llm_provider
        )
        .dimmed()
    );
    println!();

    if advice.recommendations.is_empty() {
        println!("{}", "No recommendations were generated for this home.".yellow());
        return;
    }

    println!("{}", recommendation_table(&advice.recommendations));
}

pub fn recommendation_table(recommendations: &[Recommendation]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            TABLE_HEADERS
                .iter()
                .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
                .collect::<Vec<_>>(),
        );

    for (idx, rec) in recommendations.iter().enumerate() {
        let difficulty = rec.difficulty();
        table.add_row(vec![
            Cell::new(idx + 1),
            badge(rec.priority.as_str(), priority_color(rec.priority.as_str())),
            Cell::new(format!("{}\n{}", rec.title, rec.description)),
            Cell::new(format_category(&rec.category)),
            badge(difficulty.as_str(), difficulty_color(difficulty.as_str())),
            Cell::new(format_currency(rec.estimated_cost)),
            Cell::new(format_currency(rec.estimated_savings_annual)),
            Cell::new(format_payback(rec.payback_period_years)),
        ]);
    }

    table
}

pub fn print_home(home: &HomeResponse) {
    println!();
    println!("{} {}", "Home".cyan().bold(), home.id.bold());
    println!("{}", home.profile);
    println!(
        "{}",
        format!(
            "Created {}, updated {}",
            format_date_str(&home.created_at),
            format_date_str(&home.updated_at)
        )
        .dimmed()
    );
}

fn badge(label: &str, hex: &str) -> Cell {
    let cell = Cell::new(label.to_uppercase()).add_attribute(Attribute::Bold);
    match hex_to_rgb(hex) {
        Some((r, g, b)) => cell.fg(Color::Rgb { r, g, b }),
        None => cell,
    }
}

fn format_payback(years: Option<f64>) -> String {
    match years {
        Some(years) => format!("{years:.1} years"),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advice_client::{Difficulty, Priority};

    fn rec(title: &str, priority: Priority, cost: Option<f64>) -> Recommendation {
        Recommendation {
            title: title.to_string(),
            description: format!("{title} details"),
            priority,
            category: "heating_system".to_string(),
            estimated_savings_annual: Some(240.0),
            estimated_cost: cost,
            payback_period_years: Some(6.4),
            implementation_difficulty: Some(Difficulty::Easy),
        }
    }

    #[test]
    fn test_table_keeps_given_order_and_formats_cells() {
        let table = recommendation_table(&[
            rec("Seal drafts", Priority::Critical, Some(1500.0)),
            rec("Heat pump", Priority::Unrecognized("someday".to_string()), None),
        ])
        .to_string();

        let first = table.find("Seal drafts").unwrap();
        let second = table.find("Heat pump").unwrap();
        assert!(first < second);

        assert!(table.contains("CRITICAL"));
        assert!(table.contains("SOMEDAY"));
        assert!(table.contains("Heating System"));
        assert!(table.contains("€1.500"));
        assert!(table.contains("€0"));
        assert!(table.contains("€240"));
        assert!(table.contains("6.4 years"));
    }

    #[test]
    fn test_payback_placeholder() {
        assert_eq!(format_payback(None), "-");
        assert_eq!(format_payback(Some(4.0)), "4.0 years");
    }
}
