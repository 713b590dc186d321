use crate::models::{Nutrient, NutrientTotals};

/// Welcome banner shown when the calculator starts.
pub fn greeting() -> String {
    [
        "Hello, User!",
        "Welcome to the Recipe Nutrition Calculator!",
        "Enter your ingredients and their amounts to calculate the total nutrients in your recipe.",
        "Type 'done' when you are finished.",
    ]
    .join("\n")
}

/// One report line, e.g. `Energy: 104.00 kcal` or `Fat: 0.40g`.
pub fn format_nutrient_line(nutrient: Nutrient, value: f64) -> String {
    format!("{}: {:.2}{}", nutrient.label(), value, nutrient.unit())
}

/// Report lines in presentation order, without a header.
pub fn report_lines(totals: &NutrientTotals) -> Vec<String> {
    Nutrient::ALL
        .iter()
        .map(|&n| format_nutrient_line(n, totals.get(n)))
        .collect()
}

/// Final report with header.
pub fn render_report(totals: &NutrientTotals) -> String {
    let mut lines = vec!["Final Nutrition Totals:".to_string()];
    lines.extend(report_lines(totals));
    lines.join("\n")
}
