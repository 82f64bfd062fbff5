//! Plain-text reports for packing plans and quotes

use shipkit_domain::{PackingResult, PackingStrategy};

use crate::quote::ShipmentQuote;

const RULE_WIDTH: usize = 56;

/// Item column: uniform boxes hold identical units, others name their item or show as mixed
fn item_label(strategy: PackingStrategy, item_id: Option<&str>) -> &str {
    match (item_id, strategy) {
        (Some(id), _) => id,
        (None, PackingStrategy::Uniform) => "-",
        (None, _) => "(mixed)",
    }
}

pub fn render_plan(result: &PackingResult) -> String {
    let mut report = String::new();
    report.push_str("Packing Plan\n");
    report.push_str("============\n");
    report.push_str(&format!("Strategy:        {}\n", result.strategy));
    report.push_str(&format!("Boxes:           {}\n", result.len()));
    report.push_str(&format!("Minimum boxes:   {}\n", result.min_boxes));
    report.push_str(&format!("Total quantity:  {}\n", result.total_quantity()));
    report.push_str(&format!("Total weight:    {:.2}\n", result.total_weight()));
    report.push('\n');

    report.push_str(&format!("{:>4} {:>10} {:>10}  {}\n", "#", "Weight", "Quantity", "Item"));
    report.push_str("-".repeat(RULE_WIDTH).as_str());
    report.push('\n');
    for (index, shipping_box) in result.iter().enumerate() {
        report.push_str(&format!(
            "{:>4} {:>10.2} {:>10}  {}\n",
            index + 1,
            shipping_box.weight,
            shipping_box.quantity,
            item_label(result.strategy, shipping_box.item_id.as_deref())
        ));
    }
    report
}

pub fn render_quote(quote: &ShipmentQuote) -> String {
    let mut report = String::new();
    report.push_str("Shipping Quote\n");
    report.push_str("==============\n");
    report.push_str(&format!("Strategy:        {}\n", quote.strategy));
    report.push_str(&format!("Packages:        {}\n", quote.num_packages));
    report.push('\n');

    report.push_str(&format!(
        "{:>4} {:>10} {:>10} {:>14}  {}\n",
        "#", "Weight", "Quantity", "Price", "Item"
    ));
    report.push_str("-".repeat(RULE_WIDTH).as_str());
    report.push('\n');
    for (index, package) in quote.packages.iter().enumerate() {
        report.push_str(&format!(
            "{:>4} {:>10.2} {:>10} {:>14}  {}\n",
            index + 1,
            package.weight,
            package.quantity,
            package.price.to_string(),
            item_label(quote.strategy, package.item_id.as_deref())
        ));
    }
    report.push_str("-".repeat(RULE_WIDTH).as_str());
    report.push('\n');
    report.push_str(&format!("Total:           {}\n", quote.total));
    report
}
