use comfy_table::{Cell, Color, Table};

use crate::core::{ComparisonRecord, estimate_tokens};
use crate::output::format::{
    NumberFormat, create_styled_table, format_compact, format_cost, format_count, format_number,
    format_percent, format_rate, header_cell, right_cell, styled_cell,
};
use crate::pricing::{PricingDb, TokenType};

/// Placeholder for cells a row has no value for
const NOT_APPLICABLE: &str = "-";

#[derive(Debug, Clone, Copy)]
pub(crate) struct TableOptions {
    pub(crate) use_color: bool,
    pub(crate) number_format: NumberFormat,
}

fn token_cell(tokens: u64, nf: NumberFormat) -> Cell {
    right_cell(&format_count(tokens, nf), None, false)
}

fn blank_cell() -> Cell {
    right_cell(NOT_APPLICABLE, None, false)
}

/// Four rows: per-request tokens, token savings %, cost at the record's
/// volume, and annualized savings. Rows that only make sense as a saving
/// leave the traditional and baked cells as `-`.
pub(crate) fn render_comparison_table(record: &ComparisonRecord, options: TableOptions) -> Table {
    let c = options.use_color;
    let nf = options.number_format;
    let green = if c { Some(Color::Green) } else { None };
    let volume = format_compact(record.num_requests(), nf);

    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Metric", c),
        header_cell("Traditional", c),
        header_cell("Baked", c),
        header_cell("Savings", c),
    ]);

    table.add_row(vec![
        Cell::new("System Tokens per Request"),
        token_cell(record.traditional.tokens_per_request, nf),
        token_cell(record.baked.tokens_per_request, nf),
        right_cell(&format_number(record.savings.tokens_per_request, nf), green, false),
    ]);
    table.add_row(vec![
        Cell::new("Token Savings %"),
        blank_cell(),
        blank_cell(),
        right_cell(&format_percent(record.savings.tokens_percent, nf), green, false),
    ]);
    table.add_row(vec![
        Cell::new(format!("Cost per {volume} Requests")),
        right_cell(&format_cost(record.traditional.cost, nf), None, false),
        right_cell(&format_cost(record.baked.cost, nf), None, false),
        right_cell(&format_cost(record.savings.total_cost, nf), green, false),
    ]);
    table.add_row(vec![
        styled_cell(&format!("Annual Savings ({volume} req/month)"), None, true),
        blank_cell(),
        blank_cell(),
        right_cell(&format_cost(record.savings.annual_cost_1m_requests, nf), green, true),
    ]);

    table
}

/// Print the comparison; `pricing_label` names the model the costs were priced at, when known
pub(crate) fn print_comparison_table(
    record: &ComparisonRecord,
    pricing_label: Option<&str>,
    options: TableOptions,
) {
    let table = render_comparison_table(record, options);
    println!("\n  Traditional vs Baked Model Comparison\n");
    println!("{table}");
    match pricing_label {
        Some(label) => println!(
            "\n  {} requests | input pricing: {}\n",
            format_count(record.num_requests(), options.number_format),
            label
        ),
        None => println!(
            "\n  {} requests\n",
            format_count(record.num_requests(), options.number_format)
        ),
    }
}

/// Model rates per 1K tokens; the default model is marked
pub(crate) fn render_pricing_table(pricing_db: &PricingDb, options: TableOptions) -> Table {
    let c = options.use_color;
    let nf = options.number_format;
    let cyan = if c { Some(Color::Cyan) } else { None };

    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Model", c),
        header_cell("Input / 1K", c),
        header_cell("Output / 1K", c),
    ]);

    for name in pricing_db.model_ids() {
        let input = format_rate(rate_per_1k(pricing_db, name, TokenType::Input), nf);
        let output = format_rate(rate_per_1k(pricing_db, name, TokenType::Output), nf);
        let is_default = name == pricing_db.default_model();
        let label = if is_default {
            format!("{name} (default)")
        } else {
            name.to_string()
        };
        table.add_row(vec![
            styled_cell(&label, if is_default { cyan } else { None }, is_default),
            right_cell(&input, None, false),
            right_cell(&output, None, false),
        ]);
    }

    table
}

fn rate_per_1k(pricing_db: &PricingDb, model: &str, token_type: TokenType) -> f64 {
    pricing_db.rate_for(model, token_type) * 1000.0
}

pub(crate) fn print_pricing_table(pricing_db: &PricingDb, options: TableOptions) {
    let table = render_pricing_table(pricing_db, options);
    println!("\n  Model Pricing\n");
    println!("{table}");
}

/// Queries with their approximate size in tokens
pub(crate) fn render_query_table(queries: &[&str], options: TableOptions) -> Table {
    let c = options.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("#", c),
        header_cell("Query", c),
        header_cell("Tokens", c),
    ]);

    let mut total = 0u64;
    for (i, query) in queries.iter().enumerate() {
        let tokens = estimate_tokens(query);
        total += tokens;
        table.add_row(vec![
            right_cell(&(i + 1).to_string(), None, false),
            Cell::new(*query),
            token_cell(tokens, options.number_format),
        ]);
    }

    if !queries.is_empty() {
        let cyan = if c { Some(Color::Cyan) } else { None };
        let average = total / queries.len() as u64;
        table.add_row(vec![
            Cell::new(""),
            styled_cell("AVERAGE", cyan, true),
            right_cell(&format_count(average, options.number_format), cyan, true),
        ]);
    }

    table
}

pub(crate) fn print_query_table(queries: &[&str], options: TableOptions) {
    let table = render_query_table(queries, options);
    println!("\n  Sample Queries\n");
    println!("{table}");
}
