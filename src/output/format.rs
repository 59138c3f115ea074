use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::error::AppError;

#[derive(Debug, Clone, Copy)]
pub(crate) struct NumberFormat {
    group_sep: char,
    decimal_sep: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat {
            group_sep: ',',
            decimal_sep: '.',
        }
    }
}

impl NumberFormat {
    pub(crate) fn from_locale(locale: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = locale else {
            return Ok(NumberFormat::default());
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(NumberFormat::default());
        }
        let base = trimmed
            .split(['-', '_'])
            .next()
            .unwrap_or(trimmed)
            .to_ascii_lowercase();

        let format = match base.as_str() {
            "de" => NumberFormat {
                group_sep: '.',
                decimal_sep: ',',
            },
            "fr" | "ru" => NumberFormat {
                group_sep: ' ',
                decimal_sep: ',',
            },
            "en" | "zh" => NumberFormat::default(),
            _ => {
                return Err(AppError::UnsupportedLocale {
                    input: trimmed.to_string(),
                });
            }
        };

        Ok(format)
    }
}

fn group_digits(digits: &str, group_sep: char) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(group_sep);
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Grouped unsigned count, e.g. `1,050,000`
pub(super) fn format_count(n: u64, format: NumberFormat) -> String {
    group_digits(&n.to_string(), format.group_sep)
}

pub(super) fn format_number(n: i64, format: NumberFormat) -> String {
    let sign = if n < 0 { "-" } else { "" };
    format!("{sign}{}", format_count(n.unsigned_abs(), format))
}

/// Fixed-point with grouped integer part; `-0.00` collapses to `0.00`
fn format_decimal(value: f64, decimals: usize, format: NumberFormat) -> (bool, String) {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let mut out = group_digits(int_part, format.group_sep);
    if !frac_part.is_empty() {
        out.push(format.decimal_sep);
        out.push_str(frac_part);
    }
    let negative = value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
    (negative, out)
}

/// Currency with two decimals, e.g. `$31,500.00` or `-$12.50`
pub(super) fn format_cost(cost: f64, format: NumberFormat) -> String {
    if cost.is_nan() {
        return "N/A".to_string();
    }
    match format_decimal(cost, 2, format) {
        (true, s) => format!("-${s}"),
        (false, s) => format!("${s}"),
    }
}

/// Percentage with one decimal, e.g. `95.2%`
pub(super) fn format_percent(percent: f64, format: NumberFormat) -> String {
    if percent.is_nan() {
        return "N/A".to_string();
    }
    match format_decimal(percent, 1, format) {
        (true, s) => format!("-{s}%"),
        (false, s) => format!("{s}%"),
    }
}

/// Per-1K model rates are fractions of a cent; keep four decimals
pub(super) fn format_rate(rate: f64, format: NumberFormat) -> String {
    let (_, s) = format_decimal(rate, 4, format);
    format!("${s}")
}

/// Request volume in compact form (`1M`, `250K`) when that is exact,
/// otherwise the full grouped count
pub(super) fn format_compact(n: u64, format: NumberFormat) -> String {
    let unit = [(1_000_000_000, "B"), (1_000_000, "M"), (1_000, "K")]
        .into_iter()
        .find(|&(unit, _)| n >= unit);
    match unit {
        Some((unit, suffix)) if n % unit == 0 => format!("{}{suffix}", n / unit),
        _ => format_count(n, format),
    }
}

pub(super) fn styled_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}

pub(super) fn right_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    styled_cell(text, color, bold).set_alignment(CellAlignment::Right)
}

#[cfg(test)]
mod tests {
    use super::{
        NumberFormat, format_compact, format_cost, format_count, format_number, format_percent,
        format_rate,
    };

    #[test]
    fn format_number_with_commas() {
        let fmt = NumberFormat::default();
        assert_eq!(format_number(0, fmt), "0");
        assert_eq!(format_number(999, fmt), "999");
        assert_eq!(format_number(1000, fmt), "1,000");
        assert_eq!(format_number(1_234_567, fmt), "1,234,567");
    }

    #[test]
    fn format_number_negative() {
        let fmt = NumberFormat::default();
        assert_eq!(format_number(-1234, fmt), "-1,234");
        assert_eq!(format_number(i64::MIN, fmt), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn format_count_covers_full_u64_range() {
        let fmt = NumberFormat::default();
        assert_eq!(format_count(0, fmt), "0");
        assert_eq!(format_count(1_050_000, fmt), "1,050,000");
        assert_eq!(format_count(u64::MAX, fmt), "18,446,744,073,709,551,615");
    }

    #[test]
    fn format_cost_two_decimals() {
        let fmt = NumberFormat::default();
        assert_eq!(format_cost(1.234, fmt), "$1.23");
        assert_eq!(format_cost(31_500.0, fmt), "$31,500.00");
        assert_eq!(format_cost(0.0, fmt), "$0.00");
        assert_eq!(format_cost(-12.5, fmt), "-$12.50");
        assert_eq!(format_cost(-0.001, fmt), "$0.00");
    }

    #[test]
    fn format_cost_handles_nan() {
        assert_eq!(format_cost(f64::NAN, NumberFormat::default()), "N/A");
    }

    #[test]
    fn format_percent_one_decimal() {
        let fmt = NumberFormat::default();
        assert_eq!(format_percent(95.238_095, fmt), "95.2%");
        assert_eq!(format_percent(100.0, fmt), "100.0%");
        assert_eq!(format_percent(-25.0, fmt), "-25.0%");
    }

    #[test]
    fn format_rate_four_decimals() {
        let fmt = NumberFormat::default();
        assert_eq!(format_rate(0.03, fmt), "$0.0300");
        assert_eq!(format_rate(0.0015, fmt), "$0.0015");
    }

    #[test]
    fn format_compact_units() {
        let fmt = NumberFormat::default();
        assert_eq!(format_compact(0, fmt), "0");
        assert_eq!(format_compact(999, fmt), "999");
        assert_eq!(format_compact(1_000, fmt), "1K");
        assert_eq!(format_compact(250_000, fmt), "250K");
        assert_eq!(format_compact(1_000_000, fmt), "1M");
        assert_eq!(format_compact(3_000_000_000, fmt), "3B");
    }

    #[test]
    fn format_compact_keeps_inexact_volumes_whole() {
        let fmt = NumberFormat::default();
        assert_eq!(format_compact(1_500, fmt), "1,500");
        assert_eq!(format_compact(999_999, fmt), "999,999");
        assert_eq!(format_compact(1_050_000, fmt), "1,050,000");
        assert_eq!(format_compact(1_960_000, fmt), "1,960,000");
        assert_eq!(format_compact(2_500_000_000, fmt), "2,500,000,000");
    }

    #[test]
    fn from_locale_none_returns_default() {
        let fmt = NumberFormat::from_locale(None).unwrap();
        assert_eq!(format_number(1000, fmt), "1,000");
    }

    #[test]
    fn from_locale_empty_returns_default() {
        let fmt = NumberFormat::from_locale(Some("")).unwrap();
        assert_eq!(format_number(1000, fmt), "1,000");
    }

    #[test]
    fn from_locale_de_swaps_separators() {
        let fmt = NumberFormat::from_locale(Some("de")).unwrap();
        assert_eq!(format_number(1000, fmt), "1.000");
        assert_eq!(format_cost(31_500.0, fmt), "$31.500,00");
        assert_eq!(format_percent(95.238, fmt), "95,2%");
        assert_eq!(format_compact(1_500, fmt), "1.500");
    }

    #[test]
    fn from_locale_fr_uses_space_separator() {
        let fmt = NumberFormat::from_locale(Some("fr")).unwrap();
        assert_eq!(format_number(1000, fmt), "1 000");
    }

    #[test]
    fn from_locale_with_region_suffix() {
        let fmt = NumberFormat::from_locale(Some("de-DE")).unwrap();
        assert_eq!(format_number(1000, fmt), "1.000");
    }

    #[test]
    fn from_locale_unsupported_returns_error() {
        assert!(NumberFormat::from_locale(Some("ja")).is_err());
    }
}
