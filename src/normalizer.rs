//! Turns a free-text ingredient line into a `(name, amount, unit)` triple.

use crate::model::{IngredientTriple, MeasureUnit};
use regex::Regex;
use std::sync::LazyLock;

/// Amount used whenever the line has no usable number
pub const DEFAULT_AMOUNT: f64 = 1.0;

/// Leading integer, decimal (point or comma) or simple fraction
static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)(?:[.,](\d+)|\s*/\s*(\d+))?").expect("Invalid leading number regex")
});

/// Unit spellings in priority order: the first one found in the text wins,
/// so longer phrases must come before any shorter phrase they contain.
///
/// Single-letter entries (`г`) only match a whole word. Plain substring
/// matching would read "кг" as grams; here "кг" yields no unit.
pub const UNIT_PATTERNS: &[(&str, MeasureUnit)] = &[
    ("столовых ложек", MeasureUnit::Tablespoon),
    ("столовые ложки", MeasureUnit::Tablespoon),
    ("столовая ложка", MeasureUnit::Tablespoon),
    ("чайных ложек", MeasureUnit::Teaspoon),
    ("чайные ложки", MeasureUnit::Teaspoon),
    ("чайная ложка", MeasureUnit::Teaspoon),
    ("ст. л.", MeasureUnit::Tablespoon),
    ("ст.л.", MeasureUnit::Tablespoon),
    ("ч. л.", MeasureUnit::Teaspoon),
    ("ч.л.", MeasureUnit::Teaspoon),
    ("миллилитр", MeasureUnit::Milliliter),
    ("мл.", MeasureUnit::Milliliter),
    ("мл", MeasureUnit::Milliliter),
    ("грамм", MeasureUnit::Gram),
    ("гр.", MeasureUnit::Gram),
    ("гр", MeasureUnit::Gram),
    ("штука", MeasureUnit::Piece),
    ("штуки", MeasureUnit::Piece),
    ("штук", MeasureUnit::Piece),
    ("шт.", MeasureUnit::Piece),
    ("шт", MeasureUnit::Piece),
    ("зубца", MeasureUnit::Piece),
    ("зубец", MeasureUnit::Piece),
    ("г", MeasureUnit::Gram),
];

/// Normalizes ingredient lines. Total: every input yields a triple.
#[derive(Debug, Clone, Copy, Default)]
pub struct IngredientNormalizer;

impl IngredientNormalizer {
    pub fn run(&self, line: &str) -> IngredientTriple {
        normalize_ingredient(line)
    }

    pub fn run_all(&self, lines: &[String]) -> Vec<IngredientTriple> {
        lines.iter().map(|line| self.run(line)).collect()
    }
}

/// Split `"Картофель, 300 гр"` into name, amount and unit.
///
/// Without a comma the whole trimmed line is the name. Without a positive
/// leading number the amount is [`DEFAULT_AMOUNT`] and the unit is dropped.
pub fn normalize_ingredient(line: &str) -> IngredientTriple {
    let Some((name, amount_part)) = line.split_once(',') else {
        return default_triple(line.trim());
    };
    let name = name.trim();
    let amount_part = amount_part.trim();

    let Some((amount, rest)) = leading_amount(amount_part) else {
        return default_triple(name);
    };

    IngredientTriple {
        name: name.to_string(),
        amount,
        unit: find_unit(rest),
    }
}

fn default_triple(name: &str) -> IngredientTriple {
    IngredientTriple {
        name: name.to_string(),
        amount: DEFAULT_AMOUNT,
        unit: None,
    }
}

/// Parse the number at the start of `text`, returning it with the remainder.
fn leading_amount(text: &str) -> Option<(f64, &str)> {
    let caps = LEADING_NUMBER.captures(text)?;
    let whole = caps.get(0)?;
    let integer = caps.get(1)?.as_str();

    let amount = if let Some(fraction) = caps.get(2) {
        format!("{integer}.{}", fraction.as_str()).parse::<f64>().ok()?
    } else if let Some(denominator) = caps.get(3) {
        let denominator: f64 = denominator.as_str().parse().ok()?;
        integer.parse::<f64>().ok()? / denominator
    } else {
        integer.parse::<f64>().ok()?
    };

    if !amount.is_finite() || amount <= 0.0 {
        return None;
    }
    Some((amount, text[whole.end()..].trim()))
}

/// First pattern of [`UNIT_PATTERNS`] present in `text`.
pub fn find_unit(text: &str) -> Option<MeasureUnit> {
    let lower = text.to_lowercase();
    UNIT_PATTERNS
        .iter()
        .find(|(pattern, _)| contains_unit(&lower, pattern))
        .map(|&(_, unit)| unit)
}

/// Substring match; single-letter patterns must stand alone so that "кг" is
/// not read as grams.
fn contains_unit(text: &str, pattern: &str) -> bool {
    if pattern.chars().count() > 1 {
        return text.contains(pattern);
    }
    text.split(|c: char| !c.is_alphabetic())
        .any(|word| word == pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(line: &str) -> (String, f64, Option<i32>) {
        let t = normalize_ingredient(line);
        let unit_id = t.unit_id();
        (t.name, t.amount, unit_id)
    }

    #[test]
    fn test_basic_gram_line() {
        assert_eq!(
            triple("Картофель, 300 гр"),
            ("Картофель".to_string(), 300.0, Some(1))
        );
    }

    #[test]
    fn test_units() {
        assert_eq!(triple("Молоко, 200 мл").2, Some(2));
        assert_eq!(triple("Яйцо, 2 шт.").2, Some(3));
        assert_eq!(triple("Чеснок, 3 зубца").2, Some(3));
        assert_eq!(triple("Мука, 2 ст. л.").2, Some(4));
        assert_eq!(triple("Сахар, 2 столовые ложки").2, Some(4));
        assert_eq!(triple("Соль, 1 ч.л.").2, Some(5));
        assert_eq!(triple("Сода, 1 Чайная ложка").2, Some(5));
        assert_eq!(triple("Сыр, 150 г").2, Some(1));
    }

    #[test]
    fn test_unknown_unit_keeps_amount() {
        assert_eq!(triple("Мясо, 1 кг"), ("Мясо".to_string(), 1.0, None));
        assert_eq!(triple("Укроп, 1 пучок"), ("Укроп".to_string(), 1.0, None));
        assert_eq!(triple("Вода, 2 л"), ("Вода".to_string(), 2.0, None));
    }

    #[test]
    fn test_decimal_and_fraction_amounts() {
        assert_eq!(triple("Масло, 0.5 ст. л.").1, 0.5);
        assert_eq!(triple("Уксус, 1,5 ч. л.").1, 1.5);
        assert_eq!(triple("Перец, 1/2 ч. л.").1, 0.5);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(triple(""), (String::new(), 1.0, None));
        assert_eq!(triple("  Соль по вкусу "), ("Соль по вкусу".to_string(), 1.0, None));
        assert_eq!(triple("Соль, по вкусу"), ("Соль".to_string(), 1.0, None));
        assert_eq!(triple("Соль, 0 гр"), ("Соль".to_string(), 1.0, None));
        assert_eq!(triple("Перец, 1/0 гр"), ("Перец".to_string(), 1.0, None));
        assert_eq!(triple(","), (String::new(), 1.0, None));
    }

    #[test]
    fn test_multiple_commas() {
        assert_eq!(
            triple("Сметана, 2 ст. л., для подачи"),
            ("Сметана".to_string(), 2.0, Some(4))
        );
    }

    #[test]
    fn test_unit_table_order() {
        // every pattern must come before any later pattern it contains
        for (i, (later, _)) in UNIT_PATTERNS.iter().enumerate() {
            for (earlier, _) in &UNIT_PATTERNS[..i] {
                assert!(
                    !later.contains(earlier),
                    "'{later}' is shadowed by earlier pattern '{earlier}'"
                );
            }
        }
    }

    #[test]
    fn test_normalizer_run_all() {
        let lines = vec!["Рис, 200 гр".to_string(), "Соль".to_string()];
        let triples = IngredientNormalizer.run_all(&lines);
        assert_eq!(triples.len(), 2);
        assert_eq!(triples[0].unit, Some(MeasureUnit::Gram));
        assert_eq!(triples[1].amount, DEFAULT_AMOUNT);
    }
}
