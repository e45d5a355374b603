//! Read-only word lists and patterns shared by the line classifiers.

use regex::Regex;
use std::sync::LazyLock;

/// Closed set of unit tokens an ingredient line may carry
pub const INGREDIENT_UNITS: &[&str] = &[
    "гр.", "гр", "мл.", "мл", "шт.", "шт", "ст. л.", "ч. л.", "кг.", "кг", "л.", "л", "зубца",
    "зубец", "пучок",
];

/// Dotted abbreviations accepted by the last-resort ingredient pass
pub const DOTTED_UNITS: &[&str] = &["гр.", "мл.", "шт.", "ст. л.", "ч. л.", "кг.", "л."];

/// Navigation and metadata words that disqualify an ingredient line
pub const INGREDIENT_EXCLUSIONS: &[&str] = &[
    "время",
    "сложность",
    "рейтинг",
    "комментар",
    "автор",
    "кухня:",
    "главная",
    "салаты",
    "блюда",
    "паста с креветками",
];

/// Extra stoplist for the loose ingredient pass: years, seasons, review words
pub const REVIEW_STOPWORDS: &[&str] = &[
    "теги", "готов", "очень", "вкусн", "2022", "2023", "2024", "июл",
];

/// Rating, author and nutrition words that disqualify a step line
pub const STEP_EXCLUSIONS: &[&str] = &[
    "рейтинг",
    "комментар",
    "автор",
    "кухня",
    "время приготовления",
    "ккал",
    "калорий",
    "белк",
    "жир",
    "углевод",
];

/// Stems of cooking actions, matched case-insensitively as substrings
pub const COOKING_STEMS: &[&str] = &[
    // mixing and coating
    "смешив", "смеш", "перемеш", "взбив", "взбитый", "обвалив", "обваляв", "панируем",
    "обсыпаем",
    // heat
    "жар", "обжар", "поджар", "прожар", "зажар", "пар", "припуск", "тушим", "томим",
    // cooling
    "остужаем", "охлажд", "остыв", "остуд",
    // adding and seasoning
    "добав", "влив", "всыпаем", "кладём", "помещаем", "заправ", "приправ", "солим", "перчим",
    "посол",
    // preparing produce
    "наре", "нарезаем", "реж", "шинку", "измельч", "руб", "крош", "чист", "моем", "промыв",
    "сполосн", "очищ", "отдел", "разбир", "разлож", "раскладыв",
    // cooking processes
    "вар", "кипят", "довед", "провар", "отвар", "пек", "выпек", "запек", "подпек", "румян",
    "готов", "приготов", "сготов", "доготав", "растворяем", "соединяем", "залив", "заливк",
    "настаив", "выдерж", "маринуем", "настой",
    // finishing
    "подаём", "сервируем", "украш", "гарнир", "оформл", "нарез", "порцион", "разлив",
    "выкладыв", "выложить", "расстел", "полив", "сбрызг", "смаз", "покрыв",
    // misc
    "нагрев", "подогрев", "разогрев", "прогрев", "формиру", "лепим", "скатыв", "раскаты",
    "процеж", "просеив", "сит", "фильтр", "маринов", "засалив", "консерв", "взвеш", "отмер",
    "делим", "порциони",
];

/// "Name, 300 гр": descriptive text, comma, number, unit
pub static INGREDIENT_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[А-Яа-яЁё\s<>()]+,\s*\d+.*?(?:гр|мл|шт|ст\.|ч\.|кг|л|зубц|пуч)")
        .expect("Invalid ingredient shape regex")
});

/// A word followed somewhere later by a number
pub static WORD_THEN_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[А-Яа-яЁё]+.*?\d+").expect("Invalid word-number regex"));

/// Comment timestamps such as "12 июля"
pub static CALENDAR_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\d{2}\s+(?:января|февраля|марта|апреля|мая|июня|июля|августа|сентября|октября|ноября|декабря)",
    )
    .expect("Invalid calendar date regex")
});

/// ", 2" as in an amount following an ingredient name
pub static COMMA_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*\d+").expect("Invalid comma amount regex"));

/// Lowercase once, then test every word as a substring.
pub fn contains_any(lowercase_line: &str, words: &[&str]) -> bool {
    words.iter().any(|word| lowercase_line.contains(word))
}

/// Whether the line carries one of the ingredient unit tokens (case-sensitive).
pub fn has_unit(line: &str) -> bool {
    INGREDIENT_UNITS.iter().any(|unit| line.contains(unit))
}

/// Unit token plus ", <digit>": the line reads like an ingredient.
pub fn looks_like_ingredient(line: &str) -> bool {
    has_unit(line) && COMMA_AMOUNT.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_shape() {
        assert!(INGREDIENT_SHAPE.is_match("Картофель, 300 гр"));
        assert!(INGREDIENT_SHAPE.is_match("Масло сливочное (топлёное), 50 гр."));
        assert!(INGREDIENT_SHAPE.is_match("Чеснок, 2 зубца"));
        assert!(!INGREDIENT_SHAPE.is_match("300 гр картофеля"));
        assert!(!INGREDIENT_SHAPE.is_match("Potato, 300 g"));
    }

    #[test]
    fn test_calendar_date() {
        assert!(CALENDAR_DATE.is_match("Ирина, 12 июля 2023"));
        assert!(!CALENDAR_DATE.is_match("Сахар, 12 гр"));
    }

    #[test]
    fn test_looks_like_ingredient() {
        assert!(looks_like_ingredient("Мука, 200 гр"));
        assert!(!looks_like_ingredient("Мука 200 гр"));
        assert!(!looks_like_ingredient("Перемешайте, 2 раза"));
    }

    #[test]
    fn test_contains_any_expects_lowercase_input() {
        let line = "Автор рецепта".to_lowercase();
        assert!(contains_any(&line, INGREDIENT_EXCLUSIONS));
        assert!(!contains_any("картофель", INGREDIENT_EXCLUSIONS));
    }
}
