//! Column-name to title conversion.

/// Turn a raw column name into a display title.
///
/// Underscores become spaces, camelCase boundaries are split and each word is
/// capitalized: `amount_spent` -> `Amount Spent`, `adImpressions` ->
/// `Ad Impressions`.
///
/// A capital is split off only after a lowercase letter or digit, or when it
/// starts a new word after an uppercase run. Acronyms therefore stay whole
/// (`GDPGrowth` -> `GDP Growth`, `userID` -> `User ID`) instead of becoming one
/// letter per word, and runs of whitespace collapse to a single space.
pub fn humanize(name: &str) -> String {
    let chars: Vec<char> = name
        .chars()
        .map(|c| if c == '_' { ' ' } else { c })
        .collect();

    let mut spaced = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let starts_word = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if starts_word {
                spaced.push(' ');
            }
        }
        spaced.push(c);
    }

    spaced
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
