use regex::Regex;

/// Returns the first vocabulary entry that occurs as a substring of the query.
///
/// The scan is a linear pass over the vocabulary in catalog first-seen order,
/// and that order is the tie-break: when several company names are substrings
/// of the query (or of each other), the earliest vocabulary entry wins.
/// Changing the vocabulary order changes matching results. No fuzzy matching;
/// the name must literally appear in the query.
pub fn extract_company(query: &str, companies: &[String]) -> Option<String> {
    let lowered = query.to_lowercase();
    companies
        .iter()
        .find(|company| lowered.contains(company.as_str()))
        .cloned()
}

/// Scans the query left-to-right for numeric tokens and splits them by kind.
///
/// Tokens containing a decimal point are fractional values (candidate ratings),
/// the rest integer values (candidate prices). Order of appearance is preserved
/// within each output. Tokens the pattern accepts but `parse` rejects (for
/// example integers beyond i64) are skipped, not errors. There is no unit or
/// currency awareness: "20k" yields 20.
pub fn extract_numbers(query: &str) -> (Vec<i64>, Vec<f64>) {
    let re = Regex::new(r"\d+\.?\d*").unwrap();

    let mut integers = Vec::new();
    let mut floats = Vec::new();

    for token in re.find_iter(query) {
        let token = token.as_str();
        if token.contains('.') {
            if let Ok(value) = token.parse::<f64>() {
                floats.push(value);
            }
        } else if let Ok(value) = token.parse::<i64>() {
            integers.push(value);
        }
    }

    (integers, floats)
}
