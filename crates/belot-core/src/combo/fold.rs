/// Lower-case `text` and strip Romanian diacritics so that `Tărț`, `tart`
/// and `TART` compare equal.
pub fn fold_text(text: &str) -> String {
    text.to_lowercase().chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    match c {
        'ă' | 'â' => 'a',
        'î' => 'i',
        // comma-below and legacy cedilla forms both occur in the wild
        'ș' | 'ş' => 's',
        'ț' | 'ţ' => 't',
        other => other,
    }
}
