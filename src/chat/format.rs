/// Capitalizes the first letter of every word and lowercases the rest. A
/// word starts after any character that is not a letter, so "ac/dc" becomes
/// "Ac/Dc" and "2pac" becomes "2Pac".
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
