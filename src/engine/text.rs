// ==========================================
// QR Roster - text utilities
// ==========================================

/// Strip every character that is not an ASCII digit.
///
/// Empty input yields an empty string; there are no error cases.
pub fn only_digits(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Left-pad `s` to `len` with `ch`.
///
/// Input already at or beyond `len` is returned unchanged; this never
/// truncates.
pub fn pad_left(s: &str, len: usize, ch: char) -> String {
    let current = s.chars().count();
    if current >= len {
        return s.to_string();
    }
    let mut out = String::with_capacity(len);
    for _ in current..len {
        out.push(ch);
    }
    out.push_str(s);
    out
}
