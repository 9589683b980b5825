pub const SYMBOLS: [char; 6] = ['+', '-', '*', '/', '×', '÷'];
pub const DIGITS: [char; 11] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.'];

/// Whether a line consists only of characters the calculator buttons could
/// produce.
pub fn is_key_input(line: &str) -> bool {
    !line.is_empty()
        && line
            .chars()
            .all(|c| SYMBOLS.contains(&c) || DIGITS.contains(&c) || c.is_whitespace())
}

pub fn clear() {
    print!("{esc}[2J{esc}[1;1H", esc = 27 as char);
}
