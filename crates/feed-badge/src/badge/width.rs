//! Text width estimation for Verdana at 11px, the badge font.

/// Advance widths in pixels for ASCII 0x20 (space) through 0x7E (`~`).
const VERDANA_11: [f32; 95] = [
    3.87, 4.33, 5.05, 9.00, 6.99, 11.84, 7.99, 2.95, // space ! " # $ % & '
    4.99, 4.99, 6.99, 9.00, 4.00, 4.99, 4.00, 4.99, // ( ) * + , - . /
    6.99, 6.99, 6.99, 6.99, 6.99, 6.99, 6.99, 6.99, // 0-7
    6.99, 6.99, 4.99, 4.99, 9.00, 9.00, 9.00, 6.00, // 8 9 : ; < = > ?
    11.00, 7.52, 7.54, 7.68, 8.48, 6.96, 6.32, 8.53, // @ A-G
    8.27, 4.61, 5.00, 7.62, 6.12, 9.27, 8.23, 8.66, // H-O
    6.63, 8.66, 7.65, 7.52, 6.78, 8.05, 7.52, 10.88, // P-W
    7.54, 6.77, 7.54, 4.99, 4.99, 4.99, 9.00, 6.99, // X Y Z [ \ ] ^ _
    6.99, 6.61, 6.85, 5.73, 6.85, 6.55, 3.87, 6.85, // ` a-g
    6.96, 3.02, 3.79, 6.51, 3.02, 10.71, 6.96, 6.68, // h-o
    6.85, 6.85, 4.69, 5.73, 4.33, 6.96, 6.51, 8.99, // p-w
    6.51, 6.51, 5.78, 6.98, 4.99, 6.98, 9.00, // x y z { | } ~
];

/// Width used for characters outside the table.
const FALLBACK_WIDTH: f32 = 8.0;

pub fn text_width(text: &str) -> f32 {
    text.chars().map(char_width).sum()
}

fn char_width(c: char) -> f32 {
    match c {
        ' '..='~' => VERDANA_11[(c as usize) - 0x20],
        c if c.is_control() => 0.0,
        _ => FALLBACK_WIDTH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert_eq!(text_width(""), 0.0);
    }

    #[test]
    fn test_table_lookup() {
        assert_eq!(char_width(' '), 3.87);
        assert_eq!(char_width('0'), 6.99);
        assert_eq!(char_width('W'), 10.88);
        assert_eq!(char_width('~'), 9.00);
    }

    #[test]
    fn test_wide_and_narrow_text() {
        assert!(text_width("WWW") > text_width("iii"));
        assert_eq!(text_width("é"), FALLBACK_WIDTH);
    }
}
