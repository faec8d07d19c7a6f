//! Discrete input tokens delivered by the UI boundary.

/// A single keypad unit: literal input appended to the expression, or one
/// of the editing/evaluation commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Digit, decimal point, operator, or parenthesis, appended verbatim.
    Input(&'static str),
    /// Reset the expression.
    Clear,
    /// Remove the last character.
    Backspace,
    /// Submit the expression for evaluation.
    Evaluate,
}

impl Token {
    /// Map a typed character to its token, if it belongs to the keypad.
    pub fn from_char(c: char) -> Option<Self> {
        let input = match c {
            '0' => "0",
            '1' => "1",
            '2' => "2",
            '3' => "3",
            '4' => "4",
            '5' => "5",
            '6' => "6",
            '7' => "7",
            '8' => "8",
            '9' => "9",
            '.' => ".",
            '+' => "+",
            '-' => "-",
            '*' => "*",
            '/' => "/",
            '(' => "(",
            ')' => ")",
            'c' | 'C' => return Some(Token::Clear),
            '=' => return Some(Token::Evaluate),
            _ => return None,
        };
        Some(Token::Input(input))
    }

    /// Label shown on the keypad cell.
    pub fn label(&self) -> &'static str {
        match self {
            Token::Input(s) => s,
            Token::Clear => "C",
            Token::Backspace => "⌫",
            Token::Evaluate => "=",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_input() {
        assert_eq!(Token::from_char('7'), Some(Token::Input("7")));
        assert_eq!(Token::from_char('0'), Some(Token::Input("0")));
    }

    #[test]
    fn commands_map_to_their_tokens() {
        assert_eq!(Token::from_char('c'), Some(Token::Clear));
        assert_eq!(Token::from_char('C'), Some(Token::Clear));
        assert_eq!(Token::from_char('='), Some(Token::Evaluate));
    }

    #[test]
    fn unrelated_characters_map_to_nothing() {
        assert_eq!(Token::from_char('q'), None);
        assert_eq!(Token::from_char(' '), None);
        assert_eq!(Token::from_char('%'), None);
    }

    #[test]
    fn labels_match_input_text() {
        assert_eq!(Token::Input("+").label(), "+");
        assert_eq!(Token::Backspace.label(), "⌫");
    }
}
