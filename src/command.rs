use crate::cell::{Cell, ColorError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    #[error("Unexpected character '{0}' at column {1}")]
    UnexpectedCharacter(char, usize),
    #[error("Invalid number '{0}' at column {1}")]
    InvalidNumber(String, usize),
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("'{command}' expects {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("Unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("Cell index must be a whole number, got {0}")]
    NotAnIndex(f64),
    #[error(transparent)]
    Color(#[from] ColorError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Fill { row: usize, column: usize },
    Click { x: f64, y: f64 },
    Color(Cell),
    Undo,
    Restart,
    Show,
    History,
    Region { row: usize, column: usize },
    Dump,
    Palette,
    Help,
    Quit,
}

impl Command {
    pub const USAGE: &'static [&'static str] = &[
        "fill <row> <col>     paint the region at a cell",
        "click <x> <y>        paint the region under a pointer position",
        "color <name>         select the paint color",
        "undo                 step back one move",
        "restart              start over with an empty board",
        "show                 print the board",
        "history              print the number of snapshots",
        "region <row> <col>   list the cells connected to a cell",
        "dump                 print the board as JSON",
        "palette              list the colors",
        "help                 show this list",
        "quit                 leave",
    ];
}

#[derive(Debug, Clone, PartialEq)]
enum TokenType {
    Number(f64),
    Word(String),
    Semicolon,
    Eof,
}

#[derive(Debug, Clone)]
struct Token {
    token_type: TokenType,
    column: usize,
}

struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn tokenize(&mut self) -> Result<Vec<Token>, CommandError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();
            let column = self.position + 1;
            if self.is_at_end() {
                tokens.push(Token { token_type: TokenType::Eof, column });
                return Ok(tokens);
            }

            let c = self.advance();
            let token_type = match c {
                ';' => TokenType::Semicolon,
                '-' if self.peek().is_ascii_digit() || self.peek() == '.' => {
                    self.read_number(c, column)?
                }
                c if c.is_ascii_digit() || c == '.' => self.read_number(c, column)?,
                c if c.is_alphabetic() => TokenType::Word(self.read_word(c)),
                _ => return Err(CommandError::UnexpectedCharacter(c, column)),
            };
            tokens.push(Token { token_type, column });
        }
    }

    fn advance(&mut self) -> char {
        let c = self.input[self.position];
        self.position += 1;
        c
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.input[self.position]
        }
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && self.peek().is_whitespace() {
            self.advance();
        }
    }

    fn read_number(&mut self, first: char, column: usize) -> Result<TokenType, CommandError> {
        let mut text = String::new();
        text.push(first);

        while !self.is_at_end() && (self.peek().is_ascii_digit() || self.peek() == '.') {
            text.push(self.advance());
        }

        text.parse()
            .map(TokenType::Number)
            .map_err(|_| CommandError::InvalidNumber(text, column))
    }

    fn read_word(&mut self, first: char) -> String {
        let mut word = String::new();
        word.push(first);

        while !self.is_at_end() && (self.peek().is_alphanumeric() || self.peek() == '_') {
            word.push(self.advance());
        }

        word.to_lowercase()
    }
}

struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, current: 0 }
    }

    fn parse(&mut self) -> Result<Vec<Command>, CommandError> {
        let mut commands = Vec::new();

        while !self.is_at_end() {
            if self.check_semicolon() {
                self.advance();
                continue;
            }
            commands.push(self.command()?);

            // Every command must be followed by ';' or the end of the line
            if !self.is_at_end() && !self.check_semicolon() {
                return Err(CommandError::UnexpectedArgument(self.describe_current()));
            }
        }

        Ok(commands)
    }

    fn command(&mut self) -> Result<Command, CommandError> {
        let name = match self.advance().token_type {
            TokenType::Word(word) => word,
            TokenType::Number(n) => return Err(CommandError::UnknownCommand(n.to_string())),
            // parse() never calls us on ';' or EOF
            _ => return Err(CommandError::UnknownCommand(String::new())),
        };

        match name.as_str() {
            "fill" => {
                let row = self.index("fill", "a row and a column")?;
                let column = self.index("fill", "a row and a column")?;
                Ok(Command::Fill { row, column })
            }
            "click" => {
                let x = self.number("click", "an x and a y position")?;
                let y = self.number("click", "an x and a y position")?;
                Ok(Command::Click { x, y })
            }
            "color" | "colour" => {
                let word = self.word("color", "a color name")?;
                Ok(Command::Color(word.parse()?))
            }
            "region" => {
                let row = self.index("region", "a row and a column")?;
                let column = self.index("region", "a row and a column")?;
                Ok(Command::Region { row, column })
            }
            "undo" => Ok(Command::Undo),
            "restart" => Ok(Command::Restart),
            "show" => Ok(Command::Show),
            "history" => Ok(Command::History),
            "dump" => Ok(Command::Dump),
            "palette" => Ok(Command::Palette),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::UnknownCommand(name)),
        }
    }

    fn number(&mut self, command: &'static str, argument: &'static str) -> Result<f64, CommandError> {
        let n = match self.peek().token_type {
            TokenType::Number(n) => n,
            _ => return Err(CommandError::MissingArgument { command, argument }),
        };
        self.advance();
        Ok(n)
    }

    fn index(&mut self, command: &'static str, argument: &'static str) -> Result<usize, CommandError> {
        let n = self.number(command, argument)?;
        if n < 0.0 || n.fract() != 0.0 {
            return Err(CommandError::NotAnIndex(n));
        }
        Ok(n as usize)
    }

    fn word(&mut self, command: &'static str, argument: &'static str) -> Result<String, CommandError> {
        match &self.peek().token_type {
            TokenType::Word(word) => {
                let word = word.clone();
                self.advance();
                Ok(word)
            }
            _ => Err(CommandError::MissingArgument { command, argument }),
        }
    }

    fn describe_current(&self) -> String {
        match &self.peek().token_type {
            TokenType::Number(n) => n.to_string(),
            TokenType::Word(word) => word.clone(),
            TokenType::Semicolon => ";".to_string(),
            TokenType::Eof => String::new(),
        }
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.current].clone();
        if !self.is_at_end() {
            self.current += 1;
        }
        token
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn check_semicolon(&self) -> bool {
        self.peek().token_type == TokenType::Semicolon
    }

    fn is_at_end(&self) -> bool {
        self.peek().token_type == TokenType::Eof
    }
}

/// Parses one console line into the commands it contains, in order.
pub fn parse_line(input: &str) -> Result<Vec<Command>, CommandError> {
    let tokens = Lexer::new(input).tokenize()?;
    Parser::new(tokens).parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_fill_and_color() {
        assert_eq!(
            parse_line("color Blue; fill 1 2").unwrap(),
            vec![Command::Color(Cell::Blue), Command::Fill { row: 1, column: 2 }]
        );
    }

    #[test]
    fn parses_click_with_fractions_and_negatives() {
        assert_eq!(
            parse_line("click -4 150.5").unwrap(),
            vec![Command::Click { x: -4.0, y: 150.5 }]
        );
    }

    #[test]
    fn empty_line_has_no_commands() {
        assert_eq!(parse_line("   ").unwrap(), vec![]);
        assert_eq!(parse_line(";;").unwrap(), vec![]);
    }

    #[test]
    fn rejects_missing_arguments() {
        assert_eq!(
            parse_line("fill 1"),
            Err(CommandError::MissingArgument {
                command: "fill",
                argument: "a row and a column",
            })
        );
    }

    #[test]
    fn rejects_trailing_arguments() {
        assert_eq!(
            parse_line("undo 3"),
            Err(CommandError::UnexpectedArgument("3".to_string()))
        );
    }

    #[test]
    fn rejects_fractional_index() {
        assert_eq!(parse_line("fill 1.5 0"), Err(CommandError::NotAnIndex(1.5)));
    }

    #[test]
    fn rejects_unknown_command_and_color() {
        assert_eq!(
            parse_line("rotate"),
            Err(CommandError::UnknownCommand("rotate".to_string()))
        );
        assert!(matches!(
            parse_line("color teal"),
            Err(CommandError::Color(ColorError::UnknownColor(_)))
        ));
    }

    #[test]
    fn rejects_stray_characters() {
        assert_eq!(
            parse_line("fill 1 # 2"),
            Err(CommandError::UnexpectedCharacter('#', 8))
        );
    }

    #[test]
    fn rejects_malformed_number() {
        assert_eq!(
            parse_line("click 1.2.3 0"),
            Err(CommandError::InvalidNumber("1.2.3".to_string(), 7))
        );
    }
}
