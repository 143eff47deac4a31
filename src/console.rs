use std::collections::VecDeque;

/// Scrollback for the text shell.
pub struct Console {
    lines: VecDeque<String>,
    max_lines: usize,
    unread: usize,
    prompt: String,
}

impl Console {
    pub fn new(max_lines: usize) -> Self {
        let mut console = Self {
            lines: VecDeque::new(),
            max_lines,
            unread: 0,
            prompt: "flood> ".to_string(),
        };

        console.add_line("floodgrid".to_string());
        console.add_line("Pick a color, then fill regions of the board".to_string());
        console.add_line("Type 'help' for the list of commands".to_string());
        console.add_line("".to_string());

        console
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn add_line(&mut self, line: String) {
        self.lines.push_back(line);
        self.unread += 1;
        while self.lines.len() > self.max_lines {
            self.lines.pop_front();
        }
        self.unread = self.unread.min(self.lines.len());
    }

    pub fn add_output(&mut self, output: &str) {
        for line in output.lines() {
            self.add_line(line.to_string());
        }
    }

    pub fn add_error(&mut self, error: &str) {
        self.add_line(format!("Error: {}", error));
    }

    pub fn add_command(&mut self, command: &str) {
        self.add_line(format!("{}{}", self.prompt, command));
    }

    /// Lines added since the previous call.
    pub fn take_unread(&mut self) -> Vec<String> {
        let start_index = self.lines.len() - self.unread;
        self.unread = 0;
        self.lines.iter().skip(start_index).cloned().collect()
    }
}
