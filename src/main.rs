use std::io::{self, BufRead, Write};

use floodgrid::config::GameConfig;
use floodgrid::console::Console;
use floodgrid::shell::Shell;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    let mut shell = Shell::new(config)?;
    let mut console = Console::new(200);
    console.add_output(&shell.current_grid().to_string());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    flush_console(&mut console, &mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(stdout, "{}", console.prompt())?;
            stdout.flush()?;
            continue;
        }

        console.add_command(line.trim());
        match shell.execute_line(&line) {
            Ok(reply) => {
                if !reply.output.is_empty() {
                    console.add_output(&reply.output);
                }
                if reply.quit {
                    flush_console(&mut console, &mut stdout)?;
                    break;
                }
            }
            Err(err) => console.add_error(&err.to_string()),
        }
        flush_console(&mut console, &mut stdout)?;
    }

    writeln!(stdout)?;
    Ok(())
}

fn flush_console(console: &mut Console, out: &mut impl Write) -> io::Result<()> {
    for line in console.take_unread() {
        writeln!(out, "{}", line)?;
    }
    write!(out, "{}", console.prompt())?;
    out.flush()
}
