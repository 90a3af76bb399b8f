use std::io::{self, BufRead, Write};

/// Line-oriented terminal: prompts on `output`, reads answers from `input`.
///
/// Once `input` is exhausted every prompt answers with an empty line and
/// `at_eof` turns true, so menus can wind down instead of spinning.
pub struct Console<R, W> {
    input: R,
    output: W,
    eof: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            eof: false,
        }
    }

    /// Print `message` without a newline and read one trimmed line
    pub fn prompt(&mut self, message: &str) -> io::Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.eof = true;
            writeln!(self.output)?;
        }

        Ok(line.trim().to_string())
    }

    pub fn print(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text)
    }

    pub fn println(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    pub fn at_eof(&self) -> bool {
        self.eof
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompts_and_trims() {
        let mut console = Console::new(Cursor::new("  Perú \n"), Vec::new());
        assert_eq!(console.prompt("Name: ").unwrap(), "Perú");
        assert!(!console.at_eof());

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "Name: ");
    }

    #[test]
    fn exhausted_input_reads_empty() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        assert_eq!(console.prompt("Option: ").unwrap(), "");
        assert!(console.at_eof());
    }
}
