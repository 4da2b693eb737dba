use std::io::Read;
use std::process::ExitCode;

use codespan_reporting::files::SimpleFile;

use crate::cli::Cli;
use crate::editor::{Editor, EditorRead};
use crate::report::Report;

/// Exit status for malformed input, the conventional data format
/// error code.
const EX_DATAERR: u8 = 65;

pub struct Driver {
    file: Option<SimpleFile<String, String>>,
    use_ast: bool,
    quiet: bool,
}

impl Default for Driver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver {
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(<Cli as clap::Parser>::parse())
    }

    fn read_stdin() -> String {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .expect("Should read input from stdin");
        input
    }

    #[must_use]
    fn from_config(cfg: Cli) -> Self {
        let file = if cfg.stdin {
            Some(SimpleFile::new("<stdin>".to_string(), Self::read_stdin()))
        } else {
            cfg.file.map(|path| {
                let source = std::fs::read_to_string(&path).expect("Should be valid file path");
                SimpleFile::new(path.display().to_string(), source)
            })
        };

        Self {
            file,
            use_ast: cfg.ast,
            quiet: cfg.quiet,
        }
    }

    pub fn run(mut self) -> ExitCode {
        match self.file.take() {
            Some(file) => self.eval_source(&file),
            None => match self.repl() {
                Ok(()) => ExitCode::SUCCESS,
                Err(_) => ExitCode::FAILURE,
            },
        }
    }

    fn eval_line(&self, line: &str) -> Result<f64, yardc::Error> {
        if self.use_ast {
            yardc::eval_line_ast(line)
        } else {
            yardc::eval_line(line)
        }
    }

    /// One expression per line; the first bad line stops the run.
    fn eval_source(&self, file: &SimpleFile<String, String>) -> ExitCode {
        for (index, line) in file.source().lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            match self.eval_line(line) {
                Ok(value) => println!("{value:.2}"),
                Err(err) => {
                    // Spans are relative to the line the core saw, so
                    // diagnose against that line, not the whole file.
                    let name = format!("{}:{}", file.name(), index + 1);
                    let line = SimpleFile::new(name, line.to_string());
                    self.report_error(&err, &line);
                    return ExitCode::from(EX_DATAERR);
                }
            }
        }

        ExitCode::SUCCESS
    }

    fn report_error(&self, err: &yardc::Error, file: &SimpleFile<String, String>) {
        if !self.quiet {
            err.report(file);
        }
    }

    fn repl(&self) -> std::io::Result<()> {
        let mut editor = Editor::default();

        loop {
            let input = match editor.read()? {
                EditorRead::Read(input) => input,
                EditorRead::Break => break,
                EditorRead::Continue => continue,
            };

            match self.eval_line(&input) {
                Ok(value) => println!("{value:.2}"),
                Err(err) => {
                    let file = SimpleFile::new("<repl>".to_string(), input);
                    self.report_error(&err, &file);
                }
            }
        }

        Ok(())
    }
}
