use std::error::Error;

use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::Files;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use yardspan::Spand;

pub trait Report {
    fn diagnose(&self) -> Diagnostic<()>;

    fn report<'a, F>(&self, file: &'a F)
    where
        F: Files<'a, FileId = ()>,
    {
        let writer = StandardStream::stderr(ColorChoice::Always);
        let config = codespan_reporting::term::Config::default();

        let report = self.diagnose();
        let mut writer = writer.lock();
        let _ = term::emit(&mut writer, &config, file, &report);
    }
}

impl<T: Error> Report for Spand<T> {
    fn diagnose(&self) -> Diagnostic<()> {
        Diagnostic::error()
            .with_message(&self.kind)
            .with_label(Label::primary((), self.span))
    }
}

impl Report for yardc::Error {
    fn diagnose(&self) -> Diagnostic<()> {
        match self {
            Self::Lex(err) => err.diagnose(),
            Self::Eval(err) => err.diagnose(),
            Self::Parse(err) => err.diagnose(),
        }
    }
}
