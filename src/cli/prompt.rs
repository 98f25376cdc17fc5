use std::io::{self, BufRead, Write};

use crate::{
    pipeline::{FallbackChoice, KeywordPrompt, fallback::EXIT_SENTINEL},
    warning,
};

/// [`KeywordPrompt`] reading answers from standard input.
///
/// End of input counts as giving up.
pub struct ConsolePrompt<R: BufRead> {
    input: R,
}

impl ConsolePrompt<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self {
            input: io::stdin().lock(),
        }
    }
}

impl<R: BufRead> ConsolePrompt<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    fn ask(&mut self, question: &str) -> Option<String> {
        print!("{}", question);
        let _ = io::stdout().flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

impl<R: BufRead> KeywordPrompt for ConsolePrompt<R> {
    fn offer_keyword_search(&mut self) -> FallbackChoice {
        println!("Do you want to try a keyword search?");
        loop {
            match self
                .ask("1: enter new search parameters, 2: exit program: ")
                .as_deref()
            {
                Some("1") => return FallbackChoice::Keywords,
                Some("2") | None => return FallbackChoice::Exit,
                Some(other) => warning!("'{}' is not an option.", other),
            }
        }
    }

    fn next_keywords(&mut self, attempt: usize) -> Option<String> {
        if attempt > 0 {
            warning!("No results found. Try a new search or enter {} to exit.", EXIT_SENTINEL);
        }
        self.ask("Enter new search keywords: ")
    }
}
