//! Menu loop over a line-based terminal
//!
//! Input and output are generic so the loop can be scripted in tests.
//! End of input is treated as a request to exit.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use crossterm::style::Color;

use crate::config::AppConfig;
use crate::journal::Journal;
use crate::render;
use crate::session::menu::MenuOption;
use crate::session::state::Session;

const HEADER: &str = concat!(
    "========================================================\n",
    " *  Shape Drawer ASCII Console  *\n",
    "========================================================\n",
    " Draw colourful ASCII shapes, store them, load them,\n",
    " and enjoy a simple, cross-platform CLI demo.\n",
    "\n",
);

/// Console presentation options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleOptions {
    pub colour: bool,
    pub clear_screen: bool,
    pub pause_after_action: bool,
}

impl From<&AppConfig> for ConsoleOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            colour: config.colour,
            clear_screen: config.clear_screen,
            pause_after_action: config.pause_after_action,
        }
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
    options: ConsoleOptions,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, options: ConsoleOptions) -> Self {
        Self {
            input,
            output,
            options,
        }
    }

    /// Run the menu until the user exits or input ends
    pub fn run<J: Journal>(&mut self, session: &mut Session<J>) -> Result<()> {
        loop {
            if self.options.clear_screen {
                render::clear_screen(&mut self.output)?;
            }
            self.print_header()?;
            self.print_menu()?;
            let Some(line) = self.prompt("Choose an option > ")? else {
                log::debug!("Input closed, leaving menu");
                self.say("\nExiting... Goodbye!\n")?;
                return Ok(());
            };

            match MenuOption::parse(&line) {
                Some(MenuOption::Draw) => self.draw(session)?,
                Some(MenuOption::List) => self.list(session)?,
                Some(MenuOption::Save) => self.save(session)?,
                Some(MenuOption::Load) => self.load(session)?,
                Some(MenuOption::Exit) => {
                    self.say("\nExiting... Goodbye!\n")?;
                    return Ok(());
                }
                None => self.say("Invalid choice.\n")?,
            }
            self.wait_for_key()?;
        }
    }

    fn draw<J: Journal>(&mut self, session: &mut Session<J>) -> Result<()> {
        let selector = self
            .prompt("\nChoose figure (1-Circle, 2-Square, 3-Triangle): ")?
            .unwrap_or_default();
        match session.draw(&selector) {
            Ok(shape) => render::draw(&mut self.output, shape, self.options.colour)?,
            Err(err) => {
                self.error(&err)?;
                session.journal_mut().record(&format!("Draw error: {}", err));
            }
        }
        Ok(())
    }

    fn list<J: Journal>(&mut self, session: &Session<J>) -> Result<()> {
        self.say("\n")?;
        if session.shapes().is_empty() {
            self.paint(Color::Magenta, "No shapes yet.")?;
            return self.say("\n");
        }
        for &shape in session.shapes() {
            render::draw(&mut self.output, shape, self.options.colour)?;
            self.say("\n")?;
        }
        Ok(())
    }

    fn save<J: Journal>(&mut self, session: &mut Session<J>) -> Result<()> {
        match session.save() {
            Ok(_) => {
                self.paint(Color::Green, "Saved successfully.")?;
                self.say("\n")?;
            }
            Err(err) => {
                self.error(&err)?;
                session.journal_mut().record(&format!("Save error: {}", err));
            }
        }
        Ok(())
    }

    fn load<J: Journal>(&mut self, session: &mut Session<J>) -> Result<()> {
        match session.load() {
            Ok(_) => {
                self.paint(Color::Green, "Loaded successfully.")?;
                self.say("\n")?;
            }
            Err(err) => {
                self.error(&err)?;
                session.journal_mut().record(&format!("Load error: {}", err));
            }
        }
        Ok(())
    }

    fn print_header(&mut self) -> Result<()> {
        self.paint(Color::Green, HEADER)
    }

    fn print_menu(&mut self) -> Result<()> {
        let mut menu = String::from("******************* MENU *******************\n");
        for option in MenuOption::ALL {
            menu.push_str(&format!(" {}  {}\n", option.key(), option.label()));
        }
        menu.push_str("*********************************************\n");
        self.paint(Color::Yellow, &menu)
    }

    fn wait_for_key(&mut self) -> Result<()> {
        if self.options.pause_after_action {
            self.prompt("\nPress <Enter> to return to menu...")?;
        }
        Ok(())
    }

    /// Show `text`, then read one line. `None` means input has ended.
    ///
    /// Bytes that are not UTF-8 are replaced, so they reach the menu as an
    /// unrecognised choice.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        self.say(text)?;
        self.output.flush().context("Failed to flush console output")?;
        let mut line = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut line)
            .context("Failed to read console input")?;
        Ok((read > 0).then(|| String::from_utf8_lossy(&line).into_owned()))
    }

    fn error(&mut self, err: &dyn std::error::Error) -> Result<()> {
        self.paint(Color::Red, &format!("Error: {}", err))?;
        self.say("\n")
    }

    fn paint(&mut self, color: Color, text: &str) -> Result<()> {
        render::paint(&mut self.output, color, text, self.options.colour)
            .context("Failed to write console output")
    }

    fn say(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .context("Failed to write console output")
    }
}
