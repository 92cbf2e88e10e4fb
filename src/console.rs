use std::io::{BufRead, Write};

use rand::rngs::StdRng;
use tracing::{debug, info, instrument, warn};

use crate::config::{OutputFormat, VerifierConfig};
use crate::game::{deal_random_round, judge, parse_round_line, Hand, RoundOutcome, Verdict};
use crate::shared::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    Start,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Random,
    Manual,
    PlayAgain,
    Quit,
}

impl MenuChoice {
    /// Map a key to a choice valid for `menu`. Case-insensitive.
    pub fn from_key(key: char, menu: MenuKind) -> Option<Self> {
        match (menu, key.to_ascii_lowercase()) {
            (MenuKind::Start, 'r') => Some(MenuChoice::Random),
            (MenuKind::Start, 'm') => Some(MenuChoice::Manual),
            (MenuKind::End, 'p') => Some(MenuChoice::PlayAgain),
            (_, 'q') => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// Render the verdict line shown after a round, e.g. `Hand 2 wins with One Pair`.
pub fn render_outcome(outcome: &RoundOutcome) -> String {
    match outcome.verdict {
        Verdict::PlayerA => format!("Hand 1 wins with {}", outcome.category),
        Verdict::PlayerB => format!("Hand 2 wins with {}", outcome.category),
        Verdict::Tie => format!("Tie with {}", outcome.category),
    }
}

pub fn render_hands(first: &Hand, second: &Hand) -> String {
    format!(">Dealer {} {}", first, second)
}

/// Interactive session: menus on `input`, everything the player sees on `output`.
pub struct Console<R, W> {
    input: R,
    output: W,
    config: VerifierConfig,
    rng: StdRng,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, config: VerifierConfig) -> Self {
        let rng = config.rng();
        Self {
            input,
            output,
            config,
            rng,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run menus and rounds until the player quits or input ends.
    pub fn run(&mut self) -> Result<(), AppError> {
        self.display_title()?;

        loop {
            self.display_start_menu()?;
            let hands = match self.read_choice(MenuKind::Start)? {
                MenuChoice::Random => self.random_round()?,
                MenuChoice::Manual => match self.manual_round()? {
                    Some(hands) => hands,
                    None => break,
                },
                _ => break,
            };

            self.play_round(&hands.0, &hands.1)?;

            self.display_end_menu()?;
            match self.read_choice(MenuKind::End)? {
                MenuChoice::PlayAgain => writeln!(self.output, "\nPlay again")?,
                _ => break,
            }
        }

        writeln!(self.output, "\nQuit program")?;
        Ok(())
    }

    #[instrument(skip_all, fields(first = %first, second = %second))]
    fn play_round(&mut self, first: &Hand, second: &Hand) -> Result<RoundOutcome, AppError> {
        let outcome = judge(first, second);
        info!(
            verdict = %outcome.verdict,
            category = %outcome.category,
            "Round complete"
        );

        match self.config.output {
            OutputFormat::Text => writeln!(self.output, "{}", render_outcome(&outcome))?,
            OutputFormat::Json => writeln!(self.output, "{}", serde_json::to_string(&outcome)?)?,
        }
        Ok(outcome)
    }

    fn random_round(&mut self) -> Result<(Hand, Hand), AppError> {
        writeln!(self.output, "\nRandomly generate cards")?;
        let (first, second) = deal_random_round(&mut self.rng)?;
        writeln!(self.output, "{}", render_hands(&first, &second))?;
        Ok((first, second))
    }

    /// Prompt until a valid line arrives. `None` when input ends first.
    fn manual_round(&mut self) -> Result<Option<(Hand, Hand)>, AppError> {
        writeln!(self.output, "\nManually enter cards")?;
        loop {
            write!(self.output, ">Dealer ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_round_line(&line) {
                Ok(hands) => return Ok(Some(hands)),
                Err(e) => {
                    warn!(error = %e, "Rejected manual hand entry");
                    writeln!(self.output, "{}", e)?;
                }
            }
        }
    }

    /// Read until a key valid for `menu` arrives. End of input counts as quit.
    fn read_choice(&mut self, menu: MenuKind) -> Result<MenuChoice, AppError> {
        loop {
            let Some(line) = self.read_line()? else {
                debug!("Input closed, quitting");
                return Ok(MenuChoice::Quit);
            };

            let key = line.trim();
            let mut chars = key.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                if let Some(choice) = MenuChoice::from_key(c, menu) {
                    return Ok(choice);
                }
            }

            writeln!(
                self.output,
                "\n{} is not valid. Please enter a valid character: ",
                key
            )?;
        }
    }

    fn read_line(&mut self) -> Result<Option<String>, AppError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn display_title(&mut self) -> Result<(), AppError> {
        writeln!(self.output, "-----------------------------------")?;
        writeln!(self.output, "Welcome to the Poker Hand Verifier!")?;
        writeln!(self.output, "-----------------------------------")?;
        writeln!(
            self.output,
            "This program simulates two poker hands and verifies the winner."
        )?;
        Ok(())
    }

    fn display_start_menu(&mut self) -> Result<(), AppError> {
        writeln!(self.output, "\nPlease enter one of the following keys:")?;
        writeln!(self.output, "- Randomly generate cards: R or r")?;
        writeln!(self.output, "- Manually enter cards: M or m")?;
        writeln!(self.output, "- Quit program: Q or q")?;
        Ok(())
    }

    fn display_end_menu(&mut self) -> Result<(), AppError> {
        writeln!(self.output, "\nPlease enter one of the following keys:")?;
        writeln!(self.output, "- Play again: P or p")?;
        writeln!(self.output, "- Quit program: Q or q")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Category;
    use rstest::rstest;

    #[rstest]
    #[case('r', MenuKind::Start, Some(MenuChoice::Random))]
    #[case('M', MenuKind::Start, Some(MenuChoice::Manual))]
    #[case('Q', MenuKind::Start, Some(MenuChoice::Quit))]
    #[case('p', MenuKind::Start, None)]
    #[case('P', MenuKind::End, Some(MenuChoice::PlayAgain))]
    #[case('q', MenuKind::End, Some(MenuChoice::Quit))]
    #[case('r', MenuKind::End, None)]
    #[case('x', MenuKind::Start, None)]
    fn test_menu_choice_from_key(
        #[case] key: char,
        #[case] menu: MenuKind,
        #[case] expected: Option<MenuChoice>,
    ) {
        assert_eq!(MenuChoice::from_key(key, menu), expected);
    }

    #[test]
    fn test_render_outcome() {
        let first = Hand::from_string("2C2D5H9SKC").unwrap();
        let second = Hand::from_string("3C3D4H9SKD").unwrap();

        let outcome = judge(&first, &second);
        assert_eq!(render_outcome(&outcome), "Hand 2 wins with One Pair");

        let outcome = judge(&second, &first);
        assert_eq!(render_outcome(&outcome), "Hand 1 wins with One Pair");

        let tied = judge(&first, &first);
        assert_eq!(tied.category, Category::OnePair);
        assert_eq!(render_outcome(&tied), "Tie with One Pair");
    }

    #[test]
    fn test_render_hands() {
        let first = Hand::from_string("2C2D5H9SKC").unwrap();
        let second = Hand::from_string("3C3D4H9SKD").unwrap();
        assert_eq!(
            render_hands(&first, &second),
            ">Dealer 2C2D5H9SKC 3C3D4H9SKD"
        );
    }
}
