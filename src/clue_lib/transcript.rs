/*!
Transcripts of a game, one directive per line.

```text
# The roster, optional, and before any event.
players sc mu wh gr pe pl
casefile cf
suspects mu pl gr pe sc wh
weapons kn ca re ro pi wr
rooms ha lo di ki ba co bi li st

# Events.
hand sc wh li st
suggest sc sc ro lo mu sc      # suggester, three cards, refuter or -, shown card or -
suggest pl pe pi ba - -
accuse sc pe pi bi true

# A request for a notepad, at this point of the game.
notepad
```

Text following a `#` is a comment.
Any part of the roster which is not given is the [default](crate::config::Roster::default).

```rust
# use clue_lib::transcript::Transcript;
let transcript = Transcript::parse("
hand sc wh li st
suggest pl pe pi ba - -
notepad
").unwrap();

let mut reasoner = transcript.reasoner().unwrap();
let notepads = transcript.replay(&mut reasoner).unwrap();
assert_eq!(notepads.len(), 1);
```
*/

use std::path::Path;

use crate::{
    config::Config,
    misc::log::targets::{self},
    oracle::Oracle,
    reasoner::{Accusation, Event, Reasoner, Suggestion},
    reports::Snapshot,
    types::err::{self},
};

/// A step of a transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Some event of the game.
    Event(Event),

    /// A request for a notepad.
    Notepad,
}

/// A parsed transcript.
#[derive(Clone, Debug)]
pub struct Transcript {
    /// The configuration of the game, with the roster of the transcript.
    pub config: Config,

    /// Each step, paired with the line of the step.
    pub steps: Vec<(usize, Step)>,
}

impl Transcript {
    /// Parses a transcript, with the default configuration as a base.
    pub fn parse(source: &str) -> Result<Self, err::ErrorKind> {
        Self::parse_with(source, Config::default())
    }

    /// Parses a transcript, revising the roster of the given configuration.
    pub fn parse_with(source: &str, mut config: Config) -> Result<Self, err::ErrorKind> {
        let mut steps = Vec::default();

        for (index, line) in source.lines().enumerate() {
            let line_number = index + 1;
            let content = match line.split_once('#') {
                Some((content, _comment)) => content,
                None => line,
            };

            let mut tokens = content.split_whitespace();
            let Some(directive) = tokens.next() else {
                continue;
            };
            let arguments = tokens.collect::<Vec<_>>();

            let owned = |names: &[&str]| names.iter().map(|name| name.to_string()).collect::<Vec<_>>();

            match directive {
                "players" | "suspects" | "weapons" | "rooms" | "casefile" => {
                    if !steps.is_empty() {
                        return Err(err::TranscriptError::MisplacedRoster(line_number).into());
                    }
                    if arguments.is_empty() || (directive == "casefile" && arguments.len() != 1) {
                        return Err(err::TranscriptError::ArgumentCount(line_number).into());
                    }
                    let roster = &mut config.roster;
                    match directive {
                        "players" => roster.players = owned(&arguments),
                        "suspects" => roster.suspects = owned(&arguments),
                        "weapons" => roster.weapons = owned(&arguments),
                        "rooms" => roster.rooms = owned(&arguments),
                        _ => roster.case_file = arguments[0].to_string(),
                    }
                }

                "hand" => {
                    let [owner, cards @ ..] = arguments.as_slice() else {
                        return Err(err::TranscriptError::ArgumentCount(line_number).into());
                    };
                    let event = Event::Hand {
                        owner: owner.to_string(),
                        cards: owned(cards),
                    };
                    steps.push((line_number, Step::Event(event)));
                }

                "suggest" => {
                    let [suggester, c1, c2, c3, refuter, shown] = arguments.as_slice() else {
                        return Err(err::TranscriptError::ArgumentCount(line_number).into());
                    };
                    let mut suggestion = Suggestion::new(suggester, [*c1, *c2, *c3]);
                    suggestion.refuter = optional(refuter);
                    suggestion.shown = optional(shown);
                    steps.push((line_number, Step::Event(Event::Suggestion(suggestion))));
                }

                "accuse" => {
                    let [accuser, c1, c2, c3, correct] = arguments.as_slice() else {
                        return Err(err::TranscriptError::ArgumentCount(line_number).into());
                    };
                    let Ok(correct) = correct.parse::<bool>() else {
                        return Err(err::TranscriptError::Line(line_number).into());
                    };
                    let accusation = Accusation::new(accuser, [*c1, *c2, *c3], correct);
                    steps.push((line_number, Step::Event(Event::Accusation(accusation))));
                }

                "notepad" => {
                    if !arguments.is_empty() {
                        return Err(err::TranscriptError::ArgumentCount(line_number).into());
                    }
                    steps.push((line_number, Step::Notepad));
                }

                _ => {
                    log::info!(target: targets::TRANSCRIPT, "Unknown directive '{directive}' at line {line_number}");
                    return Err(err::TranscriptError::UnknownDirective(line_number).into());
                }
            }
        }

        log::debug!(target: targets::TRANSCRIPT, "Parsed {} steps", steps.len());
        Ok(Transcript { config, steps })
    }

    /// Reads and parses a transcript from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, err::ErrorKind> {
        match std::fs::read_to_string(path) {
            Ok(source) => Self::parse(&source),
            Err(_) => Err(err::TranscriptError::NoFile.into()),
        }
    }

    /// A reasoner for the game of the transcript, with no event applied.
    pub fn reasoner(&self) -> Result<Reasoner, err::ErrorKind> {
        Reasoner::from_config(&self.config)
    }

    /// Applies each event of the transcript to the reasoner, in order.
    ///
    /// Returns a snapshot for each request for a notepad.
    /// On the first error the replay stops, and the error is returned.
    pub fn replay<O: Oracle>(
        &self,
        reasoner: &mut Reasoner<O>,
    ) -> Result<Vec<Snapshot>, err::ErrorKind> {
        let mut notepads = Vec::default();
        for (line_number, step) in &self.steps {
            match step {
                Step::Event(event) => {
                    if let Err(e) = reasoner.apply(event) {
                        log::error!(target: targets::TRANSCRIPT, "Line {line_number}: {e:?}");
                        return Err(e);
                    }
                }
                Step::Notepad => notepads.push(reasoner.snapshot()?),
            }
        }
        Ok(notepads)
    }
}

/// The name, unless the name is `-`.
fn optional(name: &str) -> Option<String> {
    match name {
        "-" => None,
        _ => Some(name.to_string()),
    }
}
