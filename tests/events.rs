use clue_lib::{
    config::{Config, Roster},
    context::Context,
    oracle::{Entailment, Oracle},
    reasoner::{Accusation, Event, Reasoner, Suggestion},
    reports::{Belief, Report},
    structures::{clause::CClause, literal::CLiteral},
    types::err::{self},
};

fn classic() -> Reasoner {
    Reasoner::from_config(&Config::default()).unwrap()
}

mod hands {

    use super::*;

    #[test]
    fn dealt_cards_are_known() {
        let mut reasoner = classic();
        reasoner.hand("sc", &["wh", "li", "st"]).unwrap();

        for card in ["wh", "li", "st"] {
            assert_eq!(reasoner.belief("sc", card), Ok(Belief::True));
            assert_eq!(reasoner.belief("cf", card), Ok(Belief::False));
            for other in ["mu", "wh", "gr", "pe", "pl"] {
                assert_eq!(reasoner.belief(other, card), Ok(Belief::False));
            }
        }
        assert_eq!(reasoner.perspective(), reasoner.registry().location("sc").ok());
    }

    #[test]
    fn undealt_cards_are_unaffected() {
        let mut reasoner = classic();
        let before = reasoner.snapshot().unwrap();

        reasoner.hand("sc", &["wh", "li", "st"]).unwrap();
        let after = reasoner.snapshot().unwrap();

        for ((card, was), (_, is)) in before.rows().zip(after.rows()) {
            match card {
                "wh" | "li" | "st" => assert_ne!(was, is),
                _ => assert_eq!(was, is, "row of {card}"),
            }
        }
    }

    #[test]
    fn beliefs_are_monotone() {
        let mut reasoner = classic();
        reasoner.hand("sc", &["wh", "li", "st"]).unwrap();
        let before = reasoner.snapshot().unwrap();

        reasoner
            .suggest(&Suggestion::new("sc", ["sc", "ro", "lo"]).refuted_by("mu").showing("sc"))
            .unwrap();
        let after = reasoner.snapshot().unwrap();

        for ((_, was), (_, is)) in before.rows().zip(after.rows()) {
            for (was, is) in was.iter().zip(is) {
                if *was != Belief::Unknown {
                    assert_eq!(was, is);
                }
            }
        }
    }
}

mod suggestions {

    use super::*;

    #[test]
    fn no_refuter() {
        let mut reasoner = classic();
        reasoner.suggest(&Suggestion::new("pl", ["pe", "pi", "ba"])).unwrap();

        for card in ["pe", "pi", "ba"] {
            for player in ["sc", "mu", "wh", "gr", "pe"] {
                assert_eq!(reasoner.belief(player, card), Ok(Belief::False));
            }
            assert_eq!(reasoner.belief("pl", card), Ok(Belief::Unknown));
            assert_eq!(reasoner.belief("cf", card), Ok(Belief::Unknown));
        }
    }

    #[test]
    fn shown_card() {
        let mut reasoner = classic();
        reasoner
            .suggest(&Suggestion::new("pl", ["wh", "wr", "st"]).refuted_by("wh").showing("wh"))
            .unwrap();

        assert_eq!(reasoner.belief("wh", "wh"), Ok(Belief::True));
        assert_eq!(reasoner.belief("cf", "wh"), Ok(Belief::False));

        // sc and mu were asked before wh.
        for player in ["sc", "mu"] {
            for card in ["wh", "wr", "st"] {
                assert_eq!(reasoner.belief(player, card), Ok(Belief::False));
            }
        }
        assert_eq!(reasoner.belief("gr", "wr"), Ok(Belief::Unknown));
    }

    #[test]
    fn unseen_card() {
        let mut reasoner = classic();
        reasoner.suggest(&Suggestion::new("mu", ["pe", "pi", "di"]).refuted_by("pe")).unwrap();

        assert_eq!(reasoner.belief("pe", "pi"), Ok(Belief::Unknown));

        // Once two of the cards are elsewhere, the refuter holds the third.
        reasoner.hand("sc", &["pe", "di"]).unwrap();
        assert_eq!(reasoner.belief("pe", "pi"), Ok(Belief::True));
    }

    #[test]
    fn preconditions() {
        let mut reasoner = classic();

        let mut shown_without_refuter = Suggestion::new("sc", ["sc", "ro", "lo"]);
        shown_without_refuter.shown = Some("sc".to_string());
        assert_eq!(
            reasoner.suggest(&shown_without_refuter),
            Err(err::ErrorKind::from(err::PreconditionError::ShownWithoutRefuter))
        );

        assert_eq!(
            reasoner.suggest(&Suggestion::new("sc", ["sc", "ro", "lo"]).refuted_by("sc")),
            Err(err::ErrorKind::from(err::PreconditionError::RefuterIsSuggester))
        );

        assert_eq!(
            reasoner.suggest(&Suggestion::new("sc", ["sc", "ro", "lo"]).refuted_by("mu").showing("kn")),
            Err(err::ErrorKind::from(err::PreconditionError::ShownNotSuggested))
        );

        assert_eq!(
            reasoner.suggest(&Suggestion::new("cf", ["sc", "ro", "lo"])),
            Err(err::ErrorKind::from(err::PreconditionError::CaseFileActor))
        );
    }
}

mod accusations {

    use super::*;

    #[test]
    fn correct() {
        let mut reasoner = classic();
        reasoner.accuse(&Accusation::new("sc", ["pe", "pi", "bi"], true)).unwrap();

        let notepad = reasoner.snapshot().unwrap();
        assert_eq!(notepad.solution(), vec!["pe", "pi", "bi"]);
        assert_eq!(reasoner.belief("cf", "mu"), Ok(Belief::False));
    }

    #[test]
    fn incorrect_is_a_disjunction() {
        let mut reasoner = classic();
        reasoner.accuse(&Accusation::new("sc", ["pe", "pi", "bi"], false)).unwrap();

        // Each card alone may still be in the case file.
        assert_eq!(reasoner.belief("cf", "pe"), Ok(Belief::Unknown));
        assert_eq!(reasoner.belief("cf", "pi"), Ok(Belief::Unknown));
        assert_eq!(reasoner.belief("cf", "bi"), Ok(Belief::Unknown));

        let registry = reasoner.registry().clone();
        let cf = registry.case_file();
        let literal = |card: &str| registry.literal(cf, registry.card(card).unwrap(), true);
        let (pe, pi, bi) = (literal("pe"), literal("pi"), literal("bi"));

        let mut oracle: Context = reasoner.oracle().clone();
        assert_eq!(oracle.solve_given(&[pe, pi, -bi]), Report::Satisfiable);
        assert_eq!(oracle.solve_given(&[pe, pi, bi]), Report::Unsatisfiable);

        // With two cards known, the third is excluded.
        reasoner.accuse(&Accusation::new("mu", ["pe", "pi", "ha"], true)).unwrap();
        assert_eq!(reasoner.belief("cf", "bi"), Ok(Belief::False));
    }
}

mod rejection {

    use super::*;

    #[test]
    fn unknown_names_leave_knowledge_base_unchanged() {
        let mut reasoner = classic();
        reasoner.hand("sc", &["wh", "li", "st"]).unwrap();
        let before = reasoner.snapshot().unwrap();
        let clause_count = reasoner.oracle().clause_db.clause_count();

        assert_eq!(
            reasoner.hand("sc", &["kn", "candlestick"]),
            Err(err::ErrorKind::from(err::IdentifierError::UnknownCard(
                "candlestick".to_string()
            )))
        );
        assert_eq!(
            reasoner.suggest(&Suggestion::new("colonel", ["sc", "ro", "lo"])),
            Err(err::ErrorKind::from(err::IdentifierError::UnknownLocation(
                "colonel".to_string()
            )))
        );
        assert_eq!(
            reasoner.hand("mu", &[] as &[&str]),
            Err(err::ErrorKind::from(err::PreconditionError::EmptyHand))
        );

        assert_eq!(reasoner.oracle().clause_db.clause_count(), clause_count);
        assert_eq!(reasoner.event_count(), 1);
        assert_eq!(reasoner.snapshot().unwrap(), before);
    }

    #[test]
    fn contradiction_is_inconsistent() {
        let mut reasoner = classic();
        reasoner.hand("sc", &["wh"]).unwrap();
        reasoner.hand("mu", &["wh"]).unwrap();

        assert_eq!(
            reasoner.belief("cf", "kn"),
            Err(err::ErrorKind::from(err::OracleError::Inconsistent))
        );
    }
}

mod oracles {

    use super::*;

    /// An oracle which records each clause, and knows nothing.
    #[derive(Default)]
    struct Recorder {
        clauses: Vec<CClause>,
    }

    impl Oracle for Recorder {
        fn add_clause(&mut self, clause: &[CLiteral]) -> Result<(), err::ErrorKind> {
            self.clauses.push(clause.to_vec());
            Ok(())
        }

        fn test_literal(&mut self, _literal: CLiteral) -> Result<Entailment, err::ErrorKind> {
            Ok(Entailment::Undetermined)
        }
    }

    #[test]
    fn any_oracle() {
        let mut reasoner = Reasoner::with_oracle(&Roster::default(), Recorder::default()).unwrap();
        let axiom_count = reasoner.oracle().clauses.len();
        assert_eq!(axiom_count, 21 + 21 * 21 + 3 + (15 + 15 + 36));

        let event = Event::Hand {
            owner: "sc".to_string(),
            cards: vec!["wh".to_string(), "li".to_string()],
        };
        reasoner.apply(&event).unwrap();
        assert_eq!(reasoner.oracle().clauses.len(), axiom_count + 4);
        assert_eq!(reasoner.belief("sc", "wh"), Ok(Belief::Unknown));
    }
}
