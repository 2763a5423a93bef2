use clue_lib::{
    context::{Context, ContextState},
    db::clause::ClauseOk,
    oracle::{Entailment, Oracle},
    reports::Report,
    types::err::{self},
};

mod basic {

    use clue_lib::structures::{clause::Clause, valuation::Valuation};

    use super::*;

    #[test]
    fn one_literal() {
        let mut the_context = Context::default();
        assert_eq!(the_context.add_clause(&[1]), Ok(ClauseOk::AddedUnit));
        assert_eq!(the_context.solve(), Report::Satisfiable);
        assert_eq!(the_context.model().value_of(1), Some(Some(true)));
        assert_eq!(the_context.model().atom_valued_pairs().collect::<Vec<_>>(), vec![(1, true)]);
    }

    #[test]
    fn conflict() {
        let mut the_context = Context::default();
        assert!(the_context.add_clause(&[1, 2]).is_ok());
        assert!(the_context.add_clause(&[-1, -2]).is_ok());
        assert!(the_context.add_clause(&[1, -2]).is_ok());
        assert!(the_context.add_clause(&[-1, 2]).is_ok());
        assert_eq!(the_context.solve(), Report::Unsatisfiable);
        assert_eq!(the_context.state, ContextState::Unsatisfiable);
    }

    #[test]
    fn model_satisfies_database() {
        let mut the_context = Context::default();
        let clauses = vec![
            vec![1, 2, 3],
            vec![-1, -2],
            vec![-2, -3],
            vec![-1, -3],
            vec![-1, 4],
            vec![-4, 5, 6],
        ];
        for clause in &clauses {
            assert!(the_context.add_clause(clause).is_ok());
        }
        assert_eq!(the_context.solve(), Report::Satisfiable);
        for clause in &clauses {
            assert!(clause.satisfied_on(the_context.model()));
        }
    }

    #[test]
    fn assumptions_leave_database_unchanged() {
        let mut the_context = Context::default();
        assert!(the_context.add_clause(&[1, 2]).is_ok());

        assert_eq!(the_context.solve_given(&[-1, -2]), Report::Unsatisfiable);
        assert_eq!(the_context.solve_given(&[-1]), Report::Satisfiable);
        assert_eq!(the_context.clause_db.clause_count(), 1);
        assert_eq!(the_context.solve(), Report::Satisfiable);
    }

    #[test]
    fn duplicates() {
        let mut the_context = Context::default();
        assert_eq!(the_context.add_clause(&[1, 2, 2]), Ok(ClauseOk::Added));
        let clauses = the_context.clause_db.all_clauses().collect::<Vec<_>>();
        assert_eq!(clauses, vec![vec![1, 2]]);
    }

    #[test]
    fn tautology_skip() {
        let mut the_context = Context::default();
        assert_eq!(the_context.add_clause(&[1, 2, -1]), Ok(ClauseOk::Tautology));
        assert_eq!(the_context.add_clause(&[-2, 1, 2]), Ok(ClauseOk::Tautology));
        assert_eq!(the_context.clause_db.clause_count(), 0);
    }
}

mod oracle {

    use super::*;

    #[test]
    fn entailment() {
        let mut oracle = Context::default();
        assert!(Oracle::add_clause(&mut oracle, &[-1, 2]).is_ok());
        assert!(Oracle::add_clause(&mut oracle, &[-2, 3]).is_ok());

        assert_eq!(oracle.test_literal(3), Ok(Entailment::Undetermined));

        assert!(Oracle::add_clause(&mut oracle, &[1]).is_ok());
        assert_eq!(oracle.test_literal(3), Ok(Entailment::True));
        assert_eq!(oracle.test_literal(-3), Ok(Entailment::False));
    }

    #[test]
    fn test_literal_keeps_knowledge_base() {
        let mut oracle = Context::default();
        assert!(Oracle::add_clause(&mut oracle, &[1, 2]).is_ok());

        for _ in 0..3 {
            assert_eq!(oracle.test_literal(1), Ok(Entailment::Undetermined));
            assert_eq!(oracle.test_literal(-2), Ok(Entailment::Undetermined));
        }
        assert_eq!(oracle.clause_db.clause_count(), 1);
    }

    #[test]
    fn malformed_clauses() {
        let mut oracle = Context::default();
        assert_eq!(
            Oracle::add_clause(&mut oracle, &[]),
            Err(err::ErrorKind::from(err::ClauseError::Empty))
        );
        assert_eq!(
            Oracle::add_clause(&mut oracle, &[1, 0]),
            Err(err::ErrorKind::from(err::ClauseError::ZeroLiteral))
        );
        assert_eq!(
            oracle.test_literal(0),
            Err(err::ErrorKind::from(err::ClauseError::ZeroLiteral))
        );
    }

    #[test]
    fn batch_is_all_or_nothing() {
        let mut oracle = Context::default();
        let clauses: Vec<Vec<i32>> = vec![vec![1], vec![2, 3], vec![]];
        assert!(oracle.add_clauses(&clauses).is_err());
        assert_eq!(oracle.clause_db.clause_count(), 0);
    }

    #[test]
    fn inconsistent() {
        let mut oracle = Context::default();
        assert!(Oracle::add_clause(&mut oracle, &[1]).is_ok());
        assert!(Oracle::add_clause(&mut oracle, &[-1]).is_ok());
        assert_eq!(
            oracle.test_literal(2),
            Err(err::ErrorKind::from(err::OracleError::Inconsistent))
        );
    }
}
