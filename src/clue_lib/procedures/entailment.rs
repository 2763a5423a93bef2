/*!
Tests whether the clause database entails a literal.

A literal *l* is entailed exactly when the database together with the negation of *l* is unsatisfiable.
And so, a test requires (at most) two solves under assumption --- one for *l* and one for its negation.

Though, as a context keeps some model of the database, one of the two is often known without a solve:
if *l* is true on the kept model then the database together with *l* is satisfiable, and so the negation of *l* is not entailed (and likewise if *l* is false on the model).
*/

use crate::{
    context::{Context, ContextState},
    misc::log::targets::{self},
    oracle::Entailment,
    reports::Report,
    structures::{
        literal::{CLiteral, Literal},
        valuation::Valuation,
    },
    types::err::{self},
};

impl Context {
    /// Whether the clause database entails the literal, entails the negation of the literal, or neither.
    pub fn entailment(&mut self, literal: CLiteral) -> Result<Entailment, err::ErrorKind> {
        if literal == 0 {
            return Err(err::ClauseError::ZeroLiteral.into());
        }
        self.atom_db.ensure_atom(literal.atom());

        if self.state == ContextState::Input {
            self.solve();
        }

        if self.state == ContextState::Unsatisfiable {
            log::warn!(target: targets::QUERY, "The knowledge base is unsatisfiable");
            return Err(err::OracleError::Inconsistent.into());
        }

        let on_model = self
            .model
            .value_of(literal.atom())
            .flatten()
            .map(|value| value == literal.polarity());

        let entailment = match on_model {
            Some(false) => match self.solve_given(&[literal]) {
                Report::Unsatisfiable => Entailment::False,
                _ => Entailment::Undetermined,
            },
            _ => match self.solve_given(&[literal.negate()]) {
                Report::Unsatisfiable => Entailment::True,
                _ => Entailment::Undetermined,
            },
        };

        log::trace!(target: targets::QUERY, "{literal}: {entailment:?}");
        Ok(entailment)
    }
}

#[cfg(test)]
mod tests {
    use crate::{context::Context, oracle::Entailment, types::err};

    #[test]
    fn chain() {
        let mut ctx = Context::default();
        assert!(ctx.add_clause(&[-1, 2]).is_ok());
        assert!(ctx.add_clause(&[-2, 3]).is_ok());
        assert!(ctx.add_clause(&[1]).is_ok());

        assert_eq!(ctx.entailment(3), Ok(Entailment::True));
        assert_eq!(ctx.entailment(-3), Ok(Entailment::False));
    }

    #[test]
    fn disjunction_is_undetermined() {
        let mut ctx = Context::default();
        assert!(ctx.add_clause(&[1, 2, 3]).is_ok());

        for atom in 1..=3 {
            assert_eq!(ctx.entailment(atom), Ok(Entailment::Undetermined));
        }
        assert_eq!(ctx.entailment(4), Ok(Entailment::Undetermined));
    }

    #[test]
    fn inconsistent() {
        let mut ctx = Context::default();
        assert!(ctx.add_clause(&[1]).is_ok());
        assert!(ctx.add_clause(&[-1]).is_ok());

        assert_eq!(
            ctx.entailment(2),
            Err(err::ErrorKind::Oracle(err::OracleError::Inconsistent))
        );
    }

    #[test]
    fn zero() {
        let mut ctx = Context::default();
        assert_eq!(
            ctx.entailment(0),
            Err(err::ErrorKind::Clause(err::ClauseError::ZeroLiteral))
        );
    }

    #[test]
    fn additions_refresh_the_model() {
        let mut ctx = Context::default();
        assert!(ctx.add_clause(&[1, 2]).is_ok());
        assert_eq!(ctx.entailment(1), Ok(Entailment::Undetermined));

        assert!(ctx.add_clause(&[-2]).is_ok());
        assert_eq!(ctx.entailment(1), Ok(Entailment::True));
    }
}
