/*!
Determines the satisfiability of the clause database, perhaps given some assumptions.

# Overview

A solve is a DPLL search with chronological backtracking:

```none
           +---------------+
   +-------| make_decision |-----> satisfiable, if every atom has a value
   |       +---------------+
   |               ⌃
   |               | if there is no conflict
   ⌄               |
 --+---------->+-----+
   ⌃           | bcp |
   |           +-----+
   |               |
   |               | if some clause conflicts with the valuation
   |               ⌄
   |       +-----------+
   +-------| backtrack |-----> unsatisfiable, if every decision has been flipped
           +-----------+
```

Level zero holds the unit clauses of the clause database and the assumptions of the solve, so a conflict at level zero shows the database (given the assumptions) is unsatisfiable.

Backtracking removes levels until a level whose decision has not been flipped is found, and then opens a level with the negation of the decision.

Nothing learnt during a solve is kept, and so assumptions never revise the clause database.
*/

use crate::{
    context::{Context, ContextState},
    procedures::{bcp::BCPConflict, decision::DecisionOk},
    reports::Report,
    structures::literal::{CLiteral, Literal},
};

impl Context {
    /// Determines the satisfiability of the clause database, and keeps a model of the database if one exists.
    pub fn solve(&mut self) -> Report {
        let report = self.solve_given(&[]);
        match report {
            Report::Satisfiable => {
                self.model = self.atom_db.valuation().clone();
                self.state = ContextState::Satisfiable;
            }
            Report::Unsatisfiable => {
                self.model.clear();
                self.state = ContextState::Unsatisfiable;
            }
            Report::Unknown => {}
        }
        report
    }

    /// Determines the satisfiability of the clause database together with the given assumptions.
    ///
    /// On a satisfiable report, the valuation of the [atom database](crate::db::atom) is a model of the database and assumptions.
    pub fn solve_given(&mut self, assumptions: &[CLiteral]) -> Report {
        self.counters.total_solves += 1;
        self.atom_db.clear();

        for unit in self.clause_db.units() {
            if self.atom_db.set_value(*unit).is_err() {
                return Report::Unsatisfiable;
            }
        }

        for assumption in assumptions.iter().filter(|literal| **literal != 0) {
            if self.atom_db.set_value(*assumption).is_err() {
                return Report::Unsatisfiable;
            }
        }

        loop {
            match self.bcp() {
                Ok(()) => match self.make_decision() {
                    DecisionOk::Literal(decision) => {
                        // The decided atom has no value, so no conflict is possible.
                        let _ = self.atom_db.decide(decision, false);
                    }
                    DecisionOk::Exhausted => return Report::Satisfiable,
                },

                Err(BCPConflict(_)) => loop {
                    match self.atom_db.backtrack() {
                        None => return Report::Unsatisfiable,
                        Some(level) if !level.flipped => {
                            let _ = self.atom_db.decide(level.decision.negate(), true);
                            break;
                        }
                        Some(_) => {}
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{context::Context, reports::Report};

    #[test]
    fn conflict() {
        let mut ctx = Context::default();
        assert!(ctx.add_clause(&[1, 2]).is_ok());
        assert!(ctx.add_clause(&[-1, -2]).is_ok());
        assert!(ctx.add_clause(&[1, -2]).is_ok());
        assert!(ctx.add_clause(&[-1, 2]).is_ok());

        assert_eq!(ctx.solve(), Report::Unsatisfiable);
        assert!(ctx.model().is_empty());
    }

    #[test]
    fn requires_backtracking() {
        let mut ctx = Context::default();
        // Deciding false on 1 first forces a flip.
        assert!(ctx.add_clause(&[1, 2]).is_ok());
        assert!(ctx.add_clause(&[1, -2]).is_ok());
        assert!(ctx.add_clause(&[-1, 3]).is_ok());

        assert_eq!(ctx.solve(), Report::Satisfiable);
        assert_eq!(ctx.model()[1], Some(true));
        assert_eq!(ctx.model()[3], Some(true));
        assert!(ctx.counters.total_conflicts > 0);
    }

    #[test]
    fn assumptions_do_not_persist() {
        let mut ctx = Context::default();
        assert!(ctx.add_clause(&[-1, 2]).is_ok());

        assert_eq!(ctx.solve_given(&[1, -2]), Report::Unsatisfiable);
        assert_eq!(ctx.solve_given(&[1]), Report::Satisfiable);
        assert_eq!(ctx.solve(), Report::Satisfiable);
    }
}
