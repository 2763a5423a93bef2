/*!
Boolean constraint propagation.

For each literal on the trail which has not been propagated, each clause containing the negation of the literal is inspected:
- If some literal of the clause is true, the clause is satisfied and nothing follows.
- If every literal of the clause is false, the clause conflicts with the valuation.
- If exactly one literal of the clause has no value, and every other literal is false, the clause asserts the literal.

As every valued literal is propagated, on a full valuation without a conflict every clause is satisfied.
*/

use crate::{
    context::Context,
    db::clause::ClauseKey,
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
};

/// A clause conflicts with the current valuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BCPConflict(pub ClauseKey);

impl Context {
    /// Propagates every literal on the trail which has not yet been propagated.
    pub fn bcp(&mut self) -> Result<(), BCPConflict> {
        // Fields are split so clauses are read while the valuation is written.
        let Context {
            atom_db,
            clause_db,
            counters,
            ..
        } = self;

        while let Some(literal) = atom_db.trail_literal(atom_db.q_head) {
            atom_db.q_head += 1;

            for key in clause_db.occurrences_of(literal.negate()) {
                let Some(clause) = clause_db.get(*key) else {
                    continue;
                };

                let mut satisfied = false;
                let mut unvalued: Option<CLiteral> = None;
                let mut unvalued_count = 0;

                for clause_literal in clause {
                    match atom_db.literal_value(*clause_literal) {
                        Some(true) => {
                            satisfied = true;
                            break;
                        }
                        Some(false) => {}
                        None => {
                            unvalued_count += 1;
                            unvalued = Some(*clause_literal);
                        }
                    }
                }

                if satisfied {
                    continue;
                }

                match (unvalued_count, unvalued) {
                    (0, _) => {
                        log::trace!(target: targets::PROPAGATION, "Conflict on {literal}");
                        counters.total_conflicts += 1;
                        return Err(BCPConflict(*key));
                    }
                    (1, Some(asserted)) => {
                        log::trace!(target: targets::PROPAGATION, "{literal} asserts {asserted}");
                        counters.total_propagations += 1;
                        // The asserted literal has no value, so no conflict is possible.
                        let _ = atom_db.set_value(asserted);
                    }
                    _ => {}
                }
            }
        }

        Ok(())
    }
}
