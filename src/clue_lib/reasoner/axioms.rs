/*!
The axioms of a game, which hold regardless of any event.

Four families of clauses:
1. Existence --- each card is at some location.
   For example, `sc_kn ∨ mu_kn ∨ … ∨ cf_kn`.
2. Exclusivity --- no card is at two locations.
   For each card and each pair of distinct locations *p*, *q*, the clause `¬p_card ∨ ¬q_card`.
   As the clause is symmetric, it is given once for each (unordered) pair.
3. Solution existence --- the case file holds some card of each category.
4. Solution uniqueness --- the case file holds at most one card of each category.

Together, 1 and 2 fix each card to exactly one location, and 3 and 4 fix the case file to exactly one suspect, one weapon, and one room.
*/

use crate::{
    config::Category,
    db::registry::Registry,
    misc::log::targets::{self},
    structures::clause::CClause,
};

/// Every axiom of the game with the given registry.
pub fn clauses(registry: &Registry) -> Vec<CClause> {
    let mut clauses = Vec::default();
    clauses.extend(existence(registry));
    clauses.extend(exclusivity(registry));
    for category in Category::ALL {
        clauses.push(solution_existence(registry, category));
        clauses.extend(solution_uniqueness(registry, category));
    }
    clauses
}

/// Each card is at some location.
pub fn existence(registry: &Registry) -> Vec<CClause> {
    registry
        .cards()
        .map(|card| {
            registry
                .locations()
                .map(|location| registry.literal(location, card, true))
                .collect()
        })
        .collect()
}

/// No card is at two locations.
pub fn exclusivity(registry: &Registry) -> Vec<CClause> {
    let locations = registry.locations().collect::<Vec<_>>();
    let mut clauses = Vec::default();
    for card in registry.cards() {
        for (index, p) in locations.iter().enumerate() {
            for q in &locations[index + 1..] {
                clauses.push(vec![
                    registry.literal(*p, card, false),
                    registry.literal(*q, card, false),
                ]);
            }
        }
    }
    log::trace!(target: targets::AXIOMS, "{} exclusivity clauses", clauses.len());
    clauses
}

/// The case file holds some card of the category.
pub fn solution_existence(registry: &Registry, category: Category) -> CClause {
    let case_file = registry.case_file();
    registry
        .cards_of(category)
        .iter()
        .map(|card| registry.literal(case_file, *card, true))
        .collect()
}

/// The case file holds at most one card of the category.
pub fn solution_uniqueness(registry: &Registry, category: Category) -> Vec<CClause> {
    let case_file = registry.case_file();
    let cards = registry.cards_of(category);
    let mut clauses = Vec::default();
    for (index, card) in cards.iter().enumerate() {
        for other_card in &cards[index + 1..] {
            clauses.push(vec![
                registry.literal(case_file, *card, false),
                registry.literal(case_file, *other_card, false),
            ]);
        }
    }
    clauses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Roster;

    #[test]
    fn counts() {
        let registry = Registry::from_roster(&Roster::default()).unwrap();

        // 7 locations, 21 cards.
        assert_eq!(existence(&registry).len(), 21);
        assert!(existence(&registry).iter().all(|clause| clause.len() == 7));
        assert_eq!(exclusivity(&registry).len(), 21 * (7 * 6 / 2));

        assert_eq!(solution_existence(&registry, Category::Room).len(), 9);
        assert_eq!(solution_uniqueness(&registry, Category::Room).len(), 9 * 8 / 2);
        assert_eq!(solution_uniqueness(&registry, Category::Weapon).len(), 15);

        assert_eq!(
            clauses(&registry).len(),
            21 + 21 * 21 + 3 + (15 + 15 + 36)
        );
    }

    #[test]
    fn every_literal_is_an_atom_of_the_registry() {
        let registry = Registry::from_roster(&Roster::default()).unwrap();
        let max = registry.atom_count() as i32;
        for clause in clauses(&registry) {
            assert!(!clause.is_empty());
            assert!(clause.iter().all(|literal| *literal != 0 && literal.abs() <= max));
        }
    }
}
