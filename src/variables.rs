//! Binary decision variable families.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::VariableDomain;
use crate::expr::{Var, VarFamily};
use crate::sets::{Event, IndexSets};

/// One named family of binary variables indexed over `(home, guest, period)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VariableFamily {
    pub family: VarFamily,
    /// Human-readable description.
    pub doc: String,
    /// Index tuples, one variable each.
    pub index: Vec<Event>,
}

impl VariableFamily {
    pub fn name(&self) -> &'static str {
        self.family.name()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Whether the family declares a variable at `at`.
    pub fn contains(&self, at: &Event) -> bool {
        self.index.contains(at)
    }

    /// Iterates over the declared variables.
    pub fn vars(&self) -> impl Iterator<Item = Var> + '_ {
        let family = self.family;
        self.index.iter().map(move |&at| Var { family, at })
    }
}

/// The `match` and `movement` families.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VariableSpace {
    pub matches: VariableFamily,
    pub movements: VariableFamily,
}

impl VariableSpace {
    /// Declares both families over the chosen domain.
    pub fn declare(sets: &IndexSets, domain: VariableDomain) -> Self {
        let index = match domain {
            VariableDomain::Full => sets.full_product(),
            VariableDomain::ValidEvents => sets.events.clone(),
        };

        Self {
            matches: VariableFamily {
                family: VarFamily::Match,
                doc: "home team hosts guest team in period".into(),
                index: index.clone(),
            },
            movements: VariableFamily {
                family: VarFamily::Movement,
                doc: "forced venue relocation between consecutive periods".into(),
                index,
            },
        }
    }

    /// Both families, `match` first.
    pub fn families(&self) -> [&VariableFamily; 2] {
        [&self.matches, &self.movements]
    }

    /// Looks up a family by name.
    pub fn get(&self, name: &str) -> Option<&VariableFamily> {
        self.families().into_iter().find(|f| f.name() == name)
    }

    /// Total number of declared variables.
    pub fn len(&self) -> usize {
        self.matches.len() + self.movements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `var` is declared.
    pub fn contains(&self, var: &Var) -> bool {
        match var.family {
            VarFamily::Match => self.matches.contains(&var.at),
            VarFamily::Movement => self.movements.contains(&var.at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_domain() {
        let sets = IndexSets::generate(&[1, 2, 3], &[1, 2]).unwrap();
        let space = VariableSpace::declare(&sets, VariableDomain::Full);

        assert_eq!(space.matches.len(), 18);
        assert_eq!(space.movements.len(), 18);
        assert!(space.matches.contains(&Event::new(2, 2, 1)));
        assert_eq!(space.len(), 36);
    }

    #[test]
    fn test_valid_event_domain() {
        let sets = IndexSets::generate(&[1, 2, 3], &[1, 2]).unwrap();
        let space = VariableSpace::declare(&sets, VariableDomain::ValidEvents);

        assert_eq!(space.matches.len(), 12);
        assert!(!space.matches.contains(&Event::new(2, 2, 1)));
        assert_eq!(space.matches.index, sets.events);
    }

    #[test]
    fn test_lookup_by_name() {
        let sets = IndexSets::generate(&[1, 2], &[1]).unwrap();
        let space = VariableSpace::declare(&sets, VariableDomain::Full);

        assert_eq!(space.get("match").map(|f| f.family), Some(VarFamily::Match));
        assert_eq!(
            space.get("movement").map(|f| f.family),
            Some(VarFamily::Movement)
        );
        assert!(space.get("travel").is_none());
    }

    #[test]
    fn test_contains_var() {
        let sets = IndexSets::generate(&[1, 2], &[1]).unwrap();
        let space = VariableSpace::declare(&sets, VariableDomain::ValidEvents);

        assert!(space.contains(&Var::movement(Event::new(1, 2, 1))));
        assert!(!space.contains(&Var::matched(Event::new(1, 1, 1))));
    }
}
