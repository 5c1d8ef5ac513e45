//! Threshold atoms, implications between them, and their evaluation.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::FalsifierError;
use crate::graph::Graph;
use crate::invariants::InvariantSnapshot;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Variable {
    Density,
    AvgDegree,
    MaxDegree,
    Diameter,
}

impl Variable {
    pub const ALL: [Variable; 4] = [
        Variable::Density,
        Variable::AvgDegree,
        Variable::MaxDegree,
        Variable::Diameter,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Variable::Density => "density",
            Variable::AvgDegree => "avg_degree",
            Variable::MaxDegree => "max_degree",
            Variable::Diameter => "diameter",
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variable {
    type Err = FalsifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variable::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| FalsifierError::UnknownVariable(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Operator::Gt, Operator::Ge, Operator::Lt, Operator::Le];

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Lt => "<",
            Operator::Le => "<=",
        }
    }

    /// `lhs <op> rhs`. Infinity compares as IEEE says, so `inf > 3` holds.
    pub fn compare(&self, lhs: f64, rhs: f64) -> bool {
        match self {
            Operator::Gt => lhs > rhs,
            Operator::Ge => lhs >= rhs,
            Operator::Lt => lhs < rhs,
            Operator::Le => lhs <= rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = FalsifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| FalsifierError::UnknownOperator(s.to_string()))
    }
}

/// `variable <operator> threshold`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Atom {
    pub variable: Variable,
    pub operator: Operator,
    pub threshold: f64,
}

impl Atom {
    pub fn new(variable: Variable, operator: Operator, threshold: f64) -> Self {
        Atom { variable, operator, threshold }
    }

    /// Parses names as they appear in `Display` output, e.g. `("density", ">", 0.5)`.
    pub fn parse(variable: &str, operator: &str, threshold: f64) -> crate::Result<Self> {
        Ok(Atom::new(variable.parse()?, operator.parse()?, threshold))
    }

    pub fn holds(&self, snapshot: &InvariantSnapshot) -> bool {
        self.operator.compare(snapshot.get(self.variable), self.threshold)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.variable, self.operator, self.threshold)
    }
}

/// Material implication `premise ⇒ conclusion` over one graph.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Conjecture {
    pub premise: Atom,
    pub conclusion: Atom,
}

/// Outcome of checking a conjecture against one snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub holds: bool,
    pub premise_true: bool,
}

impl Evaluation {
    /// Premise true and conclusion false.
    pub fn is_counterexample(&self) -> bool {
        self.premise_true && !self.holds
    }
}

impl Conjecture {
    pub fn new(premise: Atom, conclusion: Atom) -> Self {
        Conjecture { premise, conclusion }
    }

    /// A false premise makes the implication vacuously true and the
    /// conclusion is not looked at.
    pub fn evaluate(&self, snapshot: &InvariantSnapshot) -> Evaluation {
        if !self.premise.holds(snapshot) {
            return Evaluation { holds: true, premise_true: false };
        }
        Evaluation {
            holds: self.conclusion.holds(snapshot),
            premise_true: true,
        }
    }

    /// Computes the graph's invariants and evaluates against them.
    pub fn check_on_graph(&self, graph: &Graph) -> (Evaluation, InvariantSnapshot) {
        let snapshot = InvariantSnapshot::compute(graph);
        (self.evaluate(&snapshot), snapshot)
    }
}

impl fmt::Display for Conjecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IF {} THEN {}", self.premise, self.conclusion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(density: f64, diameter: f64) -> InvariantSnapshot {
        InvariantSnapshot { density, avg_degree: 2.0, max_degree: 3.0, diameter }
    }

    #[test]
    fn names_round_trip_through_display() {
        for v in Variable::ALL {
            assert_eq!(v.to_string().parse::<Variable>(), Ok(v));
        }
        for op in Operator::ALL {
            assert_eq!(op.to_string().parse::<Operator>(), Ok(op));
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(
            "girth".parse::<Variable>(),
            Err(FalsifierError::UnknownVariable("girth".into()))
        );
        assert_eq!("==".parse::<Operator>(), Err(FalsifierError::UnknownOperator("==".into())));
        assert!(Atom::parse("density", "!=", 0.5).is_err());
    }

    #[test]
    fn operators_compare() {
        assert!(Operator::Gt.compare(2.0, 1.0));
        assert!(!Operator::Gt.compare(1.0, 1.0));
        assert!(Operator::Ge.compare(1.0, 1.0));
        assert!(Operator::Lt.compare(0.5, 1.0));
        assert!(Operator::Le.compare(1.0, 1.0));
        assert!(Operator::Gt.compare(f64::INFINITY, 1e9));
        assert!(!Operator::Lt.compare(f64::INFINITY, 1e9));
    }

    #[test]
    fn false_premise_is_vacuous() {
        let conj = Conjecture::new(
            Atom::parse("density", ">", 0.5).unwrap(),
            Atom::parse("diameter", "<", 2.0).unwrap(),
        );
        let eval = conj.evaluate(&snapshot(0.3, 5.0));
        assert_eq!(eval, Evaluation { holds: true, premise_true: false });
        assert!(!eval.is_counterexample());
    }

    #[test]
    fn true_premise_uses_conclusion() {
        let conj = Conjecture::new(
            Atom::new(Variable::Density, Operator::Gt, 0.5),
            Atom::new(Variable::Diameter, Operator::Lt, 2.0),
        );
        let holds = conj.evaluate(&snapshot(0.6, 1.0));
        assert_eq!(holds, Evaluation { holds: true, premise_true: true });
        let broken = conj.evaluate(&snapshot(0.6, f64::INFINITY));
        assert!(broken.is_counterexample());
    }

    #[test]
    fn display_format() {
        let conj = Conjecture::new(
            Atom::new(Variable::Density, Operator::Gt, 0.5),
            Atom::new(Variable::Diameter, Operator::Le, 2.0),
        );
        assert_eq!(conj.to_string(), "IF density > 0.5 THEN diameter <= 2");
    }
}
