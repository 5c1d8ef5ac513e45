use crate::conjecture::{Atom, Conjecture, Operator, Variable};
use crate::random::RandomSource;

/// Draws a threshold suited to `variable` on `n`-vertex graphs.
///
/// Density thresholds are uniform in `[0.05, 0.95]` rounded to two
/// decimals; the others are integers uniform in `[1, max(2, n-1)]`.
pub fn sample_threshold<R: RandomSource + ?Sized>(
    variable: Variable,
    n: usize,
    rng: &mut R,
) -> f64 {
    match variable {
        Variable::Density => {
            let raw = 0.05 + 0.9 * rng.next_unit();
            (raw * 100.0).round() / 100.0
        }
        Variable::AvgDegree | Variable::MaxDegree | Variable::Diameter => {
            let upper = n.saturating_sub(1).max(2);
            (1 + rng.below(upper)) as f64
        }
    }
}

/// Random conjecture over two distinct variables.
pub fn random_conjecture<R: RandomSource + ?Sized>(n: usize, rng: &mut R) -> Conjecture {
    let premise_var = Variable::ALL[rng.below(Variable::ALL.len())];
    let others: Vec<Variable> = Variable::ALL.into_iter().filter(|&v| v != premise_var).collect();
    let conclusion_var = others[rng.below(others.len())];

    let premise = random_atom(premise_var, n, rng);
    let conclusion = random_atom(conclusion_var, n, rng);
    Conjecture::new(premise, conclusion)
}

fn random_atom<R: RandomSource + ?Sized>(variable: Variable, n: usize, rng: &mut R) -> Atom {
    let operator = Operator::ALL[rng.below(Operator::ALL.len())];
    Atom::new(variable, operator, sample_threshold(variable, n, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn thresholds_stay_in_range() {
        let mut rng = SmallRng::seed_from_u64(21);
        for _ in 0..500 {
            let d = sample_threshold(Variable::Density, 10, &mut rng);
            assert!((0.05..=0.95).contains(&d));
            assert_eq!((d * 100.0).round() / 100.0, d);
            let k = sample_threshold(Variable::Diameter, 10, &mut rng);
            assert!((1.0..=9.0).contains(&k));
            assert_eq!(k.fract(), 0.0);
        }
    }

    #[test]
    fn tiny_graphs_still_get_a_range() {
        let mut rng = SmallRng::seed_from_u64(22);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let k = sample_threshold(Variable::MaxDegree, 1, &mut rng) as usize;
            assert!((1..=2).contains(&k));
            seen[k] = true;
        }
        assert!(seen[1] && seen[2]);
    }

    #[test]
    fn conjectures_use_two_variables() {
        let mut rng = SmallRng::seed_from_u64(23);
        for _ in 0..200 {
            let conj = random_conjecture(12, &mut rng);
            assert_ne!(conj.premise.variable, conj.conclusion.variable);
        }
    }

    #[test]
    fn same_seed_same_conjecture() {
        let a = random_conjecture(8, &mut SmallRng::seed_from_u64(99));
        let b = random_conjecture(8, &mut SmallRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
