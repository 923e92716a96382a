//! Freight assignment problem.
//!
//! The benchmark workload both solvers compete on: assign packages to
//! capacitated flights minimizing total shipping cost. Leaving a package
//! unassigned or overfilling a flight incurs a penalty, so objective values
//! land in the millions for the default instance size, matching the scale
//! of the recorded experiment data.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::alns::{AlnsProblem, DestroyOperator, RepairOperator};
use crate::tabu::{TabuMove, TabuProblem};

/// Cost charged per unassigned package.
pub const UNASSIGNED_PENALTY: f64 = 250_000.0;

/// Cost charged per package exceeding a flight's capacity.
pub const OVERFLOW_PENALTY: f64 = 120_000.0;

/// Flight index a package is assigned to, or `None` while unrouted.
pub type Assignment = Vec<Option<usize>>;

/// A generated instance of the freight assignment problem.
#[derive(Debug, Clone)]
pub struct FreightInstance {
    /// Number of packages to route.
    pub n_packages: usize,
    /// Per-flight capacity in packages.
    pub capacities: Vec<usize>,
    /// Shipping cost of package `p` on flight `f`, indexed `[p][f]`.
    pub costs: Vec<Vec<f64>>,
}

impl FreightInstance {
    /// Generates a deterministic instance from `seed`.
    ///
    /// Total capacity is sized to roughly 125% of the package count, so
    /// feasible assignments exist but naive ones overflow.
    pub fn generate(n_packages: usize, n_flights: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let base_capacity = (n_packages as f64 * 1.25 / n_flights as f64).ceil() as usize;

        let capacities = (0..n_flights)
            .map(|_| base_capacity.saturating_add(rng.random_range(0..3)).max(1))
            .collect();

        let costs = (0..n_packages)
            .map(|_| {
                (0..n_flights)
                    .map(|_| rng.random_range(20_000.0..80_000.0))
                    .collect()
            })
            .collect();

        Self {
            n_packages,
            capacities,
            costs,
        }
    }

    /// Number of flights in the instance.
    pub fn n_flights(&self) -> usize {
        self.capacities.len()
    }

    /// Packages currently assigned to each flight.
    fn loads(&self, assignment: &Assignment) -> Vec<usize> {
        let mut loads = vec![0usize; self.n_flights()];
        for flight in assignment.iter().flatten() {
            loads[*flight] += 1;
        }
        loads
    }

    /// Total objective: shipping costs plus penalties. Lower is better.
    pub fn evaluate(&self, assignment: &Assignment) -> f64 {
        let mut total = 0.0;
        for (package, slot) in assignment.iter().enumerate() {
            match slot {
                Some(flight) => total += self.costs[package][*flight],
                None => total += UNASSIGNED_PENALTY,
            }
        }
        for (flight, &load) in self.loads(assignment).iter().enumerate() {
            if load > self.capacities[flight] {
                total += OVERFLOW_PENALTY * (load - self.capacities[flight]) as f64;
            }
        }
        total
    }

    /// Cheapest flight for `package` that still has spare capacity under
    /// `loads`; falls back to the globally cheapest flight when everything
    /// is full.
    fn best_open_flight(&self, package: usize, loads: &[usize]) -> usize {
        let row = &self.costs[package];
        let open = (0..self.n_flights())
            .filter(|&f| loads[f] < self.capacities[f])
            .min_by(|&a, &b| row[a].total_cmp(&row[b]));
        match open {
            Some(f) => f,
            None => (0..self.n_flights())
                .min_by(|&a, &b| row[a].total_cmp(&row[b]))
                .unwrap_or(0),
        }
    }
}

impl AlnsProblem for FreightInstance {
    type Solution = Assignment;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Assignment {
        (0..self.n_packages)
            .map(|_| Some(rng.random_range(0..self.n_flights())))
            .collect()
    }

    fn objective(&self, assignment: &Assignment) -> f64 {
        self.evaluate(assignment)
    }
}

/// Destroy operators for the freight problem.
pub struct FreightDestroy<'a> {
    instance: &'a FreightInstance,
    kind: DestroyKind,
}

#[derive(Debug, Clone, Copy)]
enum DestroyKind {
    /// Unroutes a random fraction of packages.
    Random,
    /// Unroutes the packages with the highest current shipping cost.
    Costliest,
}

impl<'a> FreightDestroy<'a> {
    pub fn random(instance: &'a FreightInstance) -> Self {
        Self {
            instance,
            kind: DestroyKind::Random,
        }
    }

    pub fn costliest(instance: &'a FreightInstance) -> Self {
        Self {
            instance,
            kind: DestroyKind::Costliest,
        }
    }
}

impl DestroyOperator<Assignment> for FreightDestroy<'_> {
    fn name(&self) -> &str {
        match self.kind {
            DestroyKind::Random => "random-removal",
            DestroyKind::Costliest => "costliest-removal",
        }
    }

    fn destroy<R: Rng>(&self, assignment: &Assignment, degree: f64, rng: &mut R) -> Assignment {
        let mut out = assignment.clone();
        match self.kind {
            DestroyKind::Random => {
                for slot in &mut out {
                    if slot.is_some() && rng.random_range(0.0..1.0) < degree {
                        *slot = None;
                    }
                }
            }
            DestroyKind::Costliest => {
                let n_remove = ((out.len() as f64) * degree).ceil() as usize;
                let mut routed: Vec<(usize, f64)> = out
                    .iter()
                    .enumerate()
                    .filter_map(|(p, slot)| slot.map(|f| (p, self.instance.costs[p][f])))
                    .collect();
                routed.sort_by(|a, b| b.1.total_cmp(&a.1));
                for (package, _) in routed.into_iter().take(n_remove) {
                    out[package] = None;
                }
            }
        }
        out
    }
}

/// Repair operators for the freight problem.
pub struct FreightRepair<'a> {
    instance: &'a FreightInstance,
    kind: RepairKind,
}

#[derive(Debug, Clone, Copy)]
enum RepairKind {
    /// Inserts each unrouted package on its cheapest open flight.
    Greedy,
    /// Inserts each unrouted package on a uniformly random flight.
    Scatter,
}

impl<'a> FreightRepair<'a> {
    pub fn greedy(instance: &'a FreightInstance) -> Self {
        Self {
            instance,
            kind: RepairKind::Greedy,
        }
    }

    pub fn scatter(instance: &'a FreightInstance) -> Self {
        Self {
            instance,
            kind: RepairKind::Scatter,
        }
    }
}

impl RepairOperator<Assignment> for FreightRepair<'_> {
    fn name(&self) -> &str {
        match self.kind {
            RepairKind::Greedy => "greedy-insert",
            RepairKind::Scatter => "scatter-insert",
        }
    }

    fn repair<R: Rng>(&self, assignment: &Assignment, rng: &mut R) -> Assignment {
        let mut out = assignment.clone();
        let mut loads = vec![0usize; self.instance.n_flights()];
        for flight in out.iter().flatten() {
            loads[*flight] += 1;
        }
        for package in 0..out.len() {
            if out[package].is_some() {
                continue;
            }
            let flight = match self.kind {
                RepairKind::Greedy => self.instance.best_open_flight(package, &loads),
                RepairKind::Scatter => rng.random_range(0..self.instance.n_flights()),
            };
            out[package] = Some(flight);
            loads[flight] += 1;
        }
        out
    }
}

/// Number of packages sampled for reassignment per Tabu iteration.
const TABU_NEIGHBORHOOD_SAMPLE: usize = 16;

impl TabuProblem for FreightInstance {
    type Solution = Assignment;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Assignment {
        (0..self.n_packages)
            .map(|_| Some(rng.random_range(0..self.n_flights())))
            .collect()
    }

    fn objective(&self, assignment: &Assignment) -> f64 {
        self.evaluate(assignment)
    }

    fn neighbors<R: Rng>(
        &self,
        assignment: &Assignment,
        rng: &mut R,
    ) -> Vec<TabuMove<Assignment>> {
        let packages: Vec<usize> = (0..self.n_packages).collect();
        let mut moves = Vec::new();

        for &package in packages
            .choose_multiple(rng, TABU_NEIGHBORHOOD_SAMPLE.min(self.n_packages))
        {
            let current = assignment[package];
            for flight in 0..self.n_flights() {
                if current == Some(flight) {
                    continue;
                }
                let mut next = assignment.clone();
                next[package] = Some(flight);
                let objective = self.evaluate(&next);
                moves.push(TabuMove {
                    solution: next,
                    key: format!("p{package}->f{flight}"),
                    objective,
                });
            }
        }
        moves
    }
}
