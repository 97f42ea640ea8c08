//! Greedy budget allocation under per-department floors and caps
//!
//! The allocator seeds every department with its minimum, then repeatedly hands
//! a bounded chunk of the remaining budget to the highest-scoring department
//! that still has headroom. Whatever the greedy loop cannot place is split
//! evenly across the departments that are still open. It is a heuristic with
//! a bounded iteration count, not an exact solver.

use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Tuning knobs for the greedy loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllocatorSettings {
    /// Upper bound on greedy iterations
    pub max_iterations: usize,
    /// Remaining budget at or below this is treated as fully allocated
    pub tolerance: f64,
    /// Fraction of the remaining budget handed out per step while it is large
    pub step_fraction: f64,
    /// Step ceiling once the fractional step drops below it
    pub max_small_step: f64,
}

impl Default for AllocatorSettings {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tolerance: 1e-6,
            step_fraction: 0.2,
            max_small_step: 10.0,
        }
    }
}

/// How the allocation run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Termination {
    /// Remaining budget reached the tolerance inside the greedy loop
    #[default]
    Converged,
    /// Minimums exceeded the budget and were scaled down proportionally
    MinimumsScaled,
    /// Every department hit its cap before the budget was spent
    CapsExhausted,
    /// The best open department had a non-positive score
    NoProfitableDepartment,
    /// The greedy loop ran out of iterations
    IterationLimit,
}

/// Budget per department, in department input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetAllocation {
    entries: Vec<(String, f64)>,
    termination: Termination,
}

impl BudgetAllocation {
    pub fn get(&self, department: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == department)
            .map(|(_, amount)| *amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, amount)| (name.as_str(), *amount))
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, amount)| amount).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn termination(&self) -> Termination {
        self.termination
    }
}

/// Allocate with the default settings
pub fn allocate_budget(
    departments: &[String],
    impact_per_unit: &HashMap<String, f64>,
    total_budget: f64,
    min_per_dept: Option<&HashMap<String, f64>>,
    max_per_dept: Option<&HashMap<String, f64>>,
) -> BudgetAllocation {
    AllocatorSettings::default().allocate(departments, impact_per_unit, total_budget, min_per_dept, max_per_dept)
}

impl AllocatorSettings {
    /// Distribute `total_budget` across `departments`.
    ///
    /// Duplicate department names are collapsed onto their first occurrence.
    /// Departments missing from `impact_per_unit` score zero. Ties between
    /// equal scores go to the department listed first.
    pub fn allocate(
        &self,
        departments: &[String],
        impact_per_unit: &HashMap<String, f64>,
        total_budget: f64,
        min_per_dept: Option<&HashMap<String, f64>>,
        max_per_dept: Option<&HashMap<String, f64>>,
    ) -> BudgetAllocation {
        let mut seen = HashSet::new();
        let names: Vec<&String> = departments.iter().filter(|d| seen.insert(d.as_str())).collect();
        if names.is_empty() {
            return BudgetAllocation::default();
        }

        let lookup = |map: Option<&HashMap<String, f64>>, name: &str| map.and_then(|m| m.get(name)).copied();

        // Seed with minimums
        let mut allocations: Vec<f64> = names
            .iter()
            .map(|d| lookup(min_per_dept, d.as_str()).unwrap_or(0.0).max(0.0))
            .collect();
        let seeded: f64 = allocations.iter().sum();
        let mut remaining = total_budget - seeded;

        if remaining < 0.0 {
            debug!(seeded, total_budget, "minimums exceed budget, scaling down");
            let amounts = if seeded == 0.0 {
                vec![0.0; names.len()]
            } else {
                let factor = total_budget / seeded;
                allocations.iter().map(|a| a * factor).collect()
            };
            return Self::finish(&names, amounts, Termination::MinimumsScaled);
        }

        let mut caps: Vec<f64> = names
            .iter()
            .map(|d| lookup(max_per_dept, d.as_str()).unwrap_or(f64::INFINITY))
            .collect();
        let scores: Vec<f64> = names
            .iter()
            .map(|d| impact_per_unit.get(d.as_str()).copied().unwrap_or(0.0))
            .collect();

        let mut termination = Termination::IterationLimit;
        let mut steps = self.max_iterations;
        while steps > 0 {
            if remaining <= self.tolerance {
                termination = Termination::Converged;
                break;
            }
            steps -= 1;

            let Some(best) = best_open(&allocations, &caps, &scores) else {
                termination = Termination::CapsExhausted;
                break;
            };
            if scores[best] <= 0.0 {
                termination = Termination::NoProfitableDepartment;
                break;
            }

            let chunk = (remaining * self.step_fraction).max(remaining.min(self.max_small_step));
            let room = caps[best] - allocations[best];
            let delta = chunk.min(room).min(remaining);
            if delta <= 0.0 {
                caps[best] = allocations[best];
                continue;
            }
            allocations[best] += delta;
            remaining -= delta;
        }
        if steps == 0 && remaining <= self.tolerance {
            termination = Termination::Converged;
        }

        // Even split of whatever the greedy loop left behind
        if remaining > self.tolerance {
            let open: Vec<usize> = (0..names.len()).filter(|&i| allocations[i] < caps[i]).collect();
            debug!(remaining, open = open.len(), ?termination, "splitting residual budget");
            if !open.is_empty() {
                let share = remaining / open.len() as f64;
                for i in open {
                    allocations[i] += share.min(caps[i] - allocations[i]);
                }
            }
        }

        Self::finish(&names, allocations, termination)
    }

    fn finish(names: &[&String], amounts: Vec<f64>, termination: Termination) -> BudgetAllocation {
        BudgetAllocation {
            entries: names.iter().map(|n| (*n).clone()).zip(amounts).collect(),
            termination,
        }
    }
}

/// Highest-scoring department below its cap; the earliest wins ties
fn best_open(allocations: &[f64], caps: &[f64], scores: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for i in 0..allocations.len() {
        if allocations[i] >= caps[i] {
            continue;
        }
        match best {
            Some(b) if scores[i] <= scores[b] => {}
            _ => best = Some(i),
        }
    }
    best
}
