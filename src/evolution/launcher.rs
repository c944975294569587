use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, trace, warn};

use super::{
    challenge::Challenge,
    options::{DegenerateSelectionPolicy, EvolutionOptions, LogLevel},
};
use crate::{
    breeding::BreedStrategy,
    candidate::Candidate,
    error::{GeneticError, OptionExt, Result},
    generator::CandidateGenerator,
    rng::RandomNumberGenerator,
    selection::SelectionStrategy,
    target::{Target, TargetSupplier},
};

/// Why a run stopped without finding the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExhaustionReason {
    Generations,
    Time,
}

/// The outcome of a search run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum EvolutionResult {
    /// A candidate matched the target during generation `generation`.
    Solved {
        solution: Candidate,
        generation: usize,
    },
    /// The budget ran out after `generations` evaluated generations; `best` is the
    /// highest-scoring candidate seen over the whole run.
    Exhausted {
        best: Candidate,
        generations: usize,
        reason: ExhaustionReason,
    },
}

impl EvolutionResult {
    pub fn is_solved(&self) -> bool {
        matches!(self, EvolutionResult::Solved { .. })
    }

    /// The solution when solved, the best candidate seen otherwise.
    pub fn best(&self) -> &Candidate {
        match self {
            EvolutionResult::Solved { solution, .. } => solution,
            EvolutionResult::Exhausted { best, .. } => best,
        }
    }
}

/// Runs the generation loop: evaluate, select, recombine, replace.
///
/// Every behavior the loop needs is injected: where the target comes from, how
/// candidates are scored, selected and recombined, and how fresh candidates are
/// drawn.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<Supplier, Chall, Select, Breed, Gen>
where
    Supplier: TargetSupplier,
    Chall: Challenge,
    Select: SelectionStrategy,
    Breed: BreedStrategy,
    Gen: CandidateGenerator,
{
    supplier: Supplier,
    challenge: Chall,
    selection: Select,
    breed: Breed,
    generator: Gen,
}

impl<Supplier, Chall, Select, Breed, Gen> EvolutionLauncher<Supplier, Chall, Select, Breed, Gen>
where
    Supplier: TargetSupplier,
    Chall: Challenge,
    Select: SelectionStrategy,
    Breed: BreedStrategy,
    Gen: CandidateGenerator,
{
    pub fn new(
        supplier: Supplier,
        challenge: Chall,
        selection: Select,
        breed: Breed,
        generator: Gen,
    ) -> Self {
        Self {
            supplier,
            challenge,
            selection,
            breed,
            generator,
        }
    }

    /// Searches for the target starting from a fully random population.
    ///
    /// See [`EvolutionLauncher::evolve_from`].
    pub fn evolve(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult> {
        self.evolve_from(options, Vec::new(), rng)
    }

    /// Searches for the target, seeding generation 0 with `seed` and filling the
    /// remaining places with random candidates.
    ///
    /// # Returns
    ///
    /// `EvolutionResult::Solved` as soon as a generation contains the target, or
    /// `EvolutionResult::Exhausted` when the generation cap or the time budget is hit.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options are invalid, or `seed` holds more candidates than the population size
    /// - The target or a seed candidate does not have the configured word length
    /// - An injected operator reports a failure
    ///
    /// # Performance
    ///
    /// Candidates are scored in parallel with rayon once the population reaches the
    /// options' parallel threshold. Scoring draws no random numbers, so a seeded run
    /// gives the same result either way.
    pub fn evolve_from(
        &self,
        options: &EvolutionOptions,
        seed: Vec<Candidate>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult> {
        options.validate()?;
        let log_level = options.get_log_level();
        let word_length = options.get_word_length();

        let target = self.supplier.supply(word_length, rng)?;
        if target.len() != word_length {
            return Err(GeneticError::InvalidGenomeLength {
                expected: word_length,
                actual: target.len(),
            });
        }

        let mut population = self.initial_population(options, seed, rng)?;

        if log_level != LogLevel::None {
            info!(
                word_length,
                population_size = options.get_population_size(),
                threshold = options.get_selection_threshold(),
                max_generations = options.get_max_generations(),
                "Starting search"
            );
        }

        let started = Instant::now();
        let mut best: Option<Candidate> = None;
        let mut generation = 0;

        loop {
            self.evaluate(options, &target, &mut population)?;

            if let Some(solution) = population.iter().find(|c| c.is_solution()) {
                if log_level != LogLevel::None {
                    info!(generation, solution = %solution, "Target found");
                }
                return Ok(EvolutionResult::Solved {
                    solution: solution.clone(),
                    generation,
                });
            }

            let generation_best = population
                .iter()
                .reduce(|acc, c| if c.score() > acc.score() { c } else { acc })
                .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
            if best
                .as_ref()
                .map_or(true, |b| generation_best.score() > b.score())
            {
                best = Some(generation_best.clone());
            }

            if log_level == LogLevel::Verbose {
                debug!(
                    generation,
                    best = %generation_best,
                    best_score = generation_best.score(),
                    "Generation evaluated"
                );
            }

            let generations = generation + 1;
            let reason = if generations >= options.get_max_generations() {
                Some(ExhaustionReason::Generations)
            } else {
                options
                    .get_time_budget()
                    .filter(|budget| started.elapsed() >= *budget)
                    .map(|_| ExhaustionReason::Time)
            };

            if let Some(reason) = reason {
                let best = best.ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
                if log_level != LogLevel::None {
                    info!(generations, best = %best, best_score = best.score(), ?reason, "Search budget exhausted");
                }
                return Ok(EvolutionResult::Exhausted {
                    best,
                    generations,
                    reason,
                });
            }

            population = self.next_generation(options, &mut population, generation, rng)?;
            generation += 1;
        }
    }

    /// Scores every candidate of `population` against `target`, in place.
    pub fn evaluate(
        &self,
        options: &EvolutionOptions,
        target: &Target,
        population: &mut [Candidate],
    ) -> Result<()> {
        if population.len() >= options.get_parallel_threshold() {
            population
                .par_iter_mut()
                .try_for_each(|candidate| self.challenge.score(target, candidate))?;
        } else {
            population
                .iter_mut()
                .try_for_each(|candidate| self.challenge.score(target, candidate))?;
        }

        if options.get_log_level() == LogLevel::Verbose {
            for candidate in population.iter() {
                trace!(candidate = %candidate, score = candidate.score(), child = candidate.is_child(), "Evaluated");
            }
        }
        Ok(())
    }

    /// Builds the next population from an evaluated one.
    ///
    /// Selected candidates are paired in order; each pair yields two children and an
    /// odd one out is carried over unchanged. When fewer than two candidates are
    /// selected the options' `DegenerateSelectionPolicy` applies. The result is
    /// always topped up with random candidates to the full population size.
    pub fn next_generation(
        &self,
        options: &EvolutionOptions,
        population: &mut [Candidate],
        generation: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Candidate>> {
        let threshold = options.get_selection_threshold();
        let parents = self.select(population, threshold);

        let mut offspring = match self.reproduce(&parents, threshold, rng) {
            Err(err @ GeneticError::DegenerateSelection { .. }) => {
                if options.get_log_level() != LogLevel::None {
                    warn!(generation, policy = ?options.get_degenerate_policy(), "{}", err);
                }
                self.recover(options, population, parents, rng)?
            }
            other => other?,
        };

        self.fill_population(options, &mut offspring, rng)?;
        Ok(offspring)
    }

    fn select(&self, population: &mut [Candidate], threshold: usize) -> Vec<Candidate> {
        population
            .iter_mut()
            .filter_map(|candidate| {
                self.selection.select(candidate, threshold);
                candidate.is_selected().then(|| candidate.clone())
            })
            .collect()
    }

    fn reproduce(
        &self,
        parents: &[Candidate],
        threshold: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Candidate>> {
        if parents.len() < 2 {
            return Err(GeneticError::DegenerateSelection {
                selected: parents.len(),
                threshold,
            });
        }

        let mut offspring = Vec::with_capacity(parents.len());
        let mut pairs = parents.chunks_exact(2);
        for pair in &mut pairs {
            let (first, second) = self.breed.recombine(&pair[0], &pair[1], rng)?;
            offspring.push(first);
            offspring.push(second);
        }
        if let [lone] = pairs.remainder() {
            let mut carried = lone.clone();
            carried.reset_evaluation();
            offspring.push(carried);
        }
        Ok(offspring)
    }

    fn recover(
        &self,
        options: &EvolutionOptions,
        population: &mut [Candidate],
        parents: Vec<Candidate>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Candidate>> {
        if options.get_degenerate_policy() == DegenerateSelectionPolicy::RelaxThreshold
            && population.len() >= 2
        {
            let mut scores: Vec<usize> = population.iter().map(Candidate::score).collect();
            scores.sort_unstable_by(|a, b| b.cmp(a));
            let relaxed = scores[1];
            let parents = self.select(population, relaxed);
            return self.reproduce(&parents, relaxed, rng);
        }

        Ok(parents
            .into_iter()
            .map(|mut carried| {
                carried.reset_evaluation();
                carried
            })
            .collect())
    }

    fn initial_population(
        &self,
        options: &EvolutionOptions,
        seed: Vec<Candidate>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Candidate>> {
        if seed.len() > options.get_population_size() {
            return Err(GeneticError::Configuration(format!(
                "Seed population of {} exceeds population size {}",
                seed.len(),
                options.get_population_size()
            )));
        }

        let mut population = seed;
        for candidate in population.iter_mut() {
            if candidate.len() != options.get_word_length() {
                return Err(GeneticError::InvalidGenomeLength {
                    expected: options.get_word_length(),
                    actual: candidate.len(),
                });
            }
            candidate.reset_evaluation();
        }

        self.fill_population(options, &mut population, rng)?;
        Ok(population)
    }

    fn fill_population(
        &self,
        options: &EvolutionOptions,
        population: &mut Vec<Candidate>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        let word_length = options.get_word_length();
        while population.len() < options.get_population_size() {
            let candidate = self.generator.generate(word_length, rng);
            if candidate.len() != word_length {
                return Err(GeneticError::InvalidGenomeLength {
                    expected: word_length,
                    actual: candidate.len(),
                });
            }
            population.push(candidate);
        }
        Ok(())
    }
}
