use crate::{
    breeding::{BreedStrategy, UniformCrossover},
    generator::{CandidateGenerator, RandomWordGenerator},
    selection::{SelectionStrategy, ThresholdSelection},
    target::{Dictionary, DictionaryTarget, TargetSupplier},
};

use super::{
    challenge::{Challenge, MysteryWordChallenge},
    EvolutionLauncher,
};

/// The launcher assembled from the crate's own operators.
pub type StandardLauncher = EvolutionLauncher<
    DictionaryTarget,
    MysteryWordChallenge,
    ThresholdSelection,
    UniformCrossover,
    RandomWordGenerator,
>;

/// Assembles an `EvolutionLauncher`.
///
/// Starts from the standard operators (an empty dictionary, positional scoring,
/// threshold selection, uniform crossover, random words); each `with_*` call
/// swaps one part out.
///
/// ```rust
/// use genword::evolution::builder::EvolutionLauncherBuilder;
/// use genword::target::{Dictionary, RandomTarget};
///
/// let mut dictionary = Dictionary::new();
/// dictionary.insert(3, "cat").unwrap();
///
/// let standard = EvolutionLauncherBuilder::new().with_dictionary(dictionary).build();
/// let random = EvolutionLauncherBuilder::new().with_target_supplier(RandomTarget).build();
/// ```
#[derive(Debug, Clone)]
pub struct EvolutionLauncherBuilder<T, C, S, B, G> {
    supplier: T,
    challenge: C,
    selection: S,
    breed: B,
    generator: G,
}

impl EvolutionLauncherBuilder<
    DictionaryTarget,
    MysteryWordChallenge,
    ThresholdSelection,
    UniformCrossover,
    RandomWordGenerator,
>
{
    pub fn new() -> Self {
        Self {
            supplier: DictionaryTarget::default(),
            challenge: MysteryWordChallenge,
            selection: ThresholdSelection,
            breed: UniformCrossover,
            generator: RandomWordGenerator,
        }
    }
}

impl Default
    for EvolutionLauncherBuilder<
        DictionaryTarget,
        MysteryWordChallenge,
        ThresholdSelection,
        UniformCrossover,
        RandomWordGenerator,
    >
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C, S, B, G> EvolutionLauncherBuilder<T, C, S, B, G>
where
    T: TargetSupplier,
    C: Challenge,
    S: SelectionStrategy,
    B: BreedStrategy,
    G: CandidateGenerator,
{
    /// Serves targets from `dictionary`, falling back to random words.
    pub fn with_dictionary(
        self,
        dictionary: Dictionary,
    ) -> EvolutionLauncherBuilder<DictionaryTarget, C, S, B, G> {
        self.with_target_supplier(DictionaryTarget::new(dictionary))
    }

    pub fn with_target_supplier<T2: TargetSupplier>(
        self,
        supplier: T2,
    ) -> EvolutionLauncherBuilder<T2, C, S, B, G> {
        EvolutionLauncherBuilder {
            supplier,
            challenge: self.challenge,
            selection: self.selection,
            breed: self.breed,
            generator: self.generator,
        }
    }

    pub fn with_challenge<C2: Challenge>(
        self,
        challenge: C2,
    ) -> EvolutionLauncherBuilder<T, C2, S, B, G> {
        EvolutionLauncherBuilder {
            supplier: self.supplier,
            challenge,
            selection: self.selection,
            breed: self.breed,
            generator: self.generator,
        }
    }

    pub fn with_selection_strategy<S2: SelectionStrategy>(
        self,
        selection: S2,
    ) -> EvolutionLauncherBuilder<T, C, S2, B, G> {
        EvolutionLauncherBuilder {
            supplier: self.supplier,
            challenge: self.challenge,
            selection,
            breed: self.breed,
            generator: self.generator,
        }
    }

    pub fn with_breed_strategy<B2: BreedStrategy>(
        self,
        breed: B2,
    ) -> EvolutionLauncherBuilder<T, C, S, B2, G> {
        EvolutionLauncherBuilder {
            supplier: self.supplier,
            challenge: self.challenge,
            selection: self.selection,
            breed,
            generator: self.generator,
        }
    }

    pub fn with_generator<G2: CandidateGenerator>(
        self,
        generator: G2,
    ) -> EvolutionLauncherBuilder<T, C, S, B, G2> {
        EvolutionLauncherBuilder {
            supplier: self.supplier,
            challenge: self.challenge,
            selection: self.selection,
            breed: self.breed,
            generator,
        }
    }

    pub fn build(self) -> EvolutionLauncher<T, C, S, B, G> {
        EvolutionLauncher::new(
            self.supplier,
            self.challenge,
            self.selection,
            self.breed,
            self.generator,
        )
    }
}
