use genword::{
    breeding::{BreedStrategy, UniformCrossover},
    candidate::Candidate,
    evolution::{Challenge, MysteryWordChallenge},
    generator::{CandidateGenerator, RandomWordGenerator},
    rng::RandomNumberGenerator,
    target::Target,
};
use proptest::prelude::*;

fn word(length: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(b'a'..=b'z', length)
        .prop_map(|bytes| bytes.into_iter().map(char::from).collect())
}

fn word_pair() -> impl Strategy<Value = (String, String)> {
    (1usize..40).prop_flat_map(|length| (word(length), word(length)))
}

proptest! {
    #[test]
    fn evaluating_a_word_against_itself_is_a_solution(value in (1usize..40).prop_flat_map(word)) {
        let target = Target::new(&value, value.len()).unwrap();
        let mut candidate = Candidate::new(&value).unwrap();
        MysteryWordChallenge.score(&target, &mut candidate).unwrap();

        prop_assert_eq!(candidate.score(), value.len());
        prop_assert!(candidate.is_solution());
    }

    #[test]
    fn score_stays_within_word_length((target, value) in word_pair()) {
        let target = Target::new(&target, target.len()).unwrap();
        let mut candidate = Candidate::new(&value).unwrap();
        MysteryWordChallenge.score(&target, &mut candidate).unwrap();

        prop_assert!(candidate.score() <= value.len());
        prop_assert_eq!(candidate.is_solution(), candidate.score() == value.len());
    }

    #[test]
    fn crossover_hands_out_both_parent_letters(
        (first, second) in word_pair(),
        seed in any::<u64>()
    ) {
        let mut rng = RandomNumberGenerator::from_seed(seed);
        let parent_a = Candidate::new(&first).unwrap();
        let parent_b = Candidate::new(&second).unwrap();

        let (child_a, child_b) = UniformCrossover.recombine(&parent_a, &parent_b, &mut rng).unwrap();

        prop_assert_eq!(child_a.len(), parent_a.len());
        prop_assert_eq!(child_b.len(), parent_a.len());
        for i in 0..parent_a.len() {
            let mut children = [child_a.genes()[i], child_b.genes()[i]];
            let mut parents = [parent_a.genes()[i], parent_b.genes()[i]];
            children.sort_unstable();
            parents.sort_unstable();
            prop_assert_eq!(children, parents);
        }
    }

    #[test]
    fn generated_words_have_requested_length(length in 1usize..100, seed in any::<u64>()) {
        let mut rng = RandomNumberGenerator::from_seed(seed);
        let candidate = RandomWordGenerator.generate(length, &mut rng);
        prop_assert_eq!(candidate.len(), length);
        prop_assert!(candidate.genes().iter().all(u8::is_ascii_lowercase));
    }
}
