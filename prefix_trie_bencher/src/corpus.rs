/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Deterministic word lists to load into the benchmarked collections.
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Letters are drawn from a small alphabet, most frequent first,
/// so that generated words share long prefixes.
const LETTERS: &[u8] = b"etaoinshrd";

/// The kind of corpus to generate.
#[derive(Debug, Clone, Copy)]
pub enum CorpusType {
    /// A thousand short words.
    Small,
    /// Fifty thousand words, some of them long.
    Large,
}

impl CorpusType {
    fn n_words(self) -> usize {
        match self {
            CorpusType::Small => 1_000,
            CorpusType::Large => 50_000,
        }
    }

    fn max_len(self) -> usize {
        match self {
            CorpusType::Small => 8,
            CorpusType::Large => 24,
        }
    }

    /// Generate the words of this corpus.
    ///
    /// The same corpus type always yields the same words, in the same order.
    /// Duplicates are kept.
    pub fn create_words(self) -> Vec<String> {
        let mut rng = StdRng::seed_from_u64(0x7269_6531);
        (0..self.n_words())
            .map(|_| random_word(&mut rng, self.max_len()))
            .collect()
    }
}

fn random_word(rng: &mut StdRng, max_len: usize) -> String {
    let len = rng.gen_range(1..=max_len);
    (0..len)
        .map(|_| {
            // Skewed towards the first letters of the alphabet.
            let a = rng.gen_range(0..LETTERS.len());
            let b = rng.gen_range(0..LETTERS.len());
            char::from(LETTERS[a.min(b)])
        })
        .collect()
}
