/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use crate::ByteTrie;
use criterion::{BatchSize, BenchmarkGroup, Criterion, measurement::Measurement};
use std::{collections::BTreeSet, hint::black_box, time::Duration};

/// A helper struct for benchmarking operations on a trie against
/// a [`BTreeSet`] holding the same words.
pub struct OperationBencher {
    prefix: String,
    trie: ByteTrie,
    set: BTreeSet<Vec<u8>>,
    words: Vec<Vec<u8>>,
    measurement_time: Option<Duration>,
}

impl OperationBencher {
    /// Initialize a new bencher by loading the same corpus of words
    /// into each collection.
    ///
    /// `prefix` is prepended to the label of every benchmark group.
    pub fn new(prefix: String, words: Vec<String>, measurement_time: Option<Duration>) -> Self {
        let words = words
            .into_iter()
            .map(String::into_bytes)
            .collect::<Vec<_>>();
        let trie = trie_load(&words);
        let set = set_load(&words);

        Self {
            prefix,
            trie,
            set,
            words,
            measurement_time,
        }
    }

    fn benchmark_group<'a>(
        &self,
        c: &'a mut Criterion,
        label: &str,
    ) -> BenchmarkGroup<'a, criterion::measurement::WallTime> {
        let mut group = c.benchmark_group(format!("{}|{}", self.prefix, label));
        if let Some(measurement_time) = self.measurement_time {
            group.measurement_time(measurement_time);
        }
        group
    }

    /// Benchmark the find operation.
    ///
    /// The benchmark group will be marked with the given label.
    pub fn find_group(&self, c: &mut Criterion, word: &str, label: &str) {
        let mut group = self.benchmark_group(c, label);
        find_trie_benchmark(&mut group, &self.trie, word);
        find_set_benchmark(&mut group, &self.set, word);
        group.finish();
    }

    /// Benchmark the insert operation.
    ///
    /// The benchmark group will be marked with the given label.
    pub fn insert_group(&self, c: &mut Criterion, word: &str, label: &str) {
        let mut group = self.benchmark_group(c, label);
        insert_trie_benchmark(&mut group, &self.trie, word);
        insert_set_benchmark(&mut group, &self.set, word);
        group.finish();
    }

    /// Benchmark the removal operation.
    ///
    /// The benchmark group will be marked with the given label.
    pub fn remove_group(&self, c: &mut Criterion, word: &str, label: &str) {
        let mut group = self.benchmark_group(c, label);
        remove_trie_benchmark(&mut group, &self.trie, word);
        remove_set_benchmark(&mut group, &self.set, word);
        group.finish();
    }

    /// Benchmark loading the whole corpus of words.
    pub fn load_group(&self, c: &mut Criterion) {
        let mut group = self.benchmark_group(c, "Load");
        group.bench_function("Trie", |b| {
            b.iter_batched(
                || self.words.clone(),
                |data| trie_load(black_box(&data)),
                BatchSize::LargeInput,
            )
        });
        group.bench_function("BTreeSet", |b| {
            b.iter_batched(
                || self.words.clone(),
                |data| set_load(black_box(&data)),
                BatchSize::LargeInput,
            )
        });
        group.finish();
    }

    /// Benchmark collecting every stored string.
    pub fn iter_group(&self, c: &mut Criterion) {
        let mut group = self.benchmark_group(c, "Iterate");
        group.bench_function("Trie", |b| {
            b.iter(|| black_box(&self.trie).iter().count())
        });
        group.bench_function("BTreeSet", |b| {
            b.iter(|| black_box(&self.set).iter().count())
        });
        group.finish();
    }

    /// Benchmark deep-copying the collection.
    pub fn clone_group(&self, c: &mut Criterion) {
        let mut group = self.benchmark_group(c, "Clone");
        group.bench_function("Trie", |b| b.iter(|| black_box(&self.trie).clone()));
        group.bench_function("BTreeSet", |b| b.iter(|| black_box(&self.set).clone()));
        group.finish();
    }
}

fn find_trie_benchmark<M: Measurement>(
    c: &mut BenchmarkGroup<'_, M>,
    trie: &ByteTrie,
    word: &str,
) {
    let word = word.as_bytes();
    c.bench_function("Trie", |b| {
        b.iter(|| trie.find(black_box(word)).is_some())
    });
}

fn find_set_benchmark<M: Measurement>(
    c: &mut BenchmarkGroup<'_, M>,
    set: &BTreeSet<Vec<u8>>,
    word: &str,
) {
    let word = word.as_bytes();
    c.bench_function("BTreeSet", |b| b.iter(|| set.contains(black_box(word))));
}

fn insert_trie_benchmark<M: Measurement>(
    c: &mut BenchmarkGroup<'_, M>,
    trie: &ByteTrie,
    word: &str,
) {
    let word = word.as_bytes();
    c.bench_function("Trie", |b| {
        b.iter_batched_ref(
            || trie.clone(),
            |data| data.insert(black_box(word)).is_some(),
            BatchSize::LargeInput,
        )
    });
}

fn insert_set_benchmark<M: Measurement>(
    c: &mut BenchmarkGroup<'_, M>,
    set: &BTreeSet<Vec<u8>>,
    word: &str,
) {
    let word = word.as_bytes();
    c.bench_function("BTreeSet", |b| {
        b.iter_batched_ref(
            || set.clone(),
            |data| data.insert(black_box(word.to_vec())),
            BatchSize::LargeInput,
        )
    });
}

fn remove_trie_benchmark<M: Measurement>(
    c: &mut BenchmarkGroup<'_, M>,
    trie: &ByteTrie,
    word: &str,
) {
    let word = word.as_bytes();
    c.bench_function("Trie", |b| {
        b.iter_batched_ref(
            || trie.clone(),
            |data| data.remove(black_box(word)).is_some(),
            BatchSize::LargeInput,
        )
    });
}

fn remove_set_benchmark<M: Measurement>(
    c: &mut BenchmarkGroup<'_, M>,
    set: &BTreeSet<Vec<u8>>,
    word: &str,
) {
    let word = word.as_bytes();
    c.bench_function("BTreeSet", |b| {
        b.iter_batched_ref(
            || set.clone(),
            |data| data.remove(black_box(word)),
            BatchSize::LargeInput,
        )
    });
}

fn trie_load(words: &[Vec<u8>]) -> ByteTrie {
    words.iter().cloned().collect()
}

fn set_load(words: &[Vec<u8>]) -> BTreeSet<Vec<u8>> {
    words.iter().cloned().collect()
}
