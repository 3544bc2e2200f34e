mod utils;

use anchor_array::SuffixIndex;
use criterion::{criterion_group, criterion_main, Criterion};
use utils::*;

const SIZES: &[usize] = &[4096, 65536, 1_048_576];
const PATTERN_LENGTHS: &[usize] = &[8, 128];

fn sa_contains(crit: &mut Criterion) {
    search_bench(crit, "contains", |index, pattern| {
        index.contains(pattern);
    });
}

fn sa_locate(crit: &mut Criterion) {
    search_bench(crit, "locate", |index, pattern| {
        index.locate(pattern);
    });
}

fn search_bench(crit: &mut Criterion, label: &str, op: fn(&SuffixIndex, &[u8])) {
    for &slen in SIZES {
        let text = random_dna(slen);
        let index = SuffixIndex::build(text.clone()).unwrap();

        for &plen in PATTERN_LENGTHS {
            let pattern = sample_pattern(&text, plen);
            let bench_name = format!("{} {}b~{}b", label, slen, plen);

            set_criterion_samples(crit, calc_samples(slen));

            let index = index.clone();
            crit.bench_function(bench_name.as_ref(), move |b| {
                b.iter(|| op(&index, &pattern));
            });
        }
    }
}

criterion_group!(sa_search_benches, sa_contains, sa_locate);
criterion_main!(sa_search_benches);
