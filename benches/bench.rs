use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use twofft::{fft_iterative, fft_recursive, Complex64};
use utilities::gen_random_signal;

const LENGTHS: &[usize] = &[4, 6, 8, 10, 12, 14, 16];

fn generate_signal(n: usize) -> Vec<Complex64> {
    let mut signal = vec![Complex64::new(0.0, 0.0); n];
    gen_random_signal(&mut signal);
    signal
}

fn benchmark_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("forward");

    for &k in LENGTHS {
        let n = 1 << k;
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("recursive", n), &n, |b, &n| {
            b.iter_batched(
                || generate_signal(n),
                |signal| fft_recursive(&signal).unwrap(),
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("iterative", n), &n, |b, &n| {
            b.iter_batched(
                || generate_signal(n),
                |signal| fft_iterative(&signal).unwrap(),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_forward);
criterion_main!(benches);
