use criterion::{BenchmarkGroup, Criterion, black_box};
use fastmodf as fastlibm;

use bench_util::{configure_criterion, gen_bits, gen_range, glibc_modf};

fn bench_modf_group(
    group: &mut BenchmarkGroup<'_, criterion::measurement::WallTime>,
    inputs: &[f64],
) {
    group.bench_function("fastlibm", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in inputs {
                let (int, frac) = fastlibm::modf(black_box(x));
                acc += int + frac;
            }
            black_box(acc)
        })
    });
    group.bench_function("fastlibm_assign", |b| {
        let mut out = vec![0.0; 2 * inputs.len()];
        b.iter(|| {
            let n = inputs.len();
            for (i, &x) in inputs.iter().enumerate() {
                // integral parts in the first half, fractional parts in the second
                fastlibm::modf_assign(black_box(x), &mut out, n as isize, i);
            }
            black_box(&out);
        })
    });
    group.bench_function("glibc", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &x in inputs {
                let (int, frac) = glibc_modf(black_box(x));
                acc += int + frac;
            }
            black_box(acc)
        })
    });
}

fn bench_modf(c: &mut Criterion) {
    let inputs = [-10.5, -1.5, -0.0, 0.0, 0.5, 1.5, 10.25, 100.75];
    let common = gen_range(1024, -100.0, 100.0, 0x1b01);
    let wide = gen_range(1024, -1.0e16, 1.0e16, 0x1b02);
    let bits = gen_bits(1024, 0x1b03);

    let mut group = c.benchmark_group("modf/smoke");
    bench_modf_group(&mut group, &inputs);
    group.finish();

    let mut group = c.benchmark_group("modf/common");
    bench_modf_group(&mut group, &common);
    group.finish();

    let mut group = c.benchmark_group("modf/wide");
    bench_modf_group(&mut group, &wide);
    group.finish();

    let mut group = c.benchmark_group("modf/bits");
    bench_modf_group(&mut group, &bits);
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_modf(&mut c);
    c.final_summary();
}
