// ============================================================================
// Fachwert Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Check Digits - Mod10 variants, Mod11 and Mod97 validation
// 2. Money Arithmetic - exact add, multiply and divide
// 3. Parsing and Formatting - text to amount and back
// 4. Packed Decimal - packing identifiers
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fachwert::prelude::*;
use rust_decimal::Decimal;
use std::hint::black_box;

// ============================================================================
// Check Digit Benchmarks
// ============================================================================

fn benchmark_check_digits(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_digits");

    let cases = [
        (CheckDigitType::luhn(), "4539578763621486"),
        (CheckDigitType::ean13(), "4006381333931"),
        (CheckDigitType::tax_id(), "86095742719"),
        (CheckDigitType::iban(), "DE68210501700012345678"),
    ];
    for (config, value) in cases {
        let scheme = create_from_config(&config).unwrap();
        group.bench_with_input(BenchmarkId::new("is_valid", scheme.name()), value, |b, value| {
            b.iter(|| black_box(scheme.is_valid(black_box(value))));
        });
    }

    // Mod97 on the longest IBANs
    let long_iban = "MT84MALT011000012345MTLCAST001S";
    group.bench_function("mod97_long", |b| {
        b.iter(|| black_box(Mod97::new().is_valid(black_box(long_iban))));
    });

    group.finish();
}

// ============================================================================
// Money Arithmetic Benchmarks
// ============================================================================

fn benchmark_money_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("money_arithmetic");

    let a = Money::new(Decimal::new(123_456, 2), Currency::EUR);
    let b = Money::new(Decimal::new(789, 2), Currency::EUR);
    let zero = Money::zero_in(Currency::EUR);

    group.bench_function("add", |bench| {
        bench.iter(|| black_box(a.add(black_box(&b)).unwrap()));
    });

    group.bench_function("add_zero", |bench| {
        bench.iter(|| black_box(a.add(black_box(&zero)).unwrap()));
    });

    group.bench_function("multiply", |bench| {
        bench.iter(|| black_box(a.multiply(black_box(Decimal::new(19, 2))).unwrap()));
    });

    group.bench_function("divide_exact", |bench| {
        bench.iter(|| black_box(a.divide(black_box(8)).unwrap()));
    });

    group.bench_function("divide_rounded", |bench| {
        bench.iter(|| black_box(a.divide_rounded(black_box(3), 2, RoundingMode::HalfUp).unwrap()));
    });

    group.bench_function("divide_and_remainder", |bench| {
        bench.iter(|| black_box(a.divide_and_remainder(black_box(7)).unwrap()));
    });

    group.finish();
}

// ============================================================================
// Parsing and Formatting Benchmarks
// ============================================================================

fn benchmark_parse_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_format");

    for text in ["12,50 EUR", "USD 1,234,567.89", "€ 1.234.567,89"] {
        group.bench_with_input(BenchmarkId::new("parse", text), text, |b, text| {
            b.iter(|| black_box(Money::parse(black_box(text)).unwrap()));
        });
    }

    let amount = Money::new(Decimal::new(123_456_789, 2), Currency::EUR);
    let formatter = MoneyFormatter::new(Locale::germany());
    group.bench_function("format_german", |b| {
        b.iter(|| black_box(formatter.format(black_box(&amount))));
    });

    group.bench_function("iban_new", |b| {
        b.iter(|| black_box(Iban::new(black_box("DE68 2105 0170 0012 3456 78")).unwrap()));
    });

    group.finish();
}

// ============================================================================
// Packed Decimal Benchmarks
// ============================================================================

fn benchmark_packed_decimal(c: &mut Criterion) {
    let mut group = c.benchmark_group("packed_decimal");

    for digits in [4usize, 11, 24] {
        let text: String = (0..digits).map(|i| char::from(b'0' + (i % 10) as u8)).collect();
        group.bench_with_input(BenchmarkId::new("pack", digits), &text, |b, text| {
            b.iter(|| black_box(text.parse::<PackedDecimal>().unwrap()));
        });

        let packed: PackedDecimal = text.parse().unwrap();
        group.bench_with_input(BenchmarkId::new("unpack", digits), &packed, |b, packed| {
            b.iter(|| black_box(packed.to_string()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_check_digits,
    benchmark_money_arithmetic,
    benchmark_parse_format,
    benchmark_packed_decimal,
);
criterion_main!(benches);
