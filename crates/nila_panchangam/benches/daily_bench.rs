use criterion::{Criterion, black_box, criterion_group, criterion_main};

use nila_ephem::AnalyticEphemeris;
use nila_panchangam::{DailyRequest, ReportOptions, daily, tithi_at};
use nila_vedic::FestivalCatalog;

fn bench_daily(c: &mut Criterion) {
    let eph = AnalyticEphemeris::new();
    let catalog = FestivalCatalog::builtin();
    let request = DailyRequest {
        date: "2025-01-15".to_string(),
        latitude: 13.0827,
        longitude: 80.2707,
        timezone: "Asia/Kolkata".to_string(),
        birth_nakshatra: Some("Rohini".to_string()),
    };

    c.bench_function("daily_report_chennai", |b| {
        b.iter(|| {
            daily(
                black_box(&eph),
                black_box(&catalog),
                &ReportOptions::default(),
                black_box(&request),
            )
            .unwrap()
        })
    });

    c.bench_function("tithi_boundary_search", |b| {
        b.iter(|| tithi_at(black_box(&eph), black_box(2_460_690.543)).unwrap())
    });
}

criterion_group!(benches, bench_daily);
criterion_main!(benches);
