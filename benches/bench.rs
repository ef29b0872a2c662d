// Criterion benchmarks for Trek Match

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use trek_match::core::{match_destinations, planner::compare_routes, Matcher};
use trek_match::models::{BestMonth, Destination, Difficulty, DurationRange, GroupType, Month, Preferences, TravelStyle};
use trek_match::Catalog;

const ACTIVITIES: [&str; 4] = ["trekking", "sightseeing", "wildlife", "camping"];
const NATURE: [&str; 4] = ["mountains", "forests", "lakes", "rivers"];

fn create_destination(id: usize) -> Destination {
    Destination {
        name: format!("Destination {}", id),
        location: "Nepal".to_string(),
        image: String::new(),
        difficulty: Difficulty::ALL[id % 3],
        duration: DurationRange::new(1 + (id % 5) as u32, 6 + (id % 10) as u32),
        activities: vec![ACTIVITIES[id % 4].to_string(), ACTIVITIES[(id + 1) % 4].to_string()],
        nature_preferences: vec![NATURE[id % 4].to_string()],
        best_months: if id % 4 == 0 {
            vec![BestMonth::AllYearRound]
        } else {
            vec![BestMonth::Month(Month::October), BestMonth::Month(Month::April)]
        },
        group_friendly: id % 2 == 0,
        children_friendly: id % 3 == 0,
        eco_score: (id % 101) as u8,
        rating: 3.0 + (id % 20) as f64 / 10.0,
    }
}

fn create_preferences(travel_style: TravelStyle) -> Preferences {
    Preferences {
        activities: vec!["trekking".to_string(), "sightseeing".to_string()],
        nature_preferences: vec!["mountains".to_string(), "lakes".to_string()],
        duration: 7,
        group_type: GroupType::Couple,
        preferred_months: vec![Month::October],
        interests: vec!["Photography".to_string()],
        travel_style,
    }
}

fn bench_builtin_recommend(c: &mut Criterion) {
    let matcher = Matcher::with_builtin_catalog();
    let preferences = create_preferences(TravelStyle::EcoFriendly);

    c.bench_function("recommend_builtin_catalog", |b| {
        b.iter(|| matcher.recommend(black_box(&preferences), black_box(Some(20))).matches.len());
    });
}

fn bench_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("matching");

    for destination_count in [10, 100, 1000, 10000].iter() {
        let destinations: Vec<Destination> = (0..*destination_count).map(create_destination).collect();

        for style in [TravelStyle::EcoFriendly, TravelStyle::Luxury] {
            let preferences = create_preferences(style);
            group.bench_with_input(
                BenchmarkId::new(format!("match_destinations/{:?}", style), destination_count),
                destination_count,
                |b, _| {
                    b.iter(|| match_destinations(black_box(&destinations), black_box(&preferences)).len());
                },
            );
        }
    }

    group.finish();
}

fn bench_compare_routes(c: &mut Criterion) {
    let catalog = Catalog::builtin();

    c.bench_function("compare_routes_builtin", |b| {
        b.iter(|| compare_routes(black_box(catalog.treks())));
    });
}

criterion_group!(
    benches,
    bench_builtin_recommend,
    bench_matching,
    bench_compare_routes
);

criterion_main!(benches);
