use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use studyplan::domain::{Curriculum, Difficulty, ModeCatalog, SignalSet, SpeedCategory, TopicEntry};
use studyplan::planner::{FixedMessage, PlanRequest, PlannerSettings, generate_plan};

fn large_curriculum(chapters: usize, topics_per_chapter: usize) -> Curriculum {
    (0..chapters).fold(Curriculum::new(), |curriculum, c| {
        let topics = (0..topics_per_chapter)
            .map(|t| {
                let difficulty = Difficulty::ALL[(c + t) % 3];
                TopicEntry::new(format!("topic {}-{}", c, t), difficulty, 20.0 + (t % 5) as f64 * 10.0)
            })
            .collect();
        curriculum.with_chapter(format!("chapter {}", c), topics)
    })
}

fn bench_generate_plan(c: &mut Criterion) {
    let curriculum = large_curriculum(40, 25);
    let mode = ModeCatalog::default().resolve("aggressive").expect("default mode");
    let request = PlanRequest {
        subject: "Bench",
        curriculum: &curriculum,
        signals: SignalSet::new(SpeedCategory::Slow, 0.7).expect("finite weakness"),
        mode: &mode,
        exam_date: NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid date"),
        start_date: NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date"),
    };
    let settings = PlannerSettings::default();

    c.bench_function("generate_plan_1000_topics", |b| {
        b.iter(|| {
            let plan = generate_plan(black_box(&request), &settings, &mut FixedMessage::default()).expect("plan");
            black_box(plan)
        })
    });
}

criterion_group!(benches, bench_generate_plan);
criterion_main!(benches);
