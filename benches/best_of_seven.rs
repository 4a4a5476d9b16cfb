use criterion::{criterion_group, criterion_main, Criterion};
use hand_ranker::core::parse_cards;
use hand_ranker::holdem::{best_five_of_seven, Player, Showdown};

fn bench_best_of_seven(c: &mut Criterion) {
    let pool = parse_cards("As Ah Kh Kc Qs Qd 2d").unwrap();
    c.bench_function("best_five_of_seven", |b| {
        b.iter(|| best_five_of_seven(std::hint::black_box(&pool)).unwrap());
    });
}

fn bench_showdown(c: &mut Criterion) {
    let community = parse_cards("Kh Kc Qs Qd 2d").unwrap().try_into().unwrap();
    let players = vec![
        Player::new("p1", parse_cards("As Ah").unwrap().try_into().unwrap()),
        Player::new("p2", parse_cards("Jh Jc").unwrap().try_into().unwrap()),
        Player::new("p3", parse_cards("9h 8h").unwrap().try_into().unwrap()),
    ];
    let showdown = Showdown::new(community, players);

    c.bench_function("showdown_three_players", |b| {
        b.iter(|| std::hint::black_box(&showdown).resolve().unwrap());
    });
}

criterion_group!(benches, bench_best_of_seven, bench_showdown);
criterion_main!(benches);
