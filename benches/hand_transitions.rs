use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_truco::bot::{HandDriver, RandomBot, DEFAULT_MAX_STEPS};
use rust_truco::{Action, Card, Deck, GameRng, Hand, Player};

fn card(s: &str) -> Card {
    s.parse().unwrap()
}

fn fixed_hand() -> Hand {
    let first = Player::new("Ana").with_cards([card("3C"), card("2S"), card("AH")]);
    let last = Player::new("Bia").with_cards([card("KD"), card("JC"), card("7H")]);
    Hand::new(first, last, card("4D")).unwrap()
}

fn bench_single_transition(c: &mut Criterion) {
    let hand = fixed_hand();
    let first = hand.first_to_play();

    c.bench_function("apply_play_first_card", |b| {
        b.iter(|| black_box(hand.apply(first, black_box(Action::PlayFirstCard(card("3C"))))));
    });

    c.bench_function("apply_raise", |b| {
        b.iter(|| black_box(hand.apply(first, black_box(Action::Raise))));
    });
}

fn bench_full_hand(c: &mut Criterion) {
    c.bench_function("random_bots_full_hand", |b| {
        let rng = GameRng::new(7);
        let mut n = 0;
        b.iter(|| {
            n += 1;
            let mut deck = Deck::shuffled(&mut rng.for_hand(n));
            let hand = Hand::deal(Player::bot("A"), Player::bot("B"), &mut deck).unwrap();
            let mut driver =
                HandDriver::new(hand, Box::new(RandomBot::new(n)), Box::new(RandomBot::new(!n)));
            black_box(driver.run(DEFAULT_MAX_STEPS))
        });
    });
}

criterion_group!(benches, bench_single_transition, bench_full_hand);
criterion_main!(benches);
