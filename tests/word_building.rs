use std::collections::HashSet;

use egui::{Pos2, Rect, Vec2};
use letter_wheel::geometry::MeasuredLayout;
use letter_wheel::renderer::Renderer;
use letter_wheel::state::{ClickOutcome, Session};
use letter_wheel::token::TokenId;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn token_for(session: &Session, letter: char) -> TokenId {
    session
        .tokens()
        .iter()
        .find(|t| t.letter() == letter)
        .map(|t| t.id())
        .unwrap()
}

fn assert_consistent(session: &Session) {
    let order = session.click_order();
    let as_set: HashSet<TokenId> = order.iter().copied().collect();
    assert_eq!(as_set, session.used_ids());
    assert_eq!(as_set.len(), order.len());

    let word: Vec<char> = session.built_word().chars().collect();
    assert_eq!(word.len(), order.len());
    for (id, letter) in order.iter().zip(word) {
        let token = session.tokens().iter().find(|t| t.id() == *id).unwrap();
        assert_eq!(token.letter(), letter);
    }
}

#[test]
fn test_cat_example() {
    let mut session = Session::with_seed(17);
    session.set_input("cat");
    assert_eq!(session.tokens().len(), 3);

    let (c, a, t) = (token_for(&session, 'c'), token_for(&session, 'a'), token_for(&session, 't'));
    for id in [c, a, t] {
        assert_eq!(session.click(id), ClickOutcome::Appended);
    }
    assert_eq!(session.built_word(), "cat");
    assert!(session.is_complete());

    assert_eq!(session.click(c), ClickOutcome::Rewound { discarded: 2 });
    assert_eq!(session.click_order(), &[c]);
    assert_eq!(session.built_word(), "c");
}

#[test]
fn test_rewind_to_first_then_again() {
    let mut session = Session::with_seed(4);
    session.set_input("stone");
    let ids: Vec<TokenId> = session.tokens().iter().map(|t| t.id()).collect();

    session.click(ids[3]);
    session.click(ids[0]);
    session.click(ids[1]);

    session.click(ids[3]);
    assert_eq!(session.click_order(), &[ids[3]]);
    session.click(ids[3]);
    assert_eq!(session.click_order(), &[ids[3]]);
}

#[test]
fn test_repeated_letters_are_distinct() {
    let mut session = Session::with_seed(8);
    session.set_input("aaa");
    let ids: Vec<TokenId> = session.tokens().iter().map(|t| t.id()).collect();

    for id in &ids {
        assert_eq!(session.click(*id), ClickOutcome::Appended);
    }
    assert_eq!(session.built_word(), "aaa");

    session.click(ids[1]);
    assert_eq!(session.built_word(), "aa");
}

#[test]
fn test_random_click_sequences_keep_invariants() {
    let mut rng = StdRng::seed_from_u64(1234);
    let mut session = Session::with_seed(1234);
    session.set_input("abracadabra");
    let ids: Vec<TokenId> = session.tokens().iter().map(|t| t.id()).collect();

    for _ in 0..500 {
        let id = ids[rng.gen_range(0..ids.len())];
        let before = session.click_order().to_vec();

        match session.click(id) {
            ClickOutcome::Appended => {
                assert!(!before.contains(&id));
                assert_eq!(session.click_order().len(), before.len() + 1);
                assert_eq!(session.click_order().last(), Some(&id));
            }
            ClickOutcome::Rewound { discarded } => {
                let index = before.iter().position(|clicked| *clicked == id).unwrap();
                assert_eq!(session.click_order().len(), index + 1);
                assert_eq!(discarded, before.len() - index - 1);
                assert_eq!(session.click_order(), &before[..=index]);
            }
            ClickOutcome::Ignored => panic!("current ids are never ignored"),
        }
        assert_consistent(&session);
    }
}

/// Measures every letter as the renderer would lay it out in a 400px wheel
fn measure(session: &mut Session) {
    let container = Rect::from_min_size(Pos2::ZERO, Vec2::splat(400.0));
    let mut layout = MeasuredLayout::new(container);
    for token in session.tokens() {
        let center = Renderer::letter_center(container, token.angle());
        layout.record(token.id(), Rect::from_center_size(center, Vec2::splat(48.0)));
    }
    let ticket = session.pending_measurement().unwrap();
    assert!(session.apply_measurement(ticket, &layout));
}

fn click_first_two(session: &mut Session) {
    let ids: Vec<TokenId> = session.tokens().iter().take(2).map(|t| t.id()).collect();
    for id in ids {
        session.click(id);
    }
}

#[test]
fn test_reset_on_shuffle_and_clear() {
    let mut session = Session::with_seed(21);
    session.set_input("reset");
    measure(&mut session);
    click_first_two(&mut session);

    assert_eq!(session.positions().len(), 5);
    assert_eq!(session.geometry().markers.len(), 2);
    assert_eq!(session.geometry().segments.len(), 1);
    assert_eq!(session.built_word().len(), 2);

    assert!(session.shuffle());
    assert!(session.click_order().is_empty());
    assert!(session.used_ids().is_empty());
    assert!(session.built_word().is_empty());
    assert!(session.positions().is_empty());
    assert!(session.geometry().is_empty());
    assert_eq!(session.tokens().len(), 5);

    measure(&mut session);
    click_first_two(&mut session);
    assert!(!session.positions().is_empty());
    assert!(!session.geometry().is_empty());

    session.clear();
    assert!(session.tokens().is_empty());
    assert!(session.click_order().is_empty());
    assert!(session.used_ids().is_empty());
    assert!(session.built_word().is_empty());
    assert!(session.positions().is_empty());
    assert!(session.geometry().is_empty());
    assert!(!session.can_shuffle());
}

#[test]
fn test_input_is_filtered() {
    let mut session = Session::with_seed(0);
    session.set_input("Hi, there 42");
    assert_eq!(session.input(), "hithere");
    assert_eq!(session.tokens().len(), 7);

    session.set_input("123");
    assert_eq!(session.input(), "");
    assert!(session.tokens().is_empty());
}
