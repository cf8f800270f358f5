use rand::SeedableRng;
use rand::rngs::StdRng;

use rs_markov_core::model::chain::Chain;
use rs_markov_core::{GenerationOptions, Order, generate, generate_with};

const EMPTY: [&str; 0] = [];

#[test]
fn empty_corpus_gives_empty_sentence() {
	let mut rng = StdRng::seed_from_u64(0);
	for order in Order::ALL {
		assert_eq!(generate(EMPTY, order, &mut rng), "");
		assert_eq!(generate(["", "  ", "\t"], order, &mut rng), "");
	}
}

#[test]
fn single_line_is_reproduced_for_every_order() {
	let mut rng = StdRng::seed_from_u64(1);
	for order in Order::ALL {
		for _ in 0..20 {
			assert_eq!(generate(["a b c"], order, &mut rng), "a b c");
		}
	}
}

#[test]
fn single_word_lines_are_fine() {
	let mut rng = StdRng::seed_from_u64(2);
	for order in Order::ALL {
		assert_eq!(generate(["hello"], order, &mut rng), "hello");
	}
}

#[test]
fn branching_is_roughly_even() {
	let corpus = ["a b", "a c"];
	let mut rng = StdRng::seed_from_u64(3);
	let trials = 2000;
	let mut b_count = 0;

	for _ in 0..trials {
		let sentence = generate(corpus, Order::One, &mut rng);
		let words: Vec<&str> = sentence.split(' ').collect();
		assert_eq!(words[0], "a");
		match words[1] {
			"b" => b_count += 1,
			"c" => {}
			other => panic!("unexpected word {other}"),
		}
	}

	// Expected 1000
	assert!((850..1150).contains(&b_count), "b picked {b_count} times out of {trials}");
}

#[test]
fn frequent_openers_are_preferred() {
	let corpus = ["x end", "x end", "x end", "y end"];
	let mut rng = StdRng::seed_from_u64(4);
	let x_count = (0..2000)
		.filter(|_| generate(corpus, Order::Two, &mut rng).starts_with('x'))
		.count();

	// Expected 1500
	assert!((1350..1650).contains(&x_count), "x opened {x_count} times");
}

#[test]
fn sentinel_bytes_never_reach_output() {
	let corpus = ["he\u{2}llo \u{3}wor\u{0}ld", "\u{2}\u{3} again\u{3}"];
	let mut rng = StdRng::seed_from_u64(5);
	for order in Order::ALL {
		for _ in 0..50 {
			let sentence = generate(corpus, order, &mut rng);
			assert!(
				!sentence.contains(['\u{0}', '\u{2}', '\u{3}']),
				"sentinel leaked into {sentence:?}"
			);
		}
	}
	assert_eq!(generate(["he\u{2}llo wor\u{3}ld"], Order::One, &mut rng), "hello world");
}

#[test]
fn sentinel_only_words_stay_as_empty_tokens() {
	let mut rng = StdRng::seed_from_u64(6);
	// The middle word becomes "", so joining yields a double space
	assert_eq!(generate(["a \u{2} b"], Order::Two, &mut rng), "a  b");
}

#[test]
fn construction_is_idempotent() {
	let corpus = ["the cat sat", "the dog sat down", "a cat ran", "the cat sat"];
	for order in Order::ALL {
		assert_eq!(Chain::build(corpus, order), Chain::build(corpus, order));
	}
}

#[test]
fn fixed_seed_is_deterministic() {
	let corpus = ["the cat sat on the mat", "the dog sat on the cat", "a mat is on the dog"];
	for order in Order::ALL {
		let first = generate(corpus, order, &mut StdRng::seed_from_u64(99));
		let second = generate(corpus, order, &mut StdRng::seed_from_u64(99));
		assert_eq!(first, second);
	}
}

#[test]
fn cyclic_corpus_still_halts() {
	// "a" and "b" feed each other, END is reachable from both
	let corpus = ["a b a b a b a", "b a b a b", "a a a a"];
	let mut rng = StdRng::seed_from_u64(7);
	for order in Order::ALL {
		for _ in 0..200 {
			let sentence = generate(corpus, order, &mut rng);
			assert!(sentence.split(' ').count() < 10_000);
		}
	}
}

#[test]
fn word_cap_bounds_any_walk() {
	let corpus = ["a a a a a a a a a a a a a a a a a a a a"];
	let mut options = GenerationOptions::new(Order::One);
	options.set_max_words(Some(3)).unwrap();
	let mut rng = StdRng::seed_from_u64(8);
	for _ in 0..50 {
		assert!(generate_with(&corpus[..], &options, &mut rng).split(' ').count() <= 3);
	}
}

#[test]
fn higher_orders_only_join_known_windows() {
	// With order 3 each window of three words is unique, so the walk is forced
	let corpus = ["one two three four", "five two three six"];
	let mut rng = StdRng::seed_from_u64(10);
	for _ in 0..50 {
		let sentence = generate(corpus, Order::Three, &mut rng);
		assert!(sentence == "one two three four" || sentence == "five two three six", "got {sentence}");
	}
}
