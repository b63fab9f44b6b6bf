use entropass::Error;
use entropass::pass::{Alphabet, CharClass, Generator, MAX_RUN, PADDING, generate_batch};
use entropass::rand::Urandom;

fn generator() -> Generator<Urandom> {
    Generator::new(Alphabet::standard(), Urandom::open().unwrap())
}

fn classes(alphabet: &Alphabet, password: &str) -> Vec<CharClass> {
    password
        .bytes()
        .map(|b| alphabet.class_of(b).expect("character outside alphabet"))
        .collect()
}

#[test]
fn length_meets_entropy_target() {
    let mut g = generator();
    let bits_per_char = 94f64.log2();
    for bits in [1.0, 8.0, 40.0, 50.0, 64.0, 100.0, 200.0] {
        let min = (bits / bits_per_char).ceil() as usize;
        for _ in 0..25 {
            let p = g.generate(bits).unwrap();
            assert!(p.length() >= min);
            assert!(p.length() <= min + PADDING);
            assert!(p.entropy() as f64 >= bits.floor());
        }
    }
}

#[test]
fn structural_invariants_at_50_bits() {
    let mut g = generator();
    let batch = generate_batch(&mut g, 500, 50.0).unwrap();
    for p in &batch {
        let bytes = p.password().as_bytes();
        for w in bytes.windows(2) {
            assert!(!w[0].eq_ignore_ascii_case(&w[1]), "{}", p.password());
        }
        for w in classes(g.alphabet(), p.password()).windows(MAX_RUN + 1) {
            assert!(w.iter().any(|&c| c != w[0]), "{}", p.password());
        }
        assert_eq!(p.entropy(), (p.length() as f64 * 94f64.log2()).floor() as u32);
    }

    let first = batch[0].password();
    assert!(batch.iter().any(|p| p.password() != first));
}

#[test]
fn every_class_shows_up() {
    let mut g = generator();
    let batch = generate_batch(&mut g, 50, 128.0).unwrap();
    let mut seen = [false; 4];
    for p in &batch {
        for class in classes(g.alphabet(), p.password()) {
            seen[CharClass::ALL.iter().position(|&c| c == class).unwrap()] = true;
        }
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn forty_bits_gives_seven_to_nine() {
    let mut g = generator();
    let mut lengths = std::collections::HashSet::new();
    for _ in 0..300 {
        let p = g.generate(40.0).unwrap();
        assert!((7..=9).contains(&p.length()));
        lengths.insert(p.length());
    }
    assert_eq!(lengths.len(), 3);
}

#[test]
fn non_positive_entropy_is_invalid() {
    let mut g = generator();
    assert!(matches!(g.generate(0.0), Err(Error::InvalidEntropyRequest(_))));
    assert!(matches!(g.generate(-8.0), Err(Error::InvalidEntropyRequest(_))));
}

#[test]
fn first_character_is_uniform() {
    // The first character is never rejected, so it follows the raw draw.
    const SAMPLES: usize = 94_000;
    let mut g = generator();
    let alphabet = Alphabet::standard();
    let mut per_char = std::collections::HashMap::new();
    let mut per_class = [0usize; 4];

    for _ in 0..SAMPLES {
        let p = g.generate_exact(1).unwrap();
        let byte = p.password().as_bytes()[0];
        let class = alphabet.class_of(byte).unwrap();
        per_class[CharClass::ALL.iter().position(|&c| c == class).unwrap()] += 1;
        *per_char.entry(byte).or_insert(0usize) += 1;
    }

    let class_expected = SAMPLES as f64 / 4.0;
    for count in per_class {
        let ratio = count as f64 / class_expected;
        assert!((0.95..1.05).contains(&ratio), "class ratio {ratio}");
    }

    for class in CharClass::ALL {
        let members = alphabet.class(class);
        let expected = class_expected / members.len() as f64;
        for b in members {
            let count = per_char.get(b).copied().unwrap_or(0) as f64;
            let ratio = count / expected;
            assert!((0.75..1.25).contains(&ratio), "{:?} ratio {ratio}", *b as char);
        }
    }
}
