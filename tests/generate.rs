use std::collections::HashSet;

use coverpass::charset::{self, covers_all};
use coverpass::{
    Category, Error, LENGTH_RANGE, MIN_LENGTH, SecureSource, SystemSource, generate,
    generate_password, generate_password_with, generate_with, secure_shuffle, secure_shuffle_with,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Counts draws and always answers with the largest allowed value.
#[derive(Default)]
struct MaxSource {
    draws: usize,
}

impl SecureSource for MaxSource {
    fn below(&mut self, bound: usize) -> usize {
        self.draws += 1;
        bound - 1
    }
}

#[test]
fn generated_passwords_cover_every_category() {
    for length in [4, 5, 8, 12, 16, 33, 128] {
        let password = generate(length).unwrap();
        assert_eq!(password.len(), length);
        assert!(covers_all(&password), "{password}");
        for category in Category::ALL {
            assert!(
                password.chars().any(|c| Category::of(c) == Some(category)),
                "no {} in {password}",
                category.name()
            );
        }
    }
}

#[test]
fn invalid_length_consumes_no_randomness() {
    for length in 0..MIN_LENGTH {
        let mut source = MaxSource::default();
        assert_eq!(
            generate_with(length, &mut source),
            Err(Error::InvalidLength {
                length,
                minimum: MIN_LENGTH
            })
        );
        assert_eq!(source.draws, 0);
    }
}

#[test]
fn draw_count_matches_assembly() {
    // 4 seeds + (n - 4) fillers + (n - 1) shuffle swaps
    for length in [4, 10, 40] {
        let mut source = MaxSource::default();
        let password = generate_with(length, &mut source).unwrap();
        assert_eq!(password.len(), length);
        assert_eq!(source.draws, 2 * length - 1);
    }
}

#[test]
fn max_source_picks_last_members() {
    // Seeds '9' 'Z' 'z' '?' then fillers '?' from the pool's last slot.
    // Every shuffle draw is j = i, so nothing moves.
    let mut source = MaxSource::default();
    let password = generate_with(6, &mut source).unwrap();
    assert_eq!(password, "9Zz???");
}

#[test]
fn default_lengths_stay_in_range() {
    let mut seen = HashSet::new();
    for _ in 0..300 {
        let password = generate_password();
        assert!(LENGTH_RANGE.contains(&password.len()));
        assert!(covers_all(&password));
        seen.insert(password.len());
    }
    assert_eq!(seen.len(), LENGTH_RANGE.len());
}

#[test]
fn max_source_gives_longest_default_length() {
    let mut source = MaxSource::default();
    assert_eq!(generate_password_with(&mut source).len(), 16);
}

#[test]
fn seeded_generator_is_reproducible() {
    let mut a = SystemSource::from_rng(StdRng::seed_from_u64(7));
    let mut b = SystemSource::from_rng(StdRng::seed_from_u64(7));
    for length in [4, 20, 64] {
        assert_eq!(
            generate_with(length, &mut a).unwrap(),
            generate_with(length, &mut b).unwrap()
        );
    }
    assert_eq!(generate_password_with(&mut a), generate_password_with(&mut b));
}

#[test]
fn passwords_are_distinct() {
    let passwords: HashSet<String> = (0..1000).map(|_| generate(16).unwrap()).collect();
    assert_eq!(passwords.len(), 1000);
}

#[test]
fn shuffle_keeps_elements() {
    let mut items: Vec<char> = charset::pool().iter().map(|&b| char::from(b)).collect();
    secure_shuffle(&mut items);
    let shuffled: String = items.iter().collect();
    let mut sorted: Vec<u8> = shuffled.bytes().collect();
    sorted.sort_unstable();
    let mut expected = charset::pool().to_vec();
    expected.sort_unstable();
    assert_eq!(sorted, expected);
}

#[test]
fn shuffle_with_max_source_is_identity() {
    let mut items = [1, 2, 3, 4, 5];
    let mut source = MaxSource::default();
    secure_shuffle_with(&mut items, &mut source);
    assert_eq!(items, [1, 2, 3, 4, 5]);
    assert_eq!(source.draws, 4);
}

#[test]
fn generation_is_safe_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| (0..100).map(|_| generate(24).unwrap()).collect::<Vec<_>>()))
        .collect();
    for handle in handles {
        for password in handle.join().unwrap() {
            assert_eq!(password.len(), 24);
            assert!(covers_all(&password));
        }
    }
}
