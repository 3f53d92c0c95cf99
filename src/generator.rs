// src/generator.rs
use crate::error::{GeneratorError, GeneratorResult};
use crate::models::PasswordConfig;
use crate::random::RandomSource;

pub const LOWERCASE_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGIT_CHARS: &[u8] = b"0123456789";
// Kept stable so existing history entries read back against the same set.
pub const SYMBOL_CHARS: &[u8] = b"!@#$%^&*()-_=+[]{}|;:,.<>?/";

/// Alphabets of the enabled classes, in the fixed guarantee order
/// lower -> upper -> digits -> symbols.
fn enabled_alphabets(config: &PasswordConfig) -> Vec<&'static [u8]> {
    let mut alphabets = Vec::with_capacity(4);
    if config.use_lower {
        alphabets.push(LOWERCASE_CHARS);
    }
    if config.use_upper {
        alphabets.push(UPPERCASE_CHARS);
    }
    if config.use_digits {
        alphabets.push(DIGIT_CHARS);
    }
    if config.use_symbols {
        alphabets.push(SYMBOL_CHARS);
    }
    alphabets
}

/// Generates a password of exactly `config.length` characters containing at
/// least one character from every enabled class.
///
/// One character per enabled class is drawn first, the remaining positions
/// are filled from the combined alphabet, and the whole buffer is then
/// Fisher-Yates shuffled so the guaranteed characters are not predictably
/// placed at the front.
pub fn generate(config: &PasswordConfig, rng: &mut dyn RandomSource) -> GeneratorResult<String> {
    let alphabets = enabled_alphabets(config);
    if alphabets.is_empty() {
        return Err(GeneratorError::NoCharacterClassSelected);
    }
    if config.length < alphabets.len() {
        return Err(GeneratorError::LengthTooShortForClasses {
            length: config.length,
            classes: alphabets.len(),
        });
    }

    let combined: Vec<u8> = alphabets.concat();

    let mut password = Vec::with_capacity(config.length);
    for alphabet in &alphabets {
        password.push(alphabet[rng.uniform_index(alphabet.len())?]);
    }
    for _ in alphabets.len()..config.length {
        password.push(combined[rng.uniform_index(combined.len())?]);
    }

    // Fisher-Yates, last index down to 1, swap target uniform in [0, i].
    for i in (1..password.len()).rev() {
        let j = rng.uniform_index(i + 1)?;
        password.swap(i, j);
    }

    Ok(password.into_iter().map(char::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::OsRandom;

    /// Test source that always fails, for entropy-failure propagation.
    struct BrokenRandom;

    impl RandomSource for BrokenRandom {
        fn uniform_index(&mut self, _bound: usize) -> GeneratorResult<usize> {
            Err(GeneratorError::RandomnessUnavailable("no entropy".to_string()))
        }
    }

    fn config(length: usize, lower: bool, upper: bool, digits: bool, symbols: bool) -> PasswordConfig {
        PasswordConfig {
            length,
            use_lower: lower,
            use_upper: upper,
            use_digits: digits,
            use_symbols: symbols,
        }
    }

    #[test]
    fn test_generate_default_config() {
        let config = PasswordConfig::default();
        let password = generate(&config, &mut OsRandom).unwrap();
        assert_eq!(password.len(), config.length);
    }

    #[test]
    fn test_generate_contains_every_enabled_class() {
        let config = config(16, true, true, true, true);
        let password = generate(&config, &mut OsRandom).unwrap();
        assert_eq!(password.len(), 16);
        assert!(password.chars().any(|c| c.is_ascii_lowercase()));
        assert!(password.chars().any(|c| c.is_ascii_uppercase()));
        assert!(password.chars().any(|c| c.is_ascii_digit()));
        assert!(password.chars().any(|c| SYMBOL_CHARS.contains(&(c as u8))));
    }

    #[test]
    fn test_generate_only_lowercase() {
        let config = config(10, true, false, false, false);
        let password = generate(&config, &mut OsRandom).unwrap();
        assert_eq!(password.len(), 10);
        assert!(password.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_generate_only_digits() {
        let config = config(8, false, false, true, false);
        let password = generate(&config, &mut OsRandom).unwrap();
        assert_eq!(password.len(), 8);
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_lower_and_digits_scenario() {
        // length=8, lower+digits: >=1 of each, nothing outside the union.
        let config = config(8, true, false, true, false);
        let password = generate(&config, &mut OsRandom).unwrap();
        assert_eq!(password.len(), 8);
        assert!(password.chars().any(|c| c.is_ascii_lowercase()));
        assert!(password.chars().any(|c| c.is_ascii_digit()));
        assert!(password
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_length_equal_to_class_count() {
        let config = config(4, true, true, true, true);
        let password = generate(&config, &mut OsRandom).unwrap();
        assert_eq!(password.len(), 4);
        // Exactly one character per class when there is no fill step.
        assert_eq!(password.chars().filter(|c| c.is_ascii_lowercase()).count(), 1);
        assert_eq!(password.chars().filter(|c| c.is_ascii_uppercase()).count(), 1);
        assert_eq!(password.chars().filter(|c| c.is_ascii_digit()).count(), 1);
    }

    #[test]
    fn test_generate_no_class_selected() {
        let config = config(10, false, false, false, false);
        match generate(&config, &mut OsRandom) {
            Err(GeneratorError::NoCharacterClassSelected) => {}
            other => panic!("expected NoCharacterClassSelected, got {:?}", other),
        }
    }

    #[test]
    fn test_generate_length_too_short_for_classes() {
        let config = config(3, true, true, true, true);
        match generate(&config, &mut OsRandom) {
            Err(GeneratorError::LengthTooShortForClasses { length: 3, classes: 4 }) => {}
            other => panic!("expected LengthTooShortForClasses, got {:?}", other),
        }
    }

    #[test]
    fn test_generate_entropy_failure_propagates() {
        let config = PasswordConfig::default();
        match generate(&config, &mut BrokenRandom) {
            Err(GeneratorError::RandomnessUnavailable(_)) => {}
            other => panic!("expected RandomnessUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_shuffle_disperses_guaranteed_characters() {
        // With length == class count every character comes from the guarantee
        // step, in order lower, upper, digit, symbol before the shuffle. If
        // the shuffle is fair the first position is lowercase about a quarter
        // of the time, not always.
        let config = config(4, true, true, true, true);
        let runs = 400;
        let mut lowercase_first = 0;
        for _ in 0..runs {
            let password = generate(&config, &mut OsRandom).unwrap();
            if password.chars().next().unwrap().is_ascii_lowercase() {
                lowercase_first += 1;
            }
        }
        assert!(
            lowercase_first < runs / 2,
            "lowercase led {} of {} runs; shuffle looks biased toward the guarantee order",
            lowercase_first,
            runs
        );
        assert!(lowercase_first > 0, "lowercase never led; shuffle looks degenerate");
    }

    #[test]
    fn test_generate_randomness() {
        let config = PasswordConfig::default();
        let password_1 = generate(&config, &mut OsRandom).unwrap();
        let password_2 = generate(&config, &mut OsRandom).unwrap();
        assert_ne!(
            password_1, password_2,
            "two passwords from the same config should almost never collide"
        );
    }
}
