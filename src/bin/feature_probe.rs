// Prints the orthographic features extracted for each word.
// Run with: cargo run --bin feature_probe -- chair blue elephant sky
use distractor_core::core::features::{
    estimate_syllables, extract_initial_sound, extract_rhyme_pattern, extract_vowel_pattern,
};

fn main() {
    let mut words: Vec<String> = std::env::args().skip(1).collect();
    if words.is_empty() {
        words = ["Chair", "Blue", "Dog", "I", "cat", "elephant", "rain", "sky", "cake", "table", "banana"]
            .iter()
            .map(|w| w.to_string())
            .collect();
    }

    println!("{:<12} {:<8} {:<6} {:<12} {}", "word", "initial", "rhyme", "vowels", "syllables");
    for word in &words {
        println!(
            "{:<12} {:<8} {:<6} {:<12} {}",
            word,
            extract_initial_sound(word),
            extract_rhyme_pattern(word),
            extract_vowel_pattern(word),
            estimate_syllables(word),
        );
    }
}
