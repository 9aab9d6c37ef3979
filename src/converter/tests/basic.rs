use crate::converter::testutil::{test_keypad, test_words};
use crate::converter::{
    convert, ConvertOptions, LetterDensity, RankWeightSum, Spelling,
};

fn texts(spellings: &[Spelling]) -> Vec<String> {
    spellings.iter().map(|s| s.text()).collect()
}

fn convert_default(number: &str) -> Vec<Spelling> {
    convert(
        &test_keypad(),
        &test_words(),
        number,
        &LetterDensity,
        ConvertOptions::default(),
    )
    .unwrap()
}

#[test]
fn worded_spellings_rank_above_fallback() {
    // 7→r, 3→e, 7→s, 8→t spells "rest"; p-e-s-t spells "pest" from the
    // same digits.
    let result = convert_default("7378");
    let texts = texts(&result);
    assert_eq!(texts.len(), 3);
    assert!(texts[..2].contains(&"rest".to_string()));
    assert!(texts[..2].contains(&"pest".to_string()));
    assert_eq!(texts[2], "7378");

    let rest = result.iter().find(|s| s.text() == "rest").unwrap();
    assert_eq!(rest.score, 4);
    let fallback = result.iter().find(|s| s.text() == "7378").unwrap();
    assert_eq!(fallback.score, 0);
}

#[test]
fn multi_segment_spellings_are_scored_and_ordered() {
    let result = convert_default("223");
    // "ace"/"bad" (3 letters, no join), "2-be" (2 letters, 1 join),
    // the full fallback (0), and "2-23" (-1).
    assert_eq!(texts(&result), vec!["ace", "bad", "2-be", "223", "2-23"]);
    let scores: Vec<i64> = result.iter().map(|s| s.score).collect();
    assert_eq!(scores, vec![3, 3, 1, 0, -1]);
}

#[test]
fn scores_never_increase_down_the_list() {
    for number in ["7378", "223", "22333"] {
        let result = convert_default(number);
        for pair in result.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }
}

#[test]
fn sentinel_digit_yields_only_the_fallback() {
    let result = convert_default("1");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].tokens, vec!["1".to_string()]);
    assert!(result[0].score <= 0);
}

#[test]
fn empty_normalized_input_yields_nothing() {
    assert!(convert_default("").is_empty());
    assert!(convert_default("+-() ").is_empty());
    assert!(convert_default("abc").is_empty());
}

#[test]
fn non_digits_are_stripped_before_conversion() {
    let formatted = convert_default("(73) 7-8");
    let plain = convert_default("7378");
    assert_eq!(texts(&formatted), texts(&plain));
}

#[test]
fn drop_nonpositive_hides_fallback_only_results() {
    let result = convert(
        &test_keypad(),
        &test_words(),
        "223",
        &LetterDensity,
        ConvertOptions {
            drop_nonpositive: true,
        },
    )
    .unwrap();
    assert_eq!(texts(&result), vec!["ace", "bad", "2-be"]);
}

#[test]
fn rank_weight_strategy_orders_by_segment_weight() {
    let result = convert(
        &test_keypad(),
        &test_words(),
        "223",
        &RankWeightSum,
        ConvertOptions::default(),
    )
    .unwrap();
    // The 3-digit worded segment weighs 9, so even its fallback token
    // outranks the split "2-be" path (weight 4).
    let texts = texts(&result);
    let full_fallback = texts.iter().position(|t| t == "223").unwrap();
    let split = texts.iter().position(|t| t == "2-be").unwrap();
    assert!(full_fallback < split);
}
