use sentiment_hue::colors::{
    count_labels, get_color, palette, resolve_color, Sentiment, DEFAULT_COLOR, NEGATIVE_COLOR,
    POSITIVE_COLOR,
};

#[test]
fn test_resolve_color_scenarios() {
    assert_eq!(resolve_color("positive"), "#B0F0B9");
    assert_eq!(resolve_color("NEGATIVE"), "#C34244");
    assert_eq!(resolve_color("Neutral"), "#F5BE6B");
    assert_eq!(resolve_color(""), "#F5BE6B");
}

#[test]
fn test_positive_is_case_insensitive() {
    for label in ["positive", "Positive", "POSITIVE", "pOsItIvE"] {
        assert_eq!(resolve_color(label), POSITIVE_COLOR, "label {:?}", label);
    }
}

#[test]
fn test_negative_is_case_insensitive() {
    for label in ["negative", "Negative", "NEGATIVE", "nEgAtIvE"] {
        assert_eq!(resolve_color(label), NEGATIVE_COLOR, "label {:?}", label);
    }
}

#[test]
fn test_unrecognized_labels_use_default() {
    let labels = [
        "",
        "neutral",
        "unknown",
        "123",
        " positive",
        "negative ",
        "positively",
        "neg",
        "😀",
        "positive\n",
    ];

    for label in labels {
        assert_eq!(resolve_color(label), DEFAULT_COLOR, "label {:?}", label);
    }
}

#[test]
fn test_resolve_color_is_deterministic() {
    for label in ["positive", "NEGATIVE", "Neutral", ""] {
        let first = resolve_color(label);
        for _ in 0..10 {
            assert_eq!(resolve_color(label), first);
        }
    }
}

#[test]
fn test_resolve_color_across_threads() {
    let handles = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let label = if i % 2 == 0 { "Positive" } else { "other" };
                resolve_color(label)
            })
        })
        .collect::<Vec<_>>();

    for (i, handle) in handles.into_iter().enumerate() {
        let expected = if i % 2 == 0 { POSITIVE_COLOR } else { DEFAULT_COLOR };
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_classify() {
    assert_eq!(Sentiment::classify("POSITIVE"), Sentiment::Positive);
    assert_eq!(Sentiment::classify("negative"), Sentiment::Negative);
    assert_eq!(Sentiment::classify("neutral"), Sentiment::Neutral);
    assert_eq!(Sentiment::classify(""), Sentiment::Neutral);
}

#[test]
fn test_from_str_is_total() {
    let sentiment: Sentiment = "Negative".parse().unwrap();
    assert_eq!(sentiment, Sentiment::Negative);

    let sentiment: Sentiment = "???".parse().unwrap();
    assert_eq!(sentiment, Sentiment::Neutral);
}

#[test]
fn test_display_and_serialize() {
    assert_eq!(Sentiment::Positive.to_string(), "positive");
    assert_eq!(Sentiment::Neutral.as_str(), "neutral");
    assert_eq!(
        serde_json::to_string(&Sentiment::Negative).unwrap(),
        "\"negative\""
    );
}

#[test]
fn test_get_color_only_knows_recognized_labels() {
    assert_eq!(count_labels(), 2);
    assert_eq!(get_color("Positive"), Some(POSITIVE_COLOR));
    assert_eq!(get_color("negative"), Some(NEGATIVE_COLOR));
    assert_eq!(get_color("neutral"), None);
    assert_eq!(get_color(""), None);
}

#[test]
fn test_palette_order() {
    assert_eq!(
        palette(),
        [
            (Sentiment::Positive, "#B0F0B9"),
            (Sentiment::Negative, "#C34244"),
            (Sentiment::Neutral, "#F5BE6B"),
        ]
    );
}
