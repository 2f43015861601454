use bank::{BankError, JsonBank, QuestionSource};

const SAMPLE: &str = r#"
{
    "questions": [
        {
            "question": "What is the capital of France?",
            "options": [
                { "A.": "London", "B.": "Paris", "C.": "Rome", "D.": "Berlin" }
            ],
            "answer": [ { "B.": "Paris" } ]
        },
        {
            "question": "Which planet is known as the Red Planet?",
            "options": [
                { "A.": "Venus", "B.": "Jupiter", "C.": "Mars", "D.": "Saturn" }
            ],
            "answer": [ { "C.": "Mars" } ]
        }
    ]
}
"#;

#[test]
fn parses_bank_and_normalizes_dotted_labels() {
    let questions = JsonBank::parse(SAMPLE).unwrap();
    assert_eq!(questions.len(), 2);

    let first = &questions[0];
    assert_eq!(first.prompt(), "What is the capital of France?");
    let labels: Vec<_> = first.options().iter().map(|o| o.label()).collect();
    assert_eq!(labels, vec!["A", "B", "C", "D"]);
    assert_eq!(first.correct_label(), "B");
    assert_eq!(first.correct_text(), "Paris");
    assert!(first.is_correct("b"));
}

#[test]
fn rejects_answer_label_not_among_options() {
    let raw = r#"
    {
        "questions": [
            {
                "question": "Broken record",
                "options": [ { "A.": "yes", "B.": "no" } ],
                "answer": [ { "E.": "maybe" } ]
            }
        ]
    }
    "#;

    let err = JsonBank::parse(raw).unwrap_err();
    assert!(matches!(err, BankError::Question { index: 0, .. }));
}

#[test]
fn rejects_record_with_empty_options_array() {
    let raw = r#"
    {
        "questions": [
            {
                "question": "No options",
                "options": [],
                "answer": [ { "A.": "x" } ]
            }
        ]
    }
    "#;

    let err = JsonBank::parse(raw).unwrap_err();
    assert!(matches!(err, BankError::MissingOptions { index: 0 }));
}

#[test]
fn rejects_record_with_empty_answer_array() {
    let raw = r#"
    {
        "questions": [
            {
                "question": "No answer",
                "options": [ { "A.": "x", "B.": "y" } ],
                "answer": []
            }
        ]
    }
    "#;

    let err = JsonBank::parse(raw).unwrap_err();
    assert!(matches!(err, BankError::MissingAnswer { index: 0 }));
}

#[test]
fn rejects_malformed_json() {
    let err = JsonBank::parse("{ not json").unwrap_err();
    assert!(matches!(err, BankError::Parse(_)));
}

#[test]
fn loads_from_disk() {
    let path = std::env::temp_dir().join("quiz_bank_roundtrip.json");
    std::fs::write(&path, SAMPLE).unwrap();

    let questions = JsonBank::new(&path).load().unwrap();
    assert_eq!(questions.len(), 2);

    std::fs::remove_file(&path).ok();
}

#[test]
fn missing_file_surfaces_io_error() {
    let bank = JsonBank::new("/nonexistent/quiz_bank.json");
    assert!(matches!(bank.load().unwrap_err(), BankError::Io(_)));
}
