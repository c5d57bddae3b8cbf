use spotreader::app::{AppEvent, Controller, ReaderState};
use spotreader::engine::config::{ReaderConfig, FINISHED_MARKER};
use spotreader::engine::error::ReaderError;
use spotreader::input::{open_source, parse_args, Launch, SourceArg};
use spotreader::reading::WordCycle;
use std::fs::{self, File};
use std::io::Write;

#[test]
fn end_to_end_reading_from_file() {
    let test_file = std::env::temp_dir().join(format!("spotreader-e2e-{}.txt", std::process::id()));
    let mut file = File::create(&test_file).unwrap();
    file.write_all(b"Hello World.\nBig data.").unwrap();

    let launch = parse_args(vec![
        "--eos-delay".to_string(),
        "1000".to_string(),
        test_file.display().to_string(),
    ])
    .unwrap();
    let options = match launch {
        Launch::Run(options) => options,
        Launch::Help => panic!("unexpected help"),
    };

    let source = open_source(&options.source).unwrap();
    let mut controller = Controller::new(source, &options.reader).unwrap();
    assert_eq!(controller.pending_delay(), Some(300));

    assert_eq!(controller.advance(), Some(300));
    assert_eq!(controller.current_token(), "Hello");
    assert_eq!(controller.advance(), Some(1000));
    assert_eq!(controller.current_token(), "World.");

    controller.handle_event(AppEvent::DecreaseWpm);
    controller.handle_event(AppEvent::DecreaseWpm);
    assert_eq!(controller.wpm_label(), "wpm: 180");

    assert_eq!(controller.advance(), Some(333));
    assert_eq!(controller.current_token(), "Big");
    assert_eq!(controller.advance(), Some(1000));
    assert_eq!(controller.advance(), None);
    assert_eq!(controller.current_token(), FINISHED_MARKER);
    assert_eq!(controller.state(), ReaderState::Finished);

    fs::remove_file(&test_file).unwrap();
}

#[test]
fn infinite_generator_never_finishes() {
    let mut controller = Controller::new(WordCycle::demo(), &ReaderConfig::default()).unwrap();
    for _ in 0..1000 {
        assert_eq!(controller.advance(), Some(300));
    }
    assert_eq!(controller.state(), ReaderState::Running);
}

#[test]
fn invalid_input_is_reported_before_any_session() {
    let result = parse_args(vec!["--wpm".to_string(), "abc".to_string(), "x.txt".to_string()]);
    assert!(matches!(result, Err(ReaderError::InvalidInput(_))));

    let result = open_source(&SourceArg::File("missing-input-file.txt".into()));
    assert!(matches!(result, Err(ReaderError::InvalidInput(_))));

    let config = ReaderConfig {
        wpm: 0,
        ..ReaderConfig::default()
    };
    assert!(matches!(
        Controller::new(vec!["a"].into_iter(), &config),
        Err(ReaderError::InvalidInput(_))
    ));
}
