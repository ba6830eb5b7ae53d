use crate::config::Configuration;
use crate::output::{OutputFormat, OutputOptions};
use crate::testutils::*;
use crate::{App, Command, Error, GlobalOpts, InputOptions};
use std::io::Cursor;

fn app(command: Command, config: Option<&TmpTestFile>) -> App {
    App {
        global_opts: GlobalOpts {
            log: Some("debug".to_string()),
            config: config.map(|c| c.file.clone()),
        },
        command,
    }
}

fn decode_command(hex: Option<&str>, format: Option<OutputFormat>) -> Command {
    Command::Decode {
        input_opts: InputOptions {
            hex: hex.map(str::to_string),
        },
        format,
        output: None,
    }
}

/// Run the app with the given stdin and return what it wrote to stdout.
fn run(app: App, stdin: &str) -> Result<Vec<u8>, Error> {
    let mut input = Cursor::new(stdin.as_bytes().to_vec());
    let mut out = Vec::new();
    app.execute(&mut input, &mut out)?;
    Ok(out)
}

#[test]
fn decode_argument_raw() {
    let out = match run(app(decode_command(Some("48656c6c6f"), None), None), "") {
        Ok(out) => out,
        Err(e) => panic!("Failed to decode: {e}"),
    };
    assert_eq!(out, b"Hello");
}

#[test]
fn decode_stdin_is_trimmed() {
    let out = run(app(decode_command(None, None), None), "  48656c6c6f\n")
        .expect("Failed to decode stdin");
    assert_eq!(out, b"Hello");
}

#[test]
fn decode_stdin_without_trim() {
    let config = TmpTestFile::config(Configuration {
        log_level: "debug".to_string(),
        output: OutputOptions {
            trim: false,
            ..Default::default()
        },
    });

    match run(app(decode_command(None, None), Some(&config)), "4142\n") {
        Err(Error::Decode(e)) => assert_eq!(e, crate::DecodeError::OddLength),
        other => panic!("Expected odd length error, got: {other:?}"),
    }
}

#[test]
fn decode_empty_stdin() {
    match run(app(decode_command(None, None), None), "") {
        Err(Error::EmptyInput()) => {}
        other => panic!("Expected EmptyInput error, got: {other:?}"),
    }
}

#[test]
fn decode_empty_argument() {
    let out = run(app(decode_command(Some(""), None), None), "").expect("Empty hex is valid");
    assert!(out.is_empty());
}

#[test]
fn decode_invalid_character() {
    match run(app(decode_command(Some("4g"), None), None), "") {
        Err(Error::Decode(e)) => assert_eq!(e, crate::DecodeError::InvalidCharacter('g')),
        other => panic!("Expected invalid character error, got: {other:?}"),
    }
}

#[test]
fn decode_format_from_config() {
    let config = TmpTestFile::config(Configuration {
        log_level: "info".to_string(),
        output: OutputOptions {
            format: OutputFormat::Hex,
            line_width: 2,
            ..Default::default()
        },
    });

    let out = run(app(decode_command(Some("deadbeef"), None), Some(&config)), "")
        .expect("Failed to decode");
    assert_eq!(String::from_utf8(out).unwrap(), "de ad\nbe ef\n");
}

#[test]
fn decode_format_flag_overrides_config() {
    let config = TmpTestFile::config(Configuration {
        log_level: "info".to_string(),
        output: OutputOptions {
            format: OutputFormat::Hex,
            ..Default::default()
        },
    });

    let out = run(
        app(
            decode_command(Some("48656c6c6f"), Some(OutputFormat::Json)),
            Some(&config),
        ),
        "",
    )
    .expect("Failed to decode");
    assert_eq!(String::from_utf8(out).unwrap(), "[72,101,108,108,111]\n");
}

#[test]
fn decode_to_file() {
    let target = TmpTestFile::path("output.bin");
    let command = Command::Decode {
        input_opts: InputOptions {
            hex: Some("cafe".to_string()),
        },
        format: None,
        output: Some(target.file.clone()),
    };

    let out = run(app(command, None), "").expect("Failed to decode to file");
    assert!(out.is_empty(), "Nothing should be written to stdout");

    let written = std::fs::read(&target.file).expect("Failed to read output file");
    assert_eq!(written, vec![0xca, 0xfe]);
}

#[test]
fn check_valid_input() {
    let command = Command::Check {
        input_opts: InputOptions {
            hex: Some("deadbeef".to_string()),
        },
    };
    let out = run(app(command, None), "").expect("Input should be valid");
    assert_eq!(String::from_utf8(out).unwrap(), "valid: 4 bytes\n");
}

#[test]
fn check_invalid_input() {
    let command = Command::Check {
        input_opts: InputOptions { hex: None },
    };
    match run(app(command, None), "abc\n") {
        Err(Error::Decode(e)) => assert_eq!(e, crate::DecodeError::OddLength),
        other => panic!("Expected odd length error, got: {other:?}"),
    }
}

#[test]
fn missing_config_file() {
    let app = App {
        global_opts: GlobalOpts {
            log: None,
            config: Some("/nonexistent/path/config.yaml".to_string()),
        },
        command: decode_command(Some("00"), None),
    };
    match run(app, "") {
        Err(Error::ReadConfigFile(path, _)) => assert_eq!(path, "/nonexistent/path/config.yaml"),
        other => panic!("Expected ReadConfigFile error, got: {other:?}"),
    }
}

#[test]
fn invalid_log_level_falls_back() {
    let app = App {
        global_opts: GlobalOpts {
            log: Some("verbose".to_string()),
            config: None,
        },
        command: decode_command(Some("00"), None),
    };
    assert_eq!(run(app, "").expect("Should still decode"), vec![0]);
}

#[test]
fn version_skips_config() {
    let app = App {
        global_opts: GlobalOpts {
            log: None,
            config: Some("/nonexistent/path/config.yaml".to_string()),
        },
        command: Command::Version,
    };
    let out = run(app, "").expect("Version should not need a config");
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains(crate::version::NAME));
    assert!(out.contains("Version: v"));
}
