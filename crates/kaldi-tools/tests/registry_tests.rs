//! Resolution and argument-building behaviour of the builtin registry

use kaldi_tools::{
    Error, OptionType, OptionValue, OverrideFile, OverrideSet, ToolConfigRegistry, ToolName,
    build_arguments, merge_overrides,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    // crates/kaldi-tools -> ../../test-fixtures
    manifest_dir.join("../../test-fixtures/overrides")
}

fn overrides(entries: &[(&str, &str)]) -> OverrideSet {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), OptionValue::from(*v)))
        .collect()
}

fn defaults_of(tool: &str) -> Vec<(String, String)> {
    ToolConfigRegistry::global()
        .resolve(tool)
        .unwrap()
        .iter()
        .map(|spec| (spec.name().to_string(), spec.default_value().to_string()))
        .collect()
}

// ============================================================================
// resolve
// ============================================================================

#[rstest]
#[case("compute_mfcc")]
#[case("compute_fbank")]
#[case("compute_plp")]
#[case("compute_spectrogram")]
#[case("decode_lattice")]
fn test_every_tool_resolves_to_consistent_schema(#[case] name: &str) {
    let config = ToolConfigRegistry::global().resolve(name).unwrap();
    assert_eq!(config.tool().as_str(), name);
    assert!(!config.is_empty());
    for spec in config.iter() {
        assert!(spec.is_consistent(), "{name} {} is inconsistent", spec.name());
    }
}

#[rstest]
#[case("compute-mfcc-feats", ToolName::ComputeMfcc)]
#[case("compute-fbank-feats", ToolName::ComputeFbank)]
#[case("latgen-faster-mapped", ToolName::DecodeLattice)]
fn test_resolve_by_binary_name(#[case] binary: &str, #[case] expected: ToolName) {
    let config = ToolConfigRegistry::global().resolve(binary).unwrap();
    assert_eq!(config.tool(), expected);
}

#[rstest]
#[case("not-a-real-tool")]
#[case("")]
#[case("COMPUTE_MFCC")]
fn test_resolve_unknown_tool(#[case] name: &str) {
    match ToolConfigRegistry::global().resolve(name) {
        Err(Error::UnknownTool { name: reported }) => assert_eq!(reported, name),
        other => panic!("Expected UnknownTool, got {other:?}"),
    }
}

// ============================================================================
// build_arguments
// ============================================================================

#[test]
fn test_empty_overrides_yield_defaults_in_order() {
    let registry = ToolConfigRegistry::global();
    let config = registry.resolve("compute_mfcc").unwrap();
    let args = build_arguments(config, &OverrideSet::new()).unwrap();

    let expected = defaults_of("compute_mfcc");
    assert_eq!(args.pairs(), expected.as_slice());

    let flags: Vec<_> = args.pairs().iter().map(|(f, _)| f.clone()).collect();
    let mut sorted = flags.clone();
    sorted.sort();
    assert_eq!(flags, sorted);
}

#[test]
fn test_single_override_changes_only_that_flag() {
    let config = ToolConfigRegistry::global().resolve("compute_mfcc").unwrap();
    let args = build_arguments(config, &overrides(&[("--frame-length", "30")])).unwrap();

    let expected: Vec<_> = defaults_of("compute_mfcc")
        .into_iter()
        .map(|(flag, value)| {
            if flag == "--frame-length" {
                (flag, "30".to_string())
            } else {
                (flag, value)
            }
        })
        .collect();
    assert_eq!(args.pairs(), expected.as_slice());
}

#[test]
fn test_unknown_option_is_rejected() {
    let config = ToolConfigRegistry::global().resolve("compute_mfcc").unwrap();
    let err = build_arguments(config, &overrides(&[("--not-a-flag", "x")])).unwrap_err();
    match err {
        Error::UnknownOption { tool, option } => {
            assert_eq!(tool, ToolName::ComputeMfcc);
            assert_eq!(option, "--not-a-flag");
        }
        other => panic!("Expected UnknownOption, got {other:?}"),
    }
}

#[test]
fn test_type_mismatch_is_rejected() {
    let config = ToolConfigRegistry::global().resolve("compute_mfcc").unwrap();
    let err =
        build_arguments(config, &overrides(&[("--cepstral-lifter", "not-a-number")])).unwrap_err();
    match err {
        Error::TypeMismatch {
            option,
            expected,
            received,
        } => {
            assert_eq!(option, "--cepstral-lifter");
            assert_eq!(expected, OptionType::Integer);
            assert_eq!(received, "not-a-number");
        }
        other => panic!("Expected TypeMismatch, got {other:?}"),
    }
}

#[test]
fn test_type_mismatch_message() {
    let err = ToolConfigRegistry::global()
        .build("compute_mfcc", &overrides(&[("--cepstral-lifter", "not-a-number")]))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Type mismatch for --cepstral-lifter: expected integer, got 'not-a-number'"
    );
}

#[test]
fn test_repeated_builds_are_identical() {
    let registry = ToolConfigRegistry::global();
    let set = overrides(&[("--beam", "16"), ("--acoustic-scale", "0.083333")]);

    let first = registry.build("decode_lattice", &set).unwrap();
    let second = registry.build("decode_lattice", &set).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.command_line(), second.command_line());
}

#[rstest]
#[case(OptionValue::Bool(false), "false")]
#[case(OptionValue::Bool(true), "true")]
#[case(OptionValue::from("false"), "false")]
fn test_booleans_render_as_literal_tokens(#[case] value: OptionValue, #[case] expected: &str) {
    let mut set = OverrideSet::new();
    set.insert("--use-energy".into(), value);
    let args = ToolConfigRegistry::global()
        .build("compute_mfcc", &set)
        .unwrap();
    assert_eq!(args.get("--use-energy"), Some(expected));
}

#[rstest]
#[case("--blackman-coeff", "0.5", "0.5")]
#[case("--blackman-coeff", "1", "1")]
#[case("--num-mel-bins", "40", "40")]
#[case("--window-type", "hamming", "hamming")]
fn test_override_values_normalized(
    #[case] flag: &str,
    #[case] input: &str,
    #[case] expected: &str,
) {
    let args = ToolConfigRegistry::global()
        .build("compute_fbank", &overrides(&[(flag, input)]))
        .unwrap();
    assert_eq!(args.get(flag), Some(expected));
}

#[test]
fn test_integer_flag_rejects_fraction() {
    let err = ToolConfigRegistry::global()
        .build("compute_mfcc", &overrides(&[("--frame-length", "25.5")]))
        .unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { expected: OptionType::Integer, .. }));
}

#[test]
fn test_debug_mel_accepts_string_under_plp() {
    let args = ToolConfigRegistry::global()
        .build("compute_plp", &overrides(&[("--debug-mel", "true")]))
        .unwrap();
    assert_eq!(args.get("--debug-mel"), Some("true"));
}

// ============================================================================
// Override files
// ============================================================================

#[test]
fn test_validate_fixture_files() {
    let registry = ToolConfigRegistry::global();
    for name in ["timit.toml", "fbank.json", "plp.yaml"] {
        let file = OverrideFile::load(fixtures_dir().join(name)).unwrap();
        registry
            .validate_file(&file)
            .unwrap_or_else(|e| panic!("{name} should validate: {e}"));
    }
}

#[rstest]
#[case("unknown_option.toml")]
#[case("bad_type.toml")]
#[case("unknown_tool.toml")]
fn test_validate_rejects_bad_fixtures(#[case] name: &str) {
    let file = OverrideFile::load(fixtures_dir().join(name)).unwrap();
    let err = ToolConfigRegistry::global().validate_file(&file).unwrap_err();
    let matched = match name {
        "unknown_option.toml" => matches!(err, Error::UnknownOption { .. }),
        "bad_type.toml" => matches!(err, Error::TypeMismatch { .. }),
        _ => matches!(err, Error::UnknownTool { ref name } if name == "compute_pitch"),
    };
    assert!(matched, "Unexpected error for {name}: {err:?}");
}

#[test]
fn test_binary_named_sections_validate_and_apply() {
    let registry = ToolConfigRegistry::global();
    let file = OverrideFile::load(fixtures_dir().join("binary_names.toml")).unwrap();
    registry.validate_file(&file).unwrap();

    let mfcc = registry
        .build("compute_mfcc", &file.overrides_for(ToolName::ComputeMfcc).unwrap())
        .unwrap();
    assert_eq!(mfcc.get("--frame-length"), Some("30"));

    let decode = registry
        .build("decode_lattice", &file.overrides_for(ToolName::DecodeLattice).unwrap())
        .unwrap();
    assert_eq!(decode.get("--beam"), Some("18"));
}

#[test]
fn test_validate_rejects_tool_configured_twice() {
    let file = OverrideFile::load(fixtures_dir().join("duplicate_tool.toml")).unwrap();
    let err = ToolConfigRegistry::global().validate_file(&file).unwrap_err();
    assert!(
        matches!(
            err,
            Error::Meta(kaldi_meta::Error::DuplicateSection {
                tool: ToolName::ComputeMfcc,
                ..
            })
        ),
        "Unexpected error: {err:?}"
    );
}

#[test]
fn test_file_layer_then_command_line_layer() {
    let file = OverrideFile::load(fixtures_dir().join("timit.toml")).unwrap();
    let base = file.overrides_for(ToolName::ComputeMfcc).unwrap();
    let top = overrides(&[("--frame-length", "35")]);

    let args = ToolConfigRegistry::global()
        .build("compute_mfcc", &merge_overrides(&base, &top))
        .unwrap();
    assert_eq!(args.get("--frame-length"), Some("35"));
    assert_eq!(args.get("--use-energy"), Some("false"));
    assert_eq!(args.get("--window-type"), Some("hamming"));
}

#[test]
fn test_registry_is_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                ToolConfigRegistry::global()
                    .build("compute_plp", &OverrideSet::new())
                    .unwrap()
                    .into_pairs()
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}
