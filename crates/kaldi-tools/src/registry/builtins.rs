//! Built-in tool schemas
//!
//! Defaults mirror what the Kaldi binaries are invoked with by the feature
//! and decoding pipeline. The four feature extractors share a framing block
//! and, except for the spectrogram, a mel-filterbank block.

use kaldi_meta::{OptionSpec, ToolConfig, ToolName};

/// Number of built-in tools.
pub const BUILTIN_COUNT: usize = 5;

/// Returns the schema of every built-in tool.
pub fn builtin_configs() -> Vec<ToolConfig> {
    ToolName::ALL.into_iter().map(builtin_config).collect()
}

fn builtin_config(tool: ToolName) -> ToolConfig {
    ToolConfig::new(tool, builtin_options(tool))
}

fn builtin_options(tool: ToolName) -> Vec<OptionSpec> {
    match tool {
        ToolName::ComputeMfcc => [framing_options(), mel_options(), mfcc_options()].concat(),
        ToolName::ComputeFbank => [framing_options(), mel_options(), fbank_options()].concat(),
        ToolName::ComputePlp => [framing_options(), mel_options(), plp_options()].concat(),
        ToolName::ComputeSpectrogram => framing_options(),
        ToolName::DecodeLattice => decoder_options(),
    }
}

/// Waveform framing and windowing, shared by every feature extractor.
fn framing_options() -> Vec<OptionSpec> {
    vec![
        OptionSpec::string("--allow-downsample", "false"),
        OptionSpec::string("--allow-upsample", "false"),
        OptionSpec::float("--blackman-coeff", 0.42),
        OptionSpec::integer("--channel", -1),
        OptionSpec::integer("--dither", 1),
        OptionSpec::integer("--energy-floor", 0),
        OptionSpec::integer("--frame-length", 25),
        OptionSpec::integer("--frame-shift", 10),
        OptionSpec::integer("--max-feature-vectors", -1),
        OptionSpec::integer("--min-duration", 0),
        OptionSpec::string("--output-format", "kaldi"),
        OptionSpec::float("--preemphasis-coefficient", 0.97),
        OptionSpec::string("--raw-energy", "true"),
        OptionSpec::string("--remove-dc-offset", "true"),
        OptionSpec::string("--round-to-power-of-two", "true"),
        OptionSpec::integer("--sample-frequency", 16000),
        OptionSpec::string("--snip-edges", "false"),
        OptionSpec::string("--subtract-mean", "false"),
        OptionSpec::string("--window-type", "povey"),
        OptionSpec::string("--write-utt2dur", ""),
    ]
}

/// Mel filterbank, energy and VTLN warping options.
fn mel_options() -> Vec<OptionSpec> {
    vec![
        // Declared as a string everywhere, including PLP.
        OptionSpec::string("--debug-mel", "false"),
        OptionSpec::integer("--high-freq", 0),
        OptionSpec::string("--htk-compat", "false"),
        OptionSpec::integer("--low-freq", 20),
        OptionSpec::integer("--num-mel-bins", 23),
        OptionSpec::string("--use-energy", "true"),
        OptionSpec::string("--utt2spk", ""),
        OptionSpec::integer("--vtln-high", -500),
        OptionSpec::integer("--vtln-low", 100),
        OptionSpec::string("--vtln-map", ""),
        OptionSpec::integer("--vtln-warp", 1),
    ]
}

fn mfcc_options() -> Vec<OptionSpec> {
    vec![
        OptionSpec::integer("--cepstral-lifter", 22),
        OptionSpec::integer("--num-ceps", 13),
    ]
}

fn fbank_options() -> Vec<OptionSpec> {
    vec![
        OptionSpec::string("--use-log-fbank", "true"),
        OptionSpec::string("--use-power", "true"),
    ]
}

fn plp_options() -> Vec<OptionSpec> {
    vec![
        OptionSpec::integer("--cepstral-lifter", 22),
        OptionSpec::integer("--cepstral-scale", 1),
        OptionSpec::float("--compress-factor", 0.33333),
        OptionSpec::integer("--lpc-order", 12),
        OptionSpec::integer("--num-ceps", 13),
    ]
}

fn decoder_options() -> Vec<OptionSpec> {
    vec![
        OptionSpec::float("--acoustic-scale", 0.1),
        OptionSpec::string("--allow-partial", "false"),
        OptionSpec::integer("--beam", 13),
        OptionSpec::float("--beam-delta", 0.5),
        OptionSpec::float("--delta", 0.000976562),
        OptionSpec::string("--determinize-lattice", "true"),
        OptionSpec::integer("--hash-ratio", 2),
        OptionSpec::integer("--lattice-beam", 8),
        OptionSpec::integer("--max-active", 7000),
        OptionSpec::integer("--max-mem", 50000000),
        OptionSpec::integer("--min-active", 200),
        OptionSpec::string("--minimize", "false"),
        OptionSpec::string("--phone-determinize", "true"),
        OptionSpec::integer("--prune-interval", 25),
        OptionSpec::string("--word-determinize", "true"),
        OptionSpec::string("--word-symbol-table", ""),
    ]
}
