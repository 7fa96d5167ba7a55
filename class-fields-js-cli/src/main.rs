use class_fields_js::loc::loc_to_line_col;
use class_fields_js::parse_with_options;
use class_fields_js::ParseOptions;
use clap::Parser;
use std::io::stdin;
use std::io::stdout;
use std::io::Read;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

#[derive(Parser, Debug)]
#[command(author, version)]
struct Cli {
  /// ECMAScript version, either as an edition (`8`) or a year (`2017`).
  #[arg(long, default_value_t = 9)]
  ecma_version: u32,

  /// Enable class fields and private names.
  #[arg(long)]
  class_fields: bool,

  /// Emit tracing spans (JSON) to stderr.
  #[arg(long)]
  trace: bool,
}

fn init_tracing(enabled: bool) {
  if !enabled {
    return;
  }
  let _ = tracing_subscriber::fmt()
    .with_span_events(FmtSpan::CLOSE)
    .with_max_level(Level::DEBUG)
    .with_writer(std::io::stderr)
    .json()
    .with_ansi(false)
    .try_init();
}

fn main() -> ExitCode {
  let args = Cli::parse();
  init_tracing(args.trace);

  let mut source = Vec::new();
  if let Err(err) = stdin().read_to_end(&mut source) {
    eprintln!("failed to read from stdin: {err}");
    return ExitCode::FAILURE;
  };
  let Ok(source_str) = std::str::from_utf8(&source) else {
    eprintln!("input is not valid UTF-8");
    return ExitCode::FAILURE;
  };

  let opts = ParseOptions {
    ecma_version: args.ecma_version,
    class_fields: args.class_fields,
  };
  match parse_with_options(source_str, opts) {
    Ok(parsed) => {
      if let Err(err) = serde_json::to_writer(stdout(), &parsed) {
        eprintln!("failed to write to stdout: {err}");
        return ExitCode::FAILURE;
      };
      ExitCode::SUCCESS
    }
    Err(err) => {
      let (line, col) = loc_to_line_col(source_str, err.loc.0);
      eprintln!(
        "error[{}]: {} at {}:{}",
        err.typ.code(),
        err.typ.message(err.actual_token),
        line,
        col
      );
      ExitCode::FAILURE
    }
  }
}
