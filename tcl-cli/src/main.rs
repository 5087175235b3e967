// This file is part of tcl-rs, a Tcl-dialect script interpreter core.
//
// tcl-cli: command-line driver for the Tcl-dialect interpreter core.
// Reads a script file, evaluates it, and reports the result.

use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;
use tcl_env::Interp;
use tcl_semantics::EvalError;
use tcl_syntax::source::{Code, Source};

struct Args {
    script_path: PathBuf,
    verbose: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut script_path = None;
    let mut verbose = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            _ if script_path.is_none() => script_path = Some(PathBuf::from(arg)),
            _ => return Err(format!("unexpected argument \"{arg}\"")),
        }
    }
    let script_path = script_path.ok_or_else(|| "usage: tcl [-v|--verbose] <scriptfile>".to_string())?;
    Ok(Args { script_path, verbose })
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("tcl: {message}");
            return ExitCode::FAILURE;
        }
    };
    init_logging(args.verbose);

    let text = match std::fs::read_to_string(&args.script_path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("tcl: couldn't read \"{}\": {err}", args.script_path.display());
            return ExitCode::FAILURE;
        }
    };

    let code = Rc::new(Code {
        value: text.chars().collect(),
        source: Rc::new(Source::File {
            path: Rc::from(args.script_path.display().to_string().as_str()),
        }),
    });

    let mut interp = Interp::new();
    tcl_builtin::register_all(&mut interp);

    let (script, _consumed) = match tcl_syntax::parser::parse(&code, false) {
        Ok(parsed) => parsed,
        Err(err) => {
            report(&err.to_string(), &err.location);
            return ExitCode::FAILURE;
        }
    };

    match tcl_semantics::eval_script(&mut interp, &script) {
        Ok(_) | Err(EvalError::Return(_)) => ExitCode::SUCCESS,
        Err(EvalError::SyntaxError(err)) => {
            report(&err.to_string(), &err.location);
            ExitCode::FAILURE
        }
        Err(err) => {
            log::debug!("top-level evaluation failed: {err}");
            eprintln!("tcl: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Prints `message` to stderr followed by a single-line caret diagnostic
/// pointing at `location`'s first rune.
fn report(message: &str, location: &tcl_syntax::source::Location) {
    eprintln!("tcl: {message}");
    let (line, column) = location.line_column();
    let prefix = format!("  {line}:{column}: ");
    eprintln!("{prefix}{}", location.line_text());
    eprintln!("{}^", " ".repeat(prefix.len() + column.saturating_sub(1)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn script_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    #[test]
    fn a_well_formed_script_evaluates_successfully() {
        let file = script_file("set x 1\n");
        let text = std::fs::read_to_string(file.path()).unwrap();
        let code = Rc::new(Code {
            value: text.chars().collect(),
            source: Rc::new(Source::Unknown),
        });
        let mut interp = Interp::new();
        tcl_builtin::register_all(&mut interp);
        let (script, _) = tcl_syntax::parser::parse(&code, false).unwrap();
        assert!(tcl_semantics::eval_script(&mut interp, &script).is_ok());
    }

    #[test]
    fn a_top_level_return_is_not_an_error() {
        let text = "return 5\n";
        let code = Rc::new(Code {
            value: text.chars().collect(),
            source: Rc::new(Source::Unknown),
        });
        let mut interp = Interp::new();
        tcl_builtin::register_all(&mut interp);
        let (script, _) = tcl_syntax::parser::parse(&code, false).unwrap();
        let result = tcl_semantics::eval_script(&mut interp, &script);
        assert_matches::assert_matches!(result, Err(EvalError::Return(ref v)) if v == "5");
    }

    #[test]
    fn an_unterminated_brace_is_a_syntax_error() {
        let text = "set x {unterminated\n";
        let code = Rc::new(Code {
            value: text.chars().collect(),
            source: Rc::new(Source::Unknown),
        });
        assert!(tcl_syntax::parser::parse(&code, false).is_err());
    }
}
