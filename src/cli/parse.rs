use super::CliFlags;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidNumber(String),
    MissingValue(String),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::MissingValue(s) => write!(f, "Missing value for: {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "--no-upper" => flags.no_upper = true,
            "--no-lower" => flags.no_lower = true,
            "--no-digits" => flags.no_digits = true,
            "--symbols" => flags.symbols = true,
            flag @ ("-l" | "--length") => {
                i += 1;
                flags.length = Some(numeric_value(args, i, flag)?);
            }
            flag @ ("-n" | "--number") => {
                i += 1;
                flags.number = Some(numeric_value(args, i, flag)?);
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

// Rejects negatives and garbage at the boundary: usize parse fails on both.
fn numeric_value(args: &[String], i: usize, flag: &str) -> Result<usize, ParseError> {
    let value = args
        .get(i)
        .ok_or_else(|| ParseError::MissingValue(flag.to_string()))?;
    value
        .parse()
        .map_err(|_| ParseError::InvalidNumber(value.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("passmint")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_args_parse_to_default_flags() {
        assert_eq!(parse(&args(&[])).unwrap(), CliFlags::default());
    }

    #[test]
    fn parses_length_and_number() {
        let flags = parse(&args(&["-l", "16", "-n", "3"])).unwrap();
        assert_eq!(flags.length, Some(16));
        assert_eq!(flags.number, Some(3));
    }

    #[test]
    fn parses_class_toggles() {
        let flags = parse(&args(&["--no-upper", "--no-digits", "--symbols"])).unwrap();
        assert!(flags.no_upper);
        assert!(!flags.no_lower);
        assert!(flags.no_digits);
        assert!(flags.symbols);
    }

    #[test]
    fn zero_length_is_accepted() {
        let flags = parse(&args(&["--length", "0"])).unwrap();
        assert_eq!(flags.length, Some(0));
    }

    #[test]
    fn negative_length_is_rejected() {
        assert_eq!(
            parse(&args(&["-l", "-5"])),
            Err(ParseError::InvalidNumber("-5".to_string()))
        );
    }

    #[test]
    fn missing_value_is_reported() {
        assert_eq!(
            parse(&args(&["--length"])),
            Err(ParseError::MissingValue("--length".to_string()))
        );
    }

    #[test]
    fn unknown_argument_is_rejected() {
        assert_eq!(
            parse(&args(&["--frobnicate"])),
            Err(ParseError::UnknownArg("--frobnicate".to_string()))
        );
    }
}
