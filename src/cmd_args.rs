use std::ffi::OsString;

pub use clap::Parser;

const AFTER_HELP: &str = "\
Examples:
  api-tester                          # Interactive mode
  api-tester <url>                    # Quick GET request
  api-tester --set-token <token>      # Set token
  api-tester --clear-token            # Clear token

Interactive mode provides full functionality.";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None, after_help = AFTER_HELP)]
struct ClapArgs {
    #[clap(help = "URL for a single GET request; https:// is added when no scheme is given")]
    url: Option<String>,

    #[clap(
        long,
        value_name = "TOKEN",
        help = "Save a bearer token and exit",
        conflicts_with_all = ["url", "clear_token"]
    )]
    set_token: Option<String>,

    #[clap(long, help = "Delete the saved token and exit", conflicts_with = "url")]
    clear_token: bool,

    #[clap(short = 'v', long, help = "Print request headers and body")]
    verbose: bool,

    #[clap(
        long,
        value_name = "SECONDS",
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Request timeout in seconds [default: 30]"
    )]
    timeout: Option<u64>,

    #[clap(long, help = "Do not display response headers")]
    no_headers: bool,
}

/// What the invocation asks the program to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    SingleRequest(String),
    SetToken(String),
    ClearToken,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    mode: Mode,
    verbose: bool,
    timeout: Option<u64>,
    no_headers: bool,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        let mode = if let Some(token) = args.set_token {
            Mode::SetToken(token)
        } else if args.clear_token {
            Mode::ClearToken
        } else if let Some(url) = args.url {
            Mode::SingleRequest(url)
        } else {
            Mode::Interactive
        };

        Self {
            mode,
            verbose: args.verbose,
            timeout: args.timeout,
            no_headers: args.no_headers,
        }
    }
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::try_parse_from(itr).map(Into::into)
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Timeout override, if given on the command line
    pub fn timeout(&self) -> Option<u64> {
        self.timeout
    }

    pub fn no_headers(&self) -> bool {
        self.no_headers
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_values() {
        let args = CommandLineArgs::parse_from(["program"]);
        assert_eq!(args.mode(), &Mode::Interactive);
        assert!(!args.verbose());
        assert_eq!(args.timeout(), None);
        assert!(!args.no_headers());
    }

    #[test]
    fn test_parse_args_single_url() {
        let args = CommandLineArgs::parse_from(["program", "example.com/api"]);
        assert_eq!(
            args.mode(),
            &Mode::SingleRequest("example.com/api".to_string())
        );
    }

    #[test]
    fn test_parse_args_set_token() {
        let args = CommandLineArgs::parse_from(["program", "--set-token", "abc"]);
        assert_eq!(args.mode(), &Mode::SetToken("abc".to_string()));
    }

    #[test]
    fn test_parse_args_clear_token() {
        let args = CommandLineArgs::parse_from(["program", "--clear-token"]);
        assert_eq!(args.mode(), &Mode::ClearToken);
    }

    #[test]
    fn test_parse_args_flags() {
        let args = CommandLineArgs::parse_from([
            "program",
            "-v",
            "--timeout",
            "5",
            "--no-headers",
            "example.com",
        ]);
        assert!(args.verbose());
        assert_eq!(args.timeout(), Some(5));
        assert!(args.no_headers());
    }

    #[test]
    fn test_set_token_requires_value() {
        assert!(CommandLineArgs::try_parse_from(["program", "--set-token"]).is_err());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        assert!(CommandLineArgs::try_parse_from(["program", "--timeout", "0"]).is_err());
    }

    #[test]
    fn test_conflicting_modes_are_rejected() {
        assert!(
            CommandLineArgs::try_parse_from(["program", "--clear-token", "example.com"]).is_err()
        );
    }

    #[test]
    fn test_url_help_is_listed_once() {
        use clap::CommandFactory;
        let help = ClapArgs::command().render_long_help().to_string();
        assert_eq!(help.matches("URL for a single GET request").count(), 1);
        assert!(help.contains("https:// is added when no scheme is given"));
    }

    #[test]
    fn test_help_is_available() {
        let err = CommandLineArgs::try_parse_from(["program", "-h"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
