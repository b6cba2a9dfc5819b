use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Profile name
    /// Section of the profile file holding the endpoint settings. Default is 'default'.
    /// A missing profile falls back to the built-in endpoint.
    #[clap(short = 'p', long, default_value = "default", help = "profile name")]
    profile: String,

    #[clap(short = 'e', long, help = "SOAP endpoint URL")]
    endpoint: Option<String>,

    #[clap(long, help = "prefix prepended to the endpoint URL")]
    proxy: Option<String>,

    #[clap(
        long,
        conflicts_with = "proxy",
        help = "ignore any proxy prefix from the profile"
    )]
    no_proxy: bool,

    #[clap(short = 'v', long, help = "show exchange durations")]
    verbose: bool,

    #[clap(long, help = "write logs to this file")]
    log_file: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    profile: String,
    endpoint: Option<String>,
    proxy: Option<String>,
    no_proxy: bool,
    verbose: bool,
    log_file: Option<String>,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            profile: args.profile,
            endpoint: args.endpoint,
            proxy: args.proxy,
            no_proxy: args.no_proxy,
            verbose: args.verbose,
            log_file: args.log_file,
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

    pub fn profile(&self) -> &String {
        &self.profile
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    pub fn no_proxy(&self) -> bool {
        self.no_proxy
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn log_file(&self) -> Option<&str> {
        self.log_file.as_deref()
    }
}
