use clap::Parser;
use commit_scopes::{
    Cli, DiscoveryReport, JsonReporter, OutputFormat, Reporter, ScopeResolver, TerminalReporter,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut resolver = ScopeResolver::new().with_follow_symlinks(cli.follow_symlinks);
    if let Some(depth) = cli.max_depth {
        resolver = resolver.with_max_depth(depth);
    }

    let mut report = DiscoveryReport::new(&cli.root);
    for result in resolver.discover(&cli.root) {
        report.add(result);
    }

    let reporter: Box<dyn Reporter> = match cli.format {
        OutputFormat::Terminal => Box::new(TerminalReporter::new(cli.verbose)),
        OutputFormat::Json => Box::new(JsonReporter::new()),
    };
    print!("{}", reporter.report(&report));

    if cli.strict && report.has_errors() {
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
