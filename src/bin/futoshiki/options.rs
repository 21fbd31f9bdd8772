use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Result};
use clap::ArgMatches;
use futoshiki::model::ModelKind;
use futoshiki::solve::{
    ArcConsistency, ForwardChecking, InputOrder, MinimumRemainingValues, PlainCheck, Propagator,
    SolutionLimit, VariableOrdering,
};

#[derive(Clone, Debug)]
pub(crate) struct Options {
    input: Option<PathBuf>,
    model: ModelKind,
    propagator: Propagator,
    ordering: VariableOrdering,
    limit: SolutionLimit,
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        let model = match matches.value_of("model") {
            None | Some("nary") => ModelKind::Nary,
            Some("binary") => ModelKind::Binary,
            Some(other) => bail!("unknown model: {}", other),
        };
        let propagator: Propagator = match matches.value_of("propagator") {
            None | Some("gac") => ArcConsistency.into(),
            Some("fc") => ForwardChecking.into(),
            Some("bt") => PlainCheck.into(),
            Some(other) => bail!("unknown propagator: {}", other),
        };
        let ordering: VariableOrdering = match matches.value_of("ordering") {
            None | Some("mrv") => MinimumRemainingValues.into(),
            Some("input") => InputOrder.into(),
            Some(other) => bail!("unknown variable ordering: {}", other),
        };
        let limit = if matches.is_present("all") {
            SolutionLimit::All
        } else if let Some(limit) = matches.value_of("limit") {
            let n = limit
                .parse::<usize>()
                .map_err(|_| anyhow!("invalid solution limit: {}", limit))?;
            if n == 0 {
                bail!("solution limit must be at least 1");
            }
            SolutionLimit::AtMost(n)
        } else {
            SolutionLimit::First
        };
        Ok(Self {
            input: matches.value_of("input").map(PathBuf::from),
            model,
            propagator,
            ordering,
            limit,
        })
    }

    /// `None` for stdin
    pub fn input(&self) -> Option<&Path> {
        self.input.as_deref()
    }

    pub fn model(&self) -> ModelKind {
        self.model
    }

    pub fn propagator(&self) -> Propagator {
        self.propagator
    }

    pub fn ordering(&self) -> VariableOrdering {
        self.ordering
    }

    pub fn limit(&self) -> SolutionLimit {
        self.limit
    }
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, Arg};

    App::new("Futoshiki")
        .author("Cameron Steffen <cam.steffen94@gmail.com>")
        .about("Solve Futoshiki puzzles")
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .takes_value(true)
                .value_name("PATH")
                .help("read the puzzle from a file instead of stdin")
                .display_order(1),
        )
        .arg(
            Arg::with_name("model")
                .short("m")
                .long("model")
                .takes_value(true)
                .possible_values(&["binary", "nary"])
                .default_value("nary")
                .help("encode rows and columns as pairwise or all-different constraints"),
        )
        .arg(
            Arg::with_name("propagator")
                .short("p")
                .long("propagator")
                .takes_value(true)
                .possible_values(&["bt", "fc", "gac"])
                .default_value("gac")
                .help("plain backtracking, forward checking or generalized arc consistency"),
        )
        .arg(
            Arg::with_name("ordering")
                .short("o")
                .long("ordering")
                .takes_value(true)
                .possible_values(&["mrv", "input"])
                .default_value("mrv")
                .help("how to choose the next cell to guess"),
        )
        .arg(
            Arg::with_name("all")
                .short("a")
                .long("all")
                .help("find every solution"),
        )
        .arg(
            Arg::with_name("limit")
                .short("l")
                .long("limit")
                .takes_value(true)
                .value_name("N")
                .conflicts_with("all")
                .help("stop after N solutions"),
        )
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use futoshiki::model::ModelKind;
    use futoshiki::solve::{ForwardChecking, InputOrder, Propagator, SolutionLimit, VariableOrdering};

    use crate::options::{clap_app, Options};

    fn options(args: &[&str]) -> anyhow::Result<Options> {
        let matches = clap_app().get_matches_from_safe(args.iter().copied())?;
        Options::from_arg_matches(&matches)
    }

    #[test]
    fn defaults() {
        let options = options(&["futoshiki"]).unwrap();
        assert_eq!(None, options.input());
        assert_eq!(ModelKind::Nary, options.model());
        assert_eq!(Propagator::default(), options.propagator());
        assert_eq!(VariableOrdering::default(), options.ordering());
        assert_eq!(SolutionLimit::First, options.limit());
    }

    #[test]
    fn all_flags() {
        let options = options(&[
            "futoshiki", "-i", "puzzle.txt", "-m", "binary", "-p", "fc", "-o", "input", "-l", "3",
        ])
        .unwrap();
        assert_eq!(Some(Path::new("puzzle.txt")), options.input());
        assert_eq!(ModelKind::Binary, options.model());
        assert_eq!(Propagator::from(ForwardChecking), options.propagator());
        assert_eq!(VariableOrdering::from(InputOrder), options.ordering());
        assert_eq!(SolutionLimit::AtMost(3), options.limit());
    }

    #[test]
    fn invalid_limit() {
        assert!(options(&["futoshiki", "-l", "0"]).is_err());
        assert!(options(&["futoshiki", "-l", "x"]).is_err());
        assert!(options(&["futoshiki", "-a", "-l", "2"]).is_err());
        assert!(options(&["futoshiki", "-p", "ac3"]).is_err());
    }
}
