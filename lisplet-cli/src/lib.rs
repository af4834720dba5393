/// Module representing high-level entry-point of the REPL.
pub mod repl;

pub mod run {

    /// Module that holds implementation detail of [`crate::run::run`].
    /// It glues [`lisplet::interpreter`] and [`crate::repl`] together.
    mod glue {
        use super::{Mode, Opts};
        use crate::repl;
        use lisplet::{expr, interpreter};
        use std::{fs::File, io};
        use thiserror::Error;

        #[derive(Error, Debug)]
        pub enum Error {
            #[error(transparent)]
            Run(#[from] interpreter::Error),
            #[error(transparent)]
            Repl(#[from] rustyline::error::ReadlineError),
        }

        pub type Result<T> = std::result::Result<T, Error>;

        fn open_file(path: &std::path::Path) -> std::result::Result<File, interpreter::Error> {
            File::open(path).map_err(interpreter::Error::from)
        }

        pub fn run(opts: Opts) -> Result<Option<expr::Value>> {
            Ok(match opts.mode {
                Mode::Script(path) => interpreter::run(open_file(&path)?)?,
                Mode::Stdin => interpreter::run(io::stdin())?,
                Mode::Repl => {
                    repl::greet();
                    repl::run()?;
                    None
                }
            })
        }
    }

    use std::{path::PathBuf, process::exit};

    #[derive(Debug)]
    pub enum Mode {
        Script(PathBuf),
        Repl,
        Stdin,
    }

    impl Mode {
        /// REPL when stdin is a terminal, otherwise read stdin as a script.
        pub fn stdin_or_repl() -> Self {
            if atty::is(atty::Stream::Stdin) {
                Self::Repl
            } else {
                Self::Stdin
            }
        }
    }

    #[derive(Debug)]
    pub struct Opts {
        pub mode: Mode,
    }

    pub fn run(opts: Opts) {
        match glue::run(opts) {
            Ok(Some(value)) => println!("{}", value),
            Ok(None) => {}
            Err(err) => {
                eprintln!("{}", err);
                exit(1);
            }
        }
    }
}

pub mod parse {
    use itertools::Itertools;
    use lisplet::{expr::Node, parser};
    use std::{fs, io, path::PathBuf};
    use thiserror::Error;

    #[derive(Error, Debug)]
    enum Error {
        #[error(transparent)]
        ParseErr(#[from] parser::ParseError),
        #[error(transparent)]
        IOErr(#[from] io::Error),
    }

    fn inner(file: PathBuf) -> Result<Vec<Node>, Error> {
        fs::read_to_string(file)?
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| parser::parse_line(line).map_err(Error::from))
            .collect()
    }

    pub fn run(file: PathBuf) {
        match inner(file) {
            Ok(x) => println!("{}", x.iter().join("\n")),
            Err(e) => eprintln!("Error -- {}", e),
        }
    }
}

pub mod lex {
    use itertools::Itertools;
    use lisplet::lexer;
    use std::{fs, io, path::PathBuf};

    fn inner(file: PathBuf) -> Result<Vec<lexer::Token>, io::Error> {
        Ok(lexer::tokenize(&fs::read_to_string(file)?))
    }

    pub fn run(file: PathBuf) {
        match inner(file) {
            Ok(x) => println!("{}", x.iter().map(|tok| format!("{:?}", tok)).join("\n")),
            Err(e) => eprintln!("Error -- {}", e),
        }
    }
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
/// A little Lisp-like expression interpreter written in Rust.
pub struct Args {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run program from a script file, one form per line.
    Run {
        /// Program to run.
        file: PathBuf,
    },
    /// Parse program from a script file.
    Parse {
        /// Program to parse.
        file: PathBuf,
    },

    /// Lex (tokenize) program from a script file.
    Lex {
        /// Program to lex.
        file: PathBuf,
    },
}

pub fn run() {
    let args = Args::parse();
    let Some(command) = args.command else {
        return run::run(run::Opts {
            mode: run::Mode::stdin_or_repl(),
        });
    };
    match command {
        Commands::Run { file } => {
            run::run(run::Opts {
                mode: run::Mode::Script(file),
            });
        }
        Commands::Parse { file } => parse::run(file),
        Commands::Lex { file } => lex::run(file),
    }
}
