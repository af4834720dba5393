use lisplet::interpreter;
use rustyline::{history::History, Editor, Helper};

const HISTORY_FILE: &str = ".lisplethistory";

pub fn greet() {
    eprintln!("Welcome to the lisplet REPL.")
}

pub type Error = rustyline::error::ReadlineError;

fn run_line(ip: &interpreter::Interpreter, line: &str) {
    match ip.eval(line) {
        Ok(value) => println!("{}", value),
        Err(err) => eprintln!("Error -- {}", err),
    }
}

fn run_loop<H: Helper, I: History>(
    ip: &interpreter::Interpreter,
    editor: &mut Editor<H, I>,
) -> Result<(), Error> {
    loop {
        run_line(ip, &editor.readline(">> ")?);
    }
}

pub fn run() -> Result<(), Error> {
    let ip = interpreter::Interpreter::default();
    let mut editor = {
        let config = rustyline::Config::builder()
            .auto_add_history(true)
            .completion_type(rustyline::CompletionType::List)
            .build();
        rustyline::Editor::<(), _>::with_config(config)?
    };
    _ = editor.load_history(HISTORY_FILE);
    let res = run_loop(&ip, &mut editor);
    _ = editor.save_history(HISTORY_FILE);
    match res {
        // leaving with ^D or ^C is a normal way out of the loop
        Err(Error::Eof | Error::Interrupted) => Ok(()),
        other => other,
    }
}
