use clap::{App, Arg};
use snapsat::formula::dimacs::{parse, DimacsParseError};
use snapsat::formula::Formula;
use snapsat::*;
use std::fs::File;
use std::time::Instant;

fn main() {
    env_logger::init();

    let matches = App::new("snapsat")
        .arg(Arg::with_name("INPUT").help("input file (in CNF)").index(1))
        .get_matches();

    let start = Instant::now();

    let f = if let Some(path) = matches.value_of("INPUT") {
        parse_from_file(path)
    } else {
        parse(std::io::stdin())
    };

    match f {
        Ok(f) => {
            let parsed = Instant::now();

            let mut solver = Solver::new(f);
            let result = solver.solve();

            let solved = Instant::now();

            println!("{}", result);
            println!("parsed in {:.6}s", (parsed - start).as_secs_f64());
            println!("solved in {:.6}s", (solved - parsed).as_secs_f64());
            println!("total {:.6}s", (solved - start).as_secs_f64());

            let exit_code = match result {
                SatResult::Satisfiable => 0,
                SatResult::Unsatisfiable => 1,
            };
            std::process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("parse error: {:?}", e);
            std::process::exit(-1);
        }
    }
}

fn parse_from_file(path: &str) -> Result<Formula, DimacsParseError> {
    let file = File::open(path)?;
    parse(file)
}
