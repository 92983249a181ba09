use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::{into_miette_result, Format};

pub fn run(format: Format) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline("tally> ") {
            Ok(line) => {
                // If we can't append the history we just ignore this
                let _ = rl.add_history_entry(line.as_str());

                if line.trim().is_empty() {
                    continue;
                }

                match into_miette_result(tally_lib::run_str(&line)) {
                    Ok(counts) => println!("{}", format.render(&counts)),
                    Err(report) => {
                        let report = report.with_source_code(line.clone());
                        eprintln!("{report:?}");
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {}
            Err(ReadlineError::Eof) => {
                // User wants to exit the REPL
                println!("Bye!");
                break;
            }
            Err(err) => {
                eprintln!("{err}");
                break;
            }
        }
    }

    Ok(())
}
