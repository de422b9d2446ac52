use crate::domain::models::{JsonOut, RunReport};
use serde::Serialize;
use std::io::Write;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    ok: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// Text mode relays the tool's streams untouched; JSON mode wraps them.
pub fn print_run(json: bool, report: RunReport) -> anyhow::Result<()> {
    if json {
        let ok = report.exit_code == 0;
        return print_one(true, ok, report, |_| String::new());
    }
    print!("{}", report.stdout);
    eprint!("{}", report.stderr);
    std::io::stdout().flush()?;
    Ok(())
}
