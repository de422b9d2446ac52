use crate::*;

pub fn handle_configure_commands(
    cli: &Cli,
    config: &ConfigFile,
    runner: &dyn CommandRunner,
) -> anyhow::Result<bool> {
    let (name, positional, keywords) = match &cli.command {
        Commands::Show {
            filters,
            xml,
            changed,
        } => {
            let mut keywords = Keywords::new();
            if *xml {
                keywords.insert("xml".to_string(), OptionValue::Bool(true));
            }
            if *changed {
                keywords.insert("changed".to_string(), OptionValue::Bool(true));
            }
            ("show", split_filters(filters), keywords)
        }
        Commands::Property { pairs } => ("property", pairs.clone(), Keywords::new()),
        _ => return Ok(false),
    };

    let dc = DcQuery::new(
        runner,
        config.crm.dc_query.clone(),
        config.crm.node_name.clone(),
    );
    let request = Dispatcher::new(config.crm.tool.clone(), &dc).dispatch(name, positional, keywords)?;
    let command_line = request.command_line();

    if cli.dry_run {
        let report = DryRunReport {
            command_line,
            options: request.options,
        };
        print_one(cli.json, true, report, |r| r.command_line.join(" "))?;
        return Ok(true);
    }

    let out = runner.run(&command_line, &request.run_options())?;
    let exit_code = out.exit_code;
    print_run(
        cli.json,
        RunReport {
            command_line,
            exit_code,
            stdout: out.stdout,
            stderr: out.stderr,
        },
    )?;

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(true)
}
