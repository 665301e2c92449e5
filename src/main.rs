use anyhow::Context;
use betterflag::logging::init_tracing;
use betterflag::FlagSet;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut flags = FlagSet::from_env();
    let x_value = flags.uint("xValue", 100, "Define X value, default is 100");
    let username = flags.string("username", "Gabriel Correia", "Setups user name");

    let report = flags.parse()?;
    for err in &report.errors {
        eprintln!("Warning: {}", err);
    }

    println!("Flag has parsed? {}", yes_no(flags.passed()));
    for arg in flags.args() {
        println!("Non flag value: {}", arg);
    }

    flags.print_defaults()?;
    flags.visit_all(|option| {
        println!("Option: {} is used? {}", option.name(), yes_no(option.used()));
    });

    println!("Number of arguments setted: {}", flags.n_flag());
    println!(
        "X value: {}",
        flags.get(x_value).context("xValue is not registered")?
    );
    println!(
        "Username: {}",
        flags.get(username).context("username is not registered")?
    );

    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
