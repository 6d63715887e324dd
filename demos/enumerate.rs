use clap::Parser;

use tt_rs::table::DynamicTruthTable;
use tt_rs::value::num_functions;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Number of variables.
    #[arg(value_name = "INT", default_value = "3")]
    n: usize,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let args = Cli::parse();
    println!("args = {:?}", args);

    if args.n > 4 {
        color_eyre::eyre::bail!("enumerating all functions of {} variables is not feasible", args.n);
    }

    // Number of functions by support size.
    let mut histogram = vec![0u64; args.n + 1];
    let mut tt = DynamicTruthTable::try_new(args.n)?;
    loop {
        let support = (0..args.n).filter(|&i| tt.has_var(i)).count();
        histogram[support] += 1;

        tt.next_inplace();
        if tt.is_const0() {
            break;
        }
    }

    println!("Total functions: {}", num_functions(args.n));
    for (size, count) in histogram.iter().enumerate() {
        println!("- support size {}: {}", size, count);
    }

    println!("Done in {:.3} s", time_total.elapsed().as_secs_f64());
    Ok(())
}
