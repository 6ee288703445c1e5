use jaal_conformance::config::HarnessConfig;
use jaal_conformance::engine::Draft2020Engine;
use jaal_conformance::runner::ConformanceRunner;

fn main() {
    let config = match HarnessConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("jaal-conformance: configuration error: {e}");
            std::process::exit(1);
        }
    };

    let engine = Draft2020Engine;
    let runner = ConformanceRunner::new(&config, &engine);
    let tally = runner.run_suite();

    println!("{tally}");
    let (_, failed) = tally.summary();
    if failed > 0 {
        std::process::exit(1);
    }
}
