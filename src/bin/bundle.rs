use jaal_conformance::bundle::bundle;
use jaal_conformance::config::HarnessConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = match HarnessConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("jaal-bundle: configuration error: {e}");
            std::process::exit(1);
        }
    };

    match bundle(&config.schema_dir(), "jaal").await {
        Ok(document) => println!("{document}"),
        Err(e) => {
            eprintln!("jaal-bundle: {e}");
            std::process::exit(1);
        }
    }
}
