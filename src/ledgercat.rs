use env_logger::Env;
use std::env;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    match ledgercat::run_app(env::args().collect()) {
        Ok(_) => std::process::exit(0),
        Err(x) => {
            eprintln!("{}", x);
            std::process::exit(1)
        }
    }
}
