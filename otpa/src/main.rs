use clap::Parser;
use otpa::app::OtpaCliArguments;

fn main() {
    env_logger::init();
    let args = OtpaCliArguments::parse();
    match args.op.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running otpa: {e}");
            std::process::exit(1);
        }
    }
}
