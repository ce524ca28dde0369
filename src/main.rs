use driftfield::Backdrop;

fn main() {
    env_logger::init();

    if let Err(e) = Backdrop::new().run() {
        log::error!("backdrop exited with error: {e}");
        std::process::exit(1);
    }
}
