fn main() {
    #[cfg(feature = "cli")]
    cifra::cli::run();

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("cifra: CLI not enabled. Rebuild with `--features cli`.");
        std::process::exit(1);
    }
}
