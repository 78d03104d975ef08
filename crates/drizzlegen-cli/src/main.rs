fn main() -> anyhow::Result<()> {
    drizzlegen_cli::parse_and_run()
}
