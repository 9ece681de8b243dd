fn main() -> anyhow::Result<()> {
    ai_history_report::cli::run()
}
