use glogger::app;

fn main() -> anyhow::Result<()> {
    app::main()
}
