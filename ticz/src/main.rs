fn main() -> anyhow::Result<()> {
    ticz::run()
}
