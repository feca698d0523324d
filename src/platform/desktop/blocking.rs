/// Runs blocking storage work from a UI future. Desktop storage is a local
/// SQLite file, so the work runs inline on the calling task.
pub fn run_blocking<F, T>(f: F) -> T
where
    F: FnOnce() -> T,
{
    f()
}
