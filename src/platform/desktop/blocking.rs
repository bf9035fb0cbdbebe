/// Sqlite work is small enough to run on the UI thread here; this shim
/// marks every call site where that assumption lives.
pub fn run_blocking<F, T>(work: F) -> T
where
    F: FnOnce() -> T,
{
    work()
}
