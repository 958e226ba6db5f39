/// Returns the number of logical CPUs, at least 1.
pub fn count_cores() -> usize {
    num_cpus::get().max(1)
}
