#[derive(Debug, Clone, clap::Parser)]
pub struct Cfg {
    /// The locking configuration to run the queue under.
    pub locking: Locking,
    /// Number of producers that will push tasks to the queue.
    #[arg(short, long)]
    pub producer_num: usize,
    /// Number of tasks each producer will push to the queue during the test.
    #[arg(short, long)]
    pub task_num: usize,
    /// Number of consumers that will pop tasks from the queue.
    #[arg(short, long, default_value_t = 1)]
    pub consumer_num: usize,
    /// Delay between the start of each pop interval.
    #[arg(long, default_value_t = 5)]
    pub pop_interval_ms: u64,
    /// Number of tasks that will be popped per batch.
    #[arg(short = 'b', long, default_value_t = 100)]
    pub pop_batch_size: usize,
    // Hard cap on the test's execution time
    #[arg(long, default_value_t = 10)]
    pub run_duration_seconds: u64,
}

#[derive(Debug, Clone, strum::EnumString, clap::ValueEnum)]
pub enum Locking {
    /// No locking; runs a single-threaded push/pop loop.
    #[strum(ascii_case_insensitive)]
    None,
    /// One mutex shared by the free and queue lists.
    #[strum(ascii_case_insensitive)]
    Shared,
    /// Independent mutexes for the free and queue lists.
    #[strum(ascii_case_insensitive)]
    Split,
}
