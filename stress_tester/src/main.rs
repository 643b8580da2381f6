use std::sync::Arc;
use std::time::Instant;

use cfg::Cfg;
use clap::Parser;
use taskqueue::{LockHandle, PriorityQueue, Task};

pub mod cfg;

fn main() {
    let cfg = cfg::Cfg::parse();
    println!("Running configuration:\n{cfg:#?}");

    let res = match cfg.locking {
        cfg::Locking::None => run_unlocked(cfg),
        cfg::Locking::Shared => run_shared_mutex(cfg),
        cfg::Locking::Split => run_split_mutexes(cfg),
    };
    if let Err(e) = res {
        eprintln!("Error: {e:?}");
    }
}

/// Single-threaded throughput loop; the queue keeps its default no-op
/// locks, so no other thread may touch it.
fn run_unlocked(cfg: Cfg) -> anyhow::Result<()> {
    let total = cfg
        .task_num
        .checked_mul(cfg.producer_num)
        .ok_or_else(|| anyhow::anyhow!("Overflow while calculating task count"))?;

    let queue: PriorityQueue<Task> = PriorityQueue::new();

    let start = Instant::now();
    for i in 0..total {
        queue.push((i % 64) as i32, false, Task::with_empty_load("unlocked"));
    }
    let mut popped = 0usize;
    while queue.pop_prefix(|_, _| {}) {
        popped += 1;
    }
    let elapsed = start.elapsed();
    anyhow::ensure!(popped == total, "popped {popped} of {total} tasks");

    println!(
        "Pushed and popped {} tasks in {:?} without locking ({:.2} tasks/sec)",
        total,
        elapsed,
        total as f64 / elapsed.as_secs_f64()
    );
    println!("Queue capacity settled at {}", queue.capacity());
    Ok(())
}

fn run_shared_mutex(cfg: Cfg) -> anyhow::Result<()> {
    let mut queue: PriorityQueue<Task> = PriorityQueue::new();
    queue.set_locking(LockHandle::mutex());
    run_stress(cfg, queue)
}

fn run_split_mutexes(cfg: Cfg) -> anyhow::Result<()> {
    let mut queue: PriorityQueue<Task> = PriorityQueue::new();
    queue.set_queue_locking(LockHandle::mutex());
    queue.set_free_locking(LockHandle::mutex());
    run_stress(cfg, queue)
}

fn run_stress(cfg: Cfg, queue: PriorityQueue<Task>) -> anyhow::Result<()> {
    use taskqueue::test::stress::{StressTestConfig, run_stress_test};

    let config = StressTestConfig {
        num_producers: cfg.producer_num,
        num_tasks: cfg.task_num,
        num_consumers: cfg.consumer_num,
        payload_size_range: (256, 1_024),
        pop_interval_ms: cfg.pop_interval_ms,
        pop_batch_size: cfg.pop_batch_size,
        priority_range: (-100, 100),
        run_duration_seconds: cfg.run_duration_seconds,
    };
    let results = run_stress_test(Arc::new(queue), config);
    results.print_summary();
    Ok(())
}
