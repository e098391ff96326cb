use std::thread;

use itertools::Itertools;
use log::{debug, info};

use crate::{
    error::{SmallError, SmallResult},
    storage::tuple::Row,
    window::WindowConfig,
};

use super::{run_partition, VecCursor};

/// Split rows sorted by (partition key, order key) into partitions.
///
/// A partition is a maximal run of consecutive rows with the same value in
/// `key_column`. Rows are never reordered, so rows with equal order keys stay
/// in arrival order.
pub fn split_partitions(rows: Vec<Row>, key_column: usize) -> Vec<Vec<Row>> {
    let groups = rows
        .into_iter()
        .group_by(|row| row.get_cell(key_column).cloned());

    let mut partitions = Vec::new();
    for (_, group) in &groups {
        partitions.push(group.collect());
    }
    partitions
}

/// Evaluate every partition on a pool of `workers` threads, each partition
/// with its own evaluator.
///
/// The inner results come back in the order of `partitions`. A failing
/// partition only fails its own slot. The outer error is reserved for the
/// pool itself breaking down.
pub fn evaluate_partitions(
    partitions: Vec<Vec<Row>>,
    config: &WindowConfig,
    workers: usize,
) -> SmallResult<Vec<SmallResult<Vec<Row>>>> {
    let partition_count = partitions.len();
    let workers = workers.max(1).min(partition_count.max(1));
    info!(
        "evaluating {} partitions on {} workers",
        partition_count, workers
    );

    let (job_sender, job_receiver) = crossbeam::channel::unbounded();
    for job in partitions.into_iter().enumerate() {
        job_sender
            .send(job)
            .map_err(|_| SmallError::internal_invariant("partition queue closed early"))?;
    }
    drop(job_sender);

    let (result_sender, result_receiver) = crossbeam::channel::unbounded();
    let config = *config;

    crossbeam::scope(|s| {
        for _ in 0..workers {
            // thread local copies
            let jobs = job_receiver.clone();
            let results = result_sender.clone();

            s.spawn(move |_| {
                for (index, rows) in jobs.iter() {
                    let result = run_partition(VecCursor::new(rows), &config);
                    debug!(
                        "{:?} finished partition {}, ok: {}",
                        thread::current().id(),
                        index,
                        result.is_ok()
                    );
                    if results.send((index, result)).is_err() {
                        break;
                    }
                }
            });
        }
    })
    .map_err(|_| SmallError::internal_invariant("a partition worker panicked"))?;
    drop(result_sender);

    let mut slots: Vec<Option<SmallResult<Vec<Row>>>> = (0..partition_count).map(|_| None).collect();
    for (index, result) in result_receiver.try_iter() {
        slots[index] = Some(result);
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(index, slot)| {
            slot.ok_or_else(|| {
                SmallError::internal_invariant(&format!("partition {} produced no result", index))
            })
        })
        .collect()
}
